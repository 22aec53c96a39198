use std::io::Read;
use std::path::Path;

use crate::cmd::error::{CliError, Result};

/// Upper bound on decompressed input size.
pub(crate) const MAX_DECOMPRESSED_BYTES: usize = 64 * 1024 * 1024;
/// zstd frame magic.
pub(crate) const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression mode detected for an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Compression {
	/// Raw uncompressed stream.
	None,
	/// zstd-compressed stream.
	Zstd,
}

/// Read an input file, transparently decompressing zstd frames.
pub(crate) fn read_input(path: &Path) -> Result<Vec<u8>> {
	let raw = std::fs::read(path)?;
	let (compression, bytes) = decode_bytes(raw, MAX_DECOMPRESSED_BYTES)?;
	tracing::debug!(path = %path.display(), ?compression, len = bytes.len(), "input loaded");
	Ok(bytes)
}

/// Detect and decode compression, returning `(mode, decoded_bytes)`.
pub(crate) fn decode_bytes(raw: Vec<u8>, limit: usize) -> Result<(Compression, Vec<u8>)> {
	if !raw.starts_with(&ZSTD_MAGIC) {
		return Ok((Compression::None, raw));
	}

	Ok((Compression::Zstd, decode_zstd(&raw, limit)?))
}

fn decode_zstd(raw: &[u8], limit: usize) -> Result<Vec<u8>> {
	let mut decoder = zstd::stream::read::Decoder::new(raw)?;
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf)?;
		if read == 0 {
			break;
		}

		if out.len() + read > limit {
			return Err(CliError::DecompressedTooLarge { limit });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}
