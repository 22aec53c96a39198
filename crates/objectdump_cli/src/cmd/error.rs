use objectdump::dump::DumpError;
use thiserror::Error;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors produced while loading input and rendering dumps.
#[derive(Debug, Error)]
pub enum CliError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input was not valid JSON for the requested shape.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Dump construction or path navigation failed.
	#[error(transparent)]
	Dump(#[from] DumpError),
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Writing rendered output failed.
	#[error("render failed")]
	Render(#[from] std::fmt::Error),
}
