use std::path::PathBuf;

use objectdump::dump::ROOT_NAME;
use serde_json::Value;

use crate::cmd::Result;
use crate::cmd::input::read_input;
use crate::cmd::view::{ViewArgs, show};

#[derive(clap::Args)]
pub struct Args {
	/// JSON document, optionally zstd-compressed.
	pub file: PathBuf,
	#[command(flatten)]
	pub view: ViewArgs,
}

/// Dump a JSON document; the root is named after the file stem.
pub fn run(args: Args) -> Result<()> {
	let Args { file, view } = args;

	let bytes = read_input(&file)?;
	let value: Value = serde_json::from_slice(&bytes)?;
	let name = file.file_stem().map(|stem| stem.to_string_lossy().into_owned()).unwrap_or_else(|| ROOT_NAME.to_owned());

	show(&value, &name, view.dump_options(), &view)
}
