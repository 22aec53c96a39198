use chrono::Utc;

use crate::cmd::Result;
use crate::cmd::view::{ViewArgs, show};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub view: ViewArgs,
}

/// Dump the current UTC time with its calendar properties.
pub fn run(args: Args) -> Result<()> {
	let Args { view } = args;
	let now = Utc::now();
	show(&now, "now", view.dump_options().with_properties(true), &view)
}
