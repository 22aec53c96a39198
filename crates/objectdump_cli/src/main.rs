#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "objectdump", about = "Render lazy object dumps as indented text")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Dump a JSON (or zstd-compressed JSON) document.
	Json(cmd::json::Args),
	/// Dump the built-in inventory sample or an inventory file.
	Sample(cmd::sample::Args),
	/// Dump the current time.
	Clock(cmd::clock::Args),
}

fn main() {
	init_logging();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> cmd::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Json(args) => cmd::json::run(args),
		Commands::Sample(args) => cmd::sample::run(args),
		Commands::Clock(args) => cmd::clock::run(args),
	}
}

fn init_logging() {
	let filter = EnvFilter::try_from_env("OBJECTDUMP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).init();
}
