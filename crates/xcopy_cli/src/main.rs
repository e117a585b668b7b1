#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod error;

use error::Result;

#[derive(Parser)]
#[command(name = "xcopy", about = "Type-directed copying between JSON documents")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Copy SOURCE into DEST, using DEST as the typed template.
	Copy(cmd::copy::Args),
	/// Print how the copier classifies a document.
	Shape(cmd::shape::Args),
}

fn main() {
	init_tracing();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Copy(args) => cmd::copy::run(args),
		Commands::Shape(args) => cmd::shape::run(args),
	}
}

fn init_tracing() {
	let filter = EnvFilter::try_from_env("XCOPY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
