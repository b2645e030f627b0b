mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Split a region into pieces
	Split(tools::split::Subcommand),

	/// Show the streaming plan of a region
	Plan(tools::plan::Subcommand),

	/// Show detailed help
	Help(tools::help::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Split(arguments) => tools::split::run(arguments),
		Commands::Plan(arguments) => tools::plan::run(arguments),
		Commands::Help(arguments) => tools::help::run(arguments),
	}
}
