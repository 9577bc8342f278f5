// Import necessary modules and dependencies
mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use tools::Output;

// Define the command-line interface using the clap crate
#[derive(Parser, Debug)]
#[command(
	author, // Set the author
	version, // Set the version
	about, // Set a short description
	long_about = None, // Disable long description
	propagate_version = true, // Enable version flag for subcommands
	disable_help_subcommand = true, // Disable help subcommand
)]
struct Cli {
	#[command(subcommand)]
	command: Commands, // Set subcommands

	/// print results as JSON
	#[arg(long, global = true)]
	json: bool,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>, // Set verbosity flag
}

// Define subcommands for the command-line interface
#[derive(Subcommand, Debug)]
enum Commands {
	Encode(tools::encode::Subcommand),

	Decode(tools::decode::Subcommand),

	Bounds(tools::bounds::Subcommand),

	Bits(tools::bits::Subcommand),

	#[clap(alias = "check")]
	Verify(tools::verify::Subcommand),

	Adjacent(tools::adjacent::Subcommand),

	#[clap(alias = "neighbours")]
	Neighbors(tools::neighbors::Subcommand),
}

// Main function for running the command-line interface
fn main() -> Result<()> {
	let cli = Cli::parse();

	// Initialize logger and set log level based on verbosity flag
	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	println!("{}", run(cli)?);
	Ok(())
}

// Helper function for running subcommands
fn run(cli: Cli) -> Result<String> {
	let output = Output::from_flag(cli.json);
	match &cli.command {
		Commands::Encode(arguments) => tools::encode::run(arguments, output),
		Commands::Decode(arguments) => tools::decode::run(arguments, output),
		Commands::Bounds(arguments) => tools::bounds::run(arguments, output),
		Commands::Bits(arguments) => tools::bits::run(arguments, output),
		Commands::Verify(arguments) => tools::verify::run(arguments, output),
		Commands::Adjacent(arguments) => tools::adjacent::run(arguments, output),
		Commands::Neighbors(arguments) => tools::neighbors::run(arguments, output),
	}
}
