use super::Output;
use anyhow::{Context, Result};
use geohashkit_core::neighbors;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
/// List the eight cells around a geohash
pub struct Subcommand {
	/// geohash in the centre
	hash: String,
}

pub fn run(arguments: &Subcommand, output: Output) -> Result<String> {
	let neighbors =
		neighbors(&arguments.hash).with_context(|| format!("Failed to find neighbours of {:?}", arguments.hash))?;
	output.render(
		|| {
			neighbors
				.iter()
				.map(|(label, hash)| format!("{label:<2} {hash}"))
				.collect::<Vec<_>>()
				.join("\n")
		},
		&neighbors,
	)
}
