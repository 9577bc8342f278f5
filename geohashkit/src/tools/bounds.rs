use super::Output;
use anyhow::{Context, Result};
use geohashkit_core::decode;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
/// Show the exact area covered by a geohash
pub struct Subcommand {
	/// geohash to decode
	hash: String,
}

pub fn run(arguments: &Subcommand, output: Output) -> Result<String> {
	let area = decode(&arguments.hash).with_context(|| format!("Failed to decode {:?}", arguments.hash))?;
	output.render(
		|| {
			area.as_array()
				.iter()
				.map(ToString::to_string)
				.collect::<Vec<_>>()
				.join(" ")
		},
		&area,
	)
}
