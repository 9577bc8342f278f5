use super::Output;
use anyhow::{Context, Result};
use geohashkit_core::decode_point;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
/// Decode a geohash into the rounded centre of its cell
pub struct Subcommand {
	/// geohash to decode
	hash: String,
}

pub fn run(arguments: &Subcommand, output: Output) -> Result<String> {
	let point = decode_point(&arguments.hash).with_context(|| format!("Failed to decode {:?}", arguments.hash))?;
	output.render(|| format!("{} {}", point.latitude, point.longitude), &point)
}
