use super::Output;
use anyhow::{Context, Result};
use geohashkit_core::decode_to_bits;
use serde::Serialize;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
/// Print the interleaved bit pattern of a geohash
pub struct Subcommand {
	/// geohash of at most 12 symbols
	hash: String,

	/// print the bits in binary, padded to 5 bits per symbol
	#[arg(long, short)]
	binary: bool,
}

#[derive(Serialize)]
struct Bits {
	bits: u64,
	width: usize,
}

pub fn run(arguments: &Subcommand, output: Output) -> Result<String> {
	let bits = decode_to_bits(&arguments.hash)
		.with_context(|| format!("Failed to decode {:?} to bits", arguments.hash))?;
	let width = arguments.hash.len() * 5;
	output.render(
		|| {
			if arguments.binary {
				format!("{bits:0width$b}")
			} else {
				bits.to_string()
			}
		},
		&Bits { bits, width },
	)
}
