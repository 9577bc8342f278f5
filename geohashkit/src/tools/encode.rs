use super::Output;
use anyhow::{Context, Result};
use geohashkit_core::encode;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
/// Encode a position into a geohash
pub struct Subcommand {
	/// latitude in degrees, -90 to 90
	#[arg(allow_negative_numbers = true)]
	latitude: f64,

	/// longitude in degrees, -180 to 180
	#[arg(allow_negative_numbers = true)]
	longitude: f64,

	/// number of symbols in the hash
	#[arg(long, short, default_value_t = 12)]
	length: usize,
}

pub fn run(arguments: &Subcommand, output: Output) -> Result<String> {
	log::debug!(
		"encode {}, {} with length {}",
		arguments.latitude,
		arguments.longitude,
		arguments.length
	);
	let hash = encode(arguments.latitude, arguments.longitude, arguments.length).with_context(|| {
		format!(
			"Failed to encode ({}, {}) with length {}",
			arguments.latitude, arguments.longitude, arguments.length
		)
	})?;
	output.render(|| hash.clone(), &hash)
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn encode() {
		assert_eq!(run_command(vec!["geohashkit", "encode", "1", "2", "-l", "3"]).unwrap(), "s01");
		assert_eq!(
			run_command(vec!["geohashkit", "encode", "57.64911", "10.40744"]).unwrap(),
			"u4pruydqqvj8"
		);
	}

	#[test]
	fn negative_numbers() {
		assert_eq!(
			run_command(vec!["geohashkit", "encode", "-25.382708", "-49.265506", "--length", "9"]).unwrap(),
			"6gkzwgjzn"
		);
	}

	#[test]
	fn json() {
		assert_eq!(
			run_command(vec!["geohashkit", "--json", "encode", "1", "2", "-l", "3"]).unwrap(),
			"\"s01\""
		);
	}

	#[test]
	fn invalid_length() {
		let err = run_command(vec!["geohashkit", "encode", "1", "2", "-l", "0"]).unwrap_err();
		assert_eq!(err.to_string(), "Failed to encode (1, 2) with length 0");
		assert_eq!(err.root_cause().to_string(), "invalid length: 0 must be between 1 and 22");
	}
}
