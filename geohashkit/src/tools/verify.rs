use super::Output;
use anyhow::{Result, bail};
use geohashkit_core::validate_hash;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
/// Check whether a string is a valid geohash
pub struct Subcommand {
	/// string to check
	hash: String,
}

/// Prints `true` for a valid geohash. An invalid one is reported as an error, so the exit
/// status tells the two apart.
pub fn run(arguments: &Subcommand, output: Output) -> Result<String> {
	if let Err(error) = validate_hash(&arguments.hash) {
		log::info!("{:?} is not a geohash", arguments.hash);
		bail!("{error}");
	}
	output.render(|| "true".to_string(), &true)
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn valid() {
		assert_eq!(run_command(vec!["geohashkit", "verify", "u4PRUYDQQVJ"]).unwrap(), "true");
		assert_eq!(run_command(vec!["geohashkit", "--json", "verify", "s01"]).unwrap(), "true");
	}

	#[test]
	fn invalid() {
		let err = run_command(vec!["geohashkit", "verify", "a"]).unwrap_err();
		assert_eq!(
			err.to_string(),
			"invalid geohash: symbol 'a' at position 0 is not in the geohash alphabet"
		);
	}
}
