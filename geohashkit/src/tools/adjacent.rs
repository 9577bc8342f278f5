use super::Output;
use anyhow::{Context, Result};
use geohashkit_core::{Direction, adjacent};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
/// Find the neighbouring cell in one direction
pub struct Subcommand {
	/// geohash to start from
	hash: String,

	/// direction to step: n, s, e, w (or north, south, east, west)
	#[arg(value_parser = Direction::parse_str)]
	direction: Direction,
}

pub fn run(arguments: &Subcommand, output: Output) -> Result<String> {
	let hash = adjacent(&arguments.hash, arguments.direction)
		.with_context(|| format!("Failed to step {} from {:?}", arguments.direction, arguments.hash))?;
	output.render(|| hash.clone(), &hash)
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use rstest::rstest;

	#[rstest]
	#[case("n", "6gkzwgmb")]
	#[case("south", "6gkzwgjy")]
	#[case("E", "6gkzwgnp")]
	#[case("West", "6gkzwgjx")]
	fn adjacent(#[case] direction: &str, #[case] expected: &str) {
		assert_eq!(
			run_command(vec!["geohashkit", "adjacent", "6gkzwgjz", direction]).unwrap(),
			expected
		);
	}

	#[test]
	fn invalid_direction() {
		let err = run_command(vec!["geohashkit", "adjacent", "6gkzwgjz", "up"]).unwrap_err();
		assert!(err.to_string().contains("invalid direction: expected one of n, s, e, w"));
	}
}
