//! The four cardinal directions used to step between neighbouring cells.
//!
//! ```
//! use geohashkit_core::Direction;
//!
//! assert_eq!(Direction::parse_str("North").unwrap(), Direction::North);
//! assert_eq!(Direction::North.opposite(), Direction::South);
//! assert_eq!(Direction::West.to_string(), "w");
//! ```

use crate::error::{GeohashError, Result};
use std::{fmt::Display, str::FromStr};

/// A compass direction along one of the two axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Direction {
	North,
	South,
	East,
	West,
}

impl Direction {
	pub const ALL: [Direction; 4] = [Direction::North, Direction::South, Direction::East, Direction::West];

	pub fn as_str(&self) -> &'static str {
		match self {
			Direction::North => "n",
			Direction::South => "s",
			Direction::East => "e",
			Direction::West => "w",
		}
	}

	pub fn opposite(&self) -> Direction {
		match self {
			Direction::North => Direction::South,
			Direction::South => Direction::North,
			Direction::East => Direction::West,
			Direction::West => Direction::East,
		}
	}

	/// `true` for north and south, which move along the latitude axis.
	pub fn is_vertical(&self) -> bool {
		matches!(self, Direction::North | Direction::South)
	}

	/// Parses `n`, `s`, `e`, `w` or the full names, ignoring case and surrounding whitespace.
	pub fn parse_str(value: &str) -> Result<Self> {
		Ok(match value.trim().to_ascii_lowercase().as_str() {
			"n" | "north" => Direction::North,
			"s" | "south" => Direction::South,
			"e" | "east" => Direction::East,
			"w" | "west" => Direction::West,
			_ => return Err(GeohashError::InvalidDirection),
		})
	}
}

impl Display for Direction {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Direction {
	type Err = GeohashError;

	fn from_str(s: &str) -> Result<Self> {
		Direction::parse_str(s)
	}
}

impl TryFrom<u8> for Direction {
	type Error = GeohashError;

	/// Accepts the single bytes `n`, `s`, `e` and `w` in either case.
	fn try_from(value: u8) -> Result<Self> {
		Ok(match value.to_ascii_lowercase() {
			b'n' => Direction::North,
			b's' => Direction::South,
			b'e' => Direction::East,
			b'w' => Direction::West,
			_ => return Err(GeohashError::InvalidDirection),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("n", Direction::North)]
	#[case("N", Direction::North)]
	#[case("north", Direction::North)]
	#[case(" South ", Direction::South)]
	#[case("e", Direction::East)]
	#[case("EAST", Direction::East)]
	#[case("w", Direction::West)]
	#[case("west", Direction::West)]
	fn parse(#[case] input: &str, #[case] expected: Direction) {
		assert_eq!(Direction::parse_str(input).unwrap(), expected);
		assert_eq!(input.parse::<Direction>().unwrap(), expected);
	}

	#[rstest]
	#[case("")]
	#[case("ne")]
	#[case("up")]
	#[case("x")]
	fn parse_invalid(#[case] input: &str) {
		assert_eq!(Direction::parse_str(input), Err(GeohashError::InvalidDirection));
	}

	#[test]
	fn from_byte() {
		assert_eq!(Direction::try_from(b'N'), Ok(Direction::North));
		assert_eq!(Direction::try_from(b'w'), Ok(Direction::West));
		assert_eq!(Direction::try_from(b'x'), Err(GeohashError::InvalidDirection));
	}

	#[test]
	fn opposite_and_display() {
		for direction in Direction::ALL {
			assert_eq!(direction.opposite().opposite(), direction);
			assert_ne!(direction.opposite(), direction);
			assert_eq!(direction.is_vertical(), direction.opposite().is_vertical());
			assert_eq!(Direction::parse_str(&direction.to_string()).unwrap(), direction);
		}
	}
}
