//! Errors returned by the geohash codec.
//!
//! Every operation validates its input completely before producing output, so an error
//! never comes with a partial result.

use std::fmt;

/// A type alias for `std::result::Result` that uses [`GeohashError`] as the error type.
pub type Result<T> = std::result::Result<T, GeohashError>;

/// Represents a rejected input to one of the codec operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeohashError {
	/// The hash is empty, or contains a byte outside the geohash alphabet.
	InvalidHash {
		/// The offending byte, `None` for an empty hash.
		symbol: Option<u8>,
		/// Position of the offending byte inside the hash.
		position: usize,
	},
	/// A direction other than north, south, east or west.
	InvalidDirection,
	/// A hash length that is zero or too long for the requested operation.
	InvalidLength {
		length: usize,
		max: usize,
	},
	/// A coordinate that is NaN or infinite.
	InvalidCoordinate {
		latitude: f64,
		longitude: f64,
	},
}

impl GeohashError {
	pub(crate) fn empty_hash() -> Self {
		GeohashError::InvalidHash {
			symbol: None,
			position: 0,
		}
	}

	pub(crate) fn invalid_symbol(symbol: u8, position: usize) -> Self {
		GeohashError::InvalidHash {
			symbol: Some(symbol),
			position,
		}
	}

	/// Returns `true` for [`GeohashError::InvalidHash`].
	pub fn is_invalid_hash(&self) -> bool {
		matches!(self, GeohashError::InvalidHash { .. })
	}
}

impl fmt::Display for GeohashError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			GeohashError::InvalidHash { symbol: None, .. } => write!(f, "invalid geohash: hash is empty"),
			GeohashError::InvalidHash {
				symbol: Some(symbol),
				position,
			} => write!(
				f,
				"invalid geohash: symbol {:?} at position {position} is not in the geohash alphabet",
				char::from(*symbol)
			),
			GeohashError::InvalidDirection => {
				write!(f, "invalid direction: expected one of n, s, e, w")
			}
			GeohashError::InvalidLength { length, max } => {
				write!(f, "invalid length: {length} must be between 1 and {max}")
			}
			GeohashError::InvalidCoordinate { latitude, longitude } => {
				write!(f, "invalid coordinate: ({latitude}, {longitude}) is not finite")
			}
		}
	}
}

impl std::error::Error for GeohashError {}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(GeohashError::empty_hash(), "invalid geohash: hash is empty")]
	#[case(
		GeohashError::invalid_symbol(b'a', 2),
		"invalid geohash: symbol 'a' at position 2 is not in the geohash alphabet"
	)]
	#[case(GeohashError::InvalidDirection, "invalid direction: expected one of n, s, e, w")]
	#[case(
		GeohashError::InvalidLength { length: 13, max: 12 },
		"invalid length: 13 must be between 1 and 12"
	)]
	#[case(
		GeohashError::InvalidCoordinate { latitude: f64::NAN, longitude: 1.0 },
		"invalid coordinate: (NaN, 1) is not finite"
	)]
	fn display(#[case] error: GeohashError, #[case] expected: &str) {
		assert_eq!(error.to_string(), expected);
	}

	#[test]
	fn is_invalid_hash() {
		assert!(GeohashError::empty_hash().is_invalid_hash());
		assert!(GeohashError::invalid_symbol(b'!', 0).is_invalid_hash());
		assert!(!GeohashError::InvalidDirection.is_invalid_hash());
	}

	#[test]
	fn converts_into_boxed_error() {
		let boxed: Box<dyn std::error::Error + Send + Sync> = GeohashError::InvalidDirection.into();
		assert_eq!(boxed.to_string(), "invalid direction: expected one of n, s, e, w");
	}
}
