//! Encoding of coordinates into geohash strings.

use crate::{
	alphabet::{BASE32, BITS_PER_SYMBOL},
	error::{GeohashError, Result},
	types::GeoRange,
};

/// Longest hash `encode` produces. Beyond this the cells are narrower than `f64` can resolve.
pub const MAX_HASH_LENGTH: usize = 22;

/// Encodes a position into a geohash of exactly `length` symbols.
///
/// Bits are produced by alternately halving the longitude and the latitude range, starting
/// with longitude; a coordinate on a midpoint falls into the upper half. Every five bits form
/// one symbol, most significant bit first.
///
/// Finite coordinates outside `[-90, 90]` / `[-180, 180]` are clamped to the valid range.
///
/// # Errors
/// * [`GeohashError::InvalidLength`] if `length` is `0` or above [`MAX_HASH_LENGTH`].
/// * [`GeohashError::InvalidCoordinate`] if a coordinate is NaN or infinite.
///
/// # Examples
/// ```
/// use geohashkit_core::encode;
///
/// assert_eq!(encode(1.0, 2.0, 3).unwrap(), "s01");
/// assert_eq!(encode(57.64911, 10.40744, 11).unwrap(), "u4pruydqqvj");
/// ```
pub fn encode(latitude: f64, longitude: f64, length: usize) -> Result<String> {
	if length == 0 || length > MAX_HASH_LENGTH {
		return Err(GeohashError::InvalidLength {
			length,
			max: MAX_HASH_LENGTH,
		});
	}
	if !latitude.is_finite() || !longitude.is_finite() {
		return Err(GeohashError::InvalidCoordinate { latitude, longitude });
	}

	let latitude = clamp_axis(latitude, GeoRange::LATITUDE, "latitude");
	let longitude = clamp_axis(longitude, GeoRange::LONGITUDE, "longitude");

	let mut lat_range = GeoRange::LATITUDE;
	let mut lon_range = GeoRange::LONGITUDE;
	let mut is_lon = true;

	let mut hash = String::with_capacity(length);
	for _ in 0..length {
		let mut value = 0usize;
		for _ in 0..BITS_PER_SYMBOL {
			let upper = if is_lon {
				lon_range.bisect(longitude)
			} else {
				lat_range.bisect(latitude)
			};
			value = (value << 1) | usize::from(upper);
			is_lon = !is_lon;
		}
		hash.push(char::from(BASE32[value]));
	}

	Ok(hash)
}

fn clamp_axis(value: f64, range: GeoRange, name: &str) -> f64 {
	if range.contains(value) {
		return value;
	}
	let clamped = value.clamp(range.min, range.max);
	log::debug!("{name} {value} is out of range {range:?}, clamped to {clamped}");
	clamped
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::decode::decode;
	use rstest::rstest;

	#[rstest]
	#[case(1.0, 2.0, 3, "s01")]
	#[case(0.0, 0.0, 1, "s")]
	#[case(0.0, 0.0, 5, "s0000")]
	#[case(-90.0, -180.0, 6, "000000")]
	#[case(90.0, 180.0, 6, "zzzzzz")]
	#[case(57.64911, 10.40744, 11, "u4pruydqqvj")]
	#[case(42.6, -5.6, 5, "ezs42")]
	#[case(-25.382708, -49.265506, 9, "6gkzwgjzn")]
	#[case(37.7749, -122.4194, 8, "9q8yyk8y")]
	fn known_vectors(#[case] lat: f64, #[case] lon: f64, #[case] length: usize, #[case] expected: &str) {
		assert_eq!(encode(lat, lon, length).unwrap(), expected);
	}

	#[test]
	fn output_has_requested_length() -> Result<()> {
		for length in 1..=MAX_HASH_LENGTH {
			assert_eq!(encode(52.52, 13.405, length)?.len(), length);
		}
		Ok(())
	}

	#[test]
	fn longer_hashes_extend_shorter_ones() -> Result<()> {
		let full = encode(-33.8688, 151.2093, 12)?;
		for length in 1..12 {
			assert_eq!(encode(-33.8688, 151.2093, length)?, full[..length]);
		}
		Ok(())
	}

	#[test]
	fn round_trip_contains_point() -> Result<()> {
		let mut lat = -90.0;
		while lat <= 90.0 {
			let mut lon = -180.0;
			while lon <= 180.0 {
				for length in 1..=12 {
					let area = decode(encode(lat, lon, length)?)?;
					assert!(area.contains(lat, lon), "{lat},{lon} not in {area:?} (length {length})");
				}
				lon += 7.3;
			}
			lat += 4.1;
		}
		Ok(())
	}

	#[rstest]
	#[case(0)]
	#[case(MAX_HASH_LENGTH + 1)]
	fn invalid_length(#[case] length: usize) {
		assert_eq!(
			encode(1.0, 2.0, length),
			Err(GeohashError::InvalidLength {
				length,
				max: MAX_HASH_LENGTH
			})
		);
	}

	#[rstest]
	#[case(f64::NAN, 0.0)]
	#[case(0.0, f64::INFINITY)]
	#[case(f64::NEG_INFINITY, 0.0)]
	fn invalid_coordinate(#[case] lat: f64, #[case] lon: f64) {
		assert!(matches!(
			encode(lat, lon, 5),
			Err(GeohashError::InvalidCoordinate { .. })
		));
	}

	#[test]
	fn out_of_range_is_clamped() -> Result<()> {
		assert_eq!(encode(100.0, 200.0, 6)?, encode(90.0, 180.0, 6)?);
		assert_eq!(encode(-100.0, -500.0, 6)?, encode(-90.0, -180.0, 6)?);
		Ok(())
	}
}
