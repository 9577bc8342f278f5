//! Decoding of geohash strings into areas, points and raw bit patterns.

use crate::{
	alphabet::{BITS_PER_SYMBOL, symbol_value, validate_hash},
	error::{GeohashError, Result},
	types::{GeoArea, GeoPoint},
};

/// Longest hash whose bits fit into the `u64` returned by [`decode_to_bits`].
pub const MAX_BITS_LENGTH: usize = 12;

/// Decodes a geohash into the exact area it covers.
///
/// Symbols are matched case-insensitively.
///
/// # Errors
/// Returns [`GeohashError::InvalidHash`] if the hash is empty or contains a foreign symbol.
///
/// # Examples
/// ```
/// use geohashkit_core::decode;
///
/// let area = decode("s01").unwrap();
/// assert_eq!((area.latitude.min, area.latitude.max), (0.0, 1.40625));
/// assert_eq!((area.longitude.min, area.longitude.max), (1.40625, 2.8125));
/// ```
pub fn decode(hash: impl AsRef<[u8]>) -> Result<GeoArea> {
	let hash = hash.as_ref();
	validate_hash(hash)?;

	let mut area = GeoArea::WORLD;
	let mut is_lon = true;
	for (position, &symbol) in hash.iter().enumerate() {
		let value = symbol_value(symbol).ok_or(GeohashError::invalid_symbol(symbol, position))?;
		for shift in (0..BITS_PER_SYMBOL).rev() {
			let upper = (value >> shift) & 1 == 1;
			if is_lon {
				area.longitude.narrow(upper);
			} else {
				area.latitude.narrow(upper);
			}
			is_lon = !is_lon;
		}
	}

	Ok(area)
}

/// Decodes a geohash into the centre of its cell, rounded to the fewest decimals that still
/// identify the cell (see [`GeoArea::center_rounded`]).
///
/// ```
/// use geohashkit_core::decode_point;
///
/// assert_eq!(decode_point("s01").unwrap().as_tuple(), (0.7, 2.1));
/// ```
pub fn decode_point(hash: impl AsRef<[u8]>) -> Result<GeoPoint> {
	Ok(decode(hash)?.center_rounded())
}

/// Concatenates the 5-bit values of all symbols, most significant first.
///
/// Leading zero bits are not visible in the result, so callers that need the bit width must
/// keep track of the hash length themselves (`5 * length` bits).
///
/// # Errors
/// * [`GeohashError::InvalidHash`] if the hash is empty or contains a foreign symbol.
/// * [`GeohashError::InvalidLength`] if the hash is longer than [`MAX_BITS_LENGTH`].
///
/// # Examples
/// ```
/// use geohashkit_core::decode_to_bits;
///
/// assert_eq!(decode_to_bits("s01").unwrap(), 0b11000_00000_00001);
/// assert_eq!(decode_to_bits("000").unwrap(), 0);
/// ```
pub fn decode_to_bits(hash: impl AsRef<[u8]>) -> Result<u64> {
	let hash = hash.as_ref();
	validate_hash(hash)?;
	if hash.len() > MAX_BITS_LENGTH {
		return Err(GeohashError::InvalidLength {
			length: hash.len(),
			max: MAX_BITS_LENGTH,
		});
	}

	hash.iter().enumerate().try_fold(0u64, |bits, (position, &symbol)| {
		let value = symbol_value(symbol).ok_or(GeohashError::invalid_symbol(symbol, position))?;
		Ok((bits << BITS_PER_SYMBOL) | u64::from(value))
	})
}
