//! The 32-symbol geohash alphabet and the mapping between symbols and 5-bit values.
//!
//! The alphabet is the public geohash one (digits plus lowercase letters without
//! `a`, `i`, `l` and `o`), so hashes interoperate with any other geohash implementation.
//! Input is matched case-insensitively, output is always lowercase.

use crate::error::{GeohashError, Result};

/// The geohash base32 alphabet, indexed by 5-bit value.
pub const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Bits carried by a single symbol.
pub const BITS_PER_SYMBOL: u32 = 5;

const INVALID: u8 = 0xFF;

/// Reverse lookup table: byte -> 5-bit value, `INVALID` for bytes outside the alphabet.
/// Uppercase letters map to the same value as their lowercase form.
static DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
	let mut table = [INVALID; 256];
	let mut value = 0;
	while value < BASE32.len() {
		let symbol = BASE32[value];
		table[symbol as usize] = value as u8;
		table[symbol.to_ascii_uppercase() as usize] = value as u8;
		value += 1;
	}
	table
}

/// Maps a 5-bit value (`0..32`) to its symbol.
///
/// # Errors
/// Returns [`GeohashError::InvalidLength`] if the value does not fit into 5 bits.
pub fn encode_symbol(value: u8) -> Result<u8> {
	BASE32
		.get(value as usize)
		.copied()
		.ok_or(GeohashError::InvalidLength {
			length: value as usize,
			max: BASE32.len() - 1,
		})
}

/// Maps a symbol back to its 5-bit value, ignoring ASCII case.
///
/// # Errors
/// Returns [`GeohashError::InvalidHash`] if the byte is not part of the alphabet.
pub fn decode_symbol(symbol: u8) -> Result<u8> {
	symbol_value(symbol).ok_or(GeohashError::invalid_symbol(symbol, 0))
}

#[inline]
pub(crate) fn symbol_value(symbol: u8) -> Option<u8> {
	match DECODE_TABLE[symbol as usize] {
		INVALID => None,
		value => Some(value),
	}
}

/// Checks that a hash is non-empty and made of alphabet symbols only.
///
/// Stops at the first offending byte and reports its position.
pub fn validate_hash(hash: impl AsRef<[u8]>) -> Result<()> {
	let hash = hash.as_ref();
	if hash.is_empty() {
		return Err(GeohashError::empty_hash());
	}
	match hash.iter().position(|&symbol| symbol_value(symbol).is_none()) {
		Some(position) => Err(GeohashError::invalid_symbol(hash[position], position)),
		None => Ok(()),
	}
}

/// Returns `true` iff the hash is non-empty and every byte is in the alphabet.
///
/// ```
/// use geohashkit_core::verify_hash;
///
/// assert!(verify_hash("u33dc0"));
/// assert!(verify_hash("U33DC0"));
/// assert!(!verify_hash("a"));
/// assert!(!verify_hash(""));
/// ```
pub fn verify_hash(hash: impl AsRef<[u8]>) -> bool {
	validate_hash(hash).is_ok()
}
