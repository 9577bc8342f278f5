//! Neighbouring cells computed on the symbols alone.
//!
//! Moving one cell in a direction only changes the trailing symbol, unless that symbol sits on
//! the edge of its parent cell; then the parent has to move as well, and so on towards the
//! front of the hash. No coordinates are involved, so there is no floating point drift at
//! cell edges.
//!
//! Which symbols are edge symbols, and which symbol follows which, depends on whether a
//! symbol sits at an odd or even position: odd positions carry 3 longitude and 2 latitude
//! bits, even positions the other way round.

use crate::{
	alphabet::{BASE32, symbol_value},
	error::{GeohashError, Result},
	types::Direction,
};

/// Neighbour tables in the canonical geohash notation, indexed `[parity][direction]` with
/// `parity = (length - 1) % 2` and directions in the order north, south, east, west.
///
/// The symbol at position `i` of a row is the one whose neighbour is `BASE32[i]`.
const NEIGHBOR_SYMBOLS: [[&[u8; 32]; 4]; 2] = [
	[
		b"bc01fg45238967deuvhjyznpkmstqrwx",
		b"238967debc01fg45kmstqrwxuvhjyznp",
		b"p0r21436x8zb9dcf5h7kjnmqesgutwvy",
		b"14365h7k9dcfesgujnmqp0r2twvyx8zb",
	],
	[
		b"p0r21436x8zb9dcf5h7kjnmqesgutwvy",
		b"14365h7k9dcfesgujnmqp0r2twvyx8zb",
		b"bc01fg45238967deuvhjyznpkmstqrwx",
		b"238967debc01fg45kmstqrwxuvhjyznp",
	],
];

/// Symbols on the edge of their parent cell, same indexing as [`NEIGHBOR_SYMBOLS`].
const BORDER_SYMBOLS: [[&[u8]; 4]; 2] = [
	[b"bcfguvyz", b"0145hjnp", b"prxz", b"028b"],
	[b"prxz", b"028b", b"bcfguvyz", b"0145hjnp"],
];

/// `NEIGHBOR[parity][direction][value]` is the symbol of the neighbouring cell.
static NEIGHBOR: [[[u8; 32]; 4]; 2] = build_neighbor_table();

/// `BORDER[parity][direction]` has bit `value` set for edge symbols.
static BORDER: [[u32; 4]; 2] = build_border_table();

const fn value_of(symbol: u8) -> usize {
	let mut value = 0;
	while BASE32[value] != symbol {
		value += 1;
	}
	value
}

const fn build_neighbor_table() -> [[[u8; 32]; 4]; 2] {
	let mut table = [[[0u8; 32]; 4]; 2];
	let mut parity = 0;
	while parity < 2 {
		let mut direction = 0;
		while direction < 4 {
			let row = NEIGHBOR_SYMBOLS[parity][direction];
			let mut i = 0;
			while i < 32 {
				table[parity][direction][value_of(row[i])] = BASE32[i];
				i += 1;
			}
			direction += 1;
		}
		parity += 1;
	}
	table
}

const fn build_border_table() -> [[u32; 4]; 2] {
	let mut table = [[0u32; 4]; 2];
	let mut parity = 0;
	while parity < 2 {
		let mut direction = 0;
		while direction < 4 {
			let symbols = BORDER_SYMBOLS[parity][direction];
			let mut i = 0;
			while i < symbols.len() {
				table[parity][direction] |= 1 << value_of(symbols[i]);
				i += 1;
			}
			direction += 1;
		}
		parity += 1;
	}
	table
}

fn table_index(direction: Direction) -> usize {
	match direction {
		Direction::North => 0,
		Direction::South => 1,
		Direction::East => 2,
		Direction::West => 3,
	}
}

/// Returns the hash of the cell next to `hash` in `direction`, of the same length.
///
/// Only the trailing run of symbols that actually change is read and validated. Leading
/// symbols the step does not reach are copied through lowercased; they must be ASCII letters
/// or digits. Stepping over the poles or the antimeridian wraps around the grid.
///
/// # Errors
/// Returns [`GeohashError::InvalidHash`] if the hash is empty, if a symbol that has to be
/// read is not in the alphabet, or if a copied byte is not an ASCII letter or digit.
///
/// # Examples
/// ```
/// use geohashkit_core::{adjacent, Direction};
///
/// assert_eq!(adjacent("6gkzwgjz", Direction::North).unwrap(), "6gkzwgmb");
/// assert_eq!(adjacent("6gkzwgjz", Direction::East).unwrap(), "6gkzwgnp");
/// ```
pub fn adjacent(hash: impl AsRef<[u8]>, direction: Direction) -> Result<String> {
	let hash = hash.as_ref();
	if hash.is_empty() {
		return Err(GeohashError::empty_hash());
	}
	let dir = table_index(direction);

	// Walk back while the symbol sits on its parent's edge; `first` is the leftmost symbol that changes.
	let mut first = hash.len() - 1;
	loop {
		let value = read_symbol(hash, first)?;
		let on_border = BORDER[first % 2][dir] & (1 << value) != 0;
		if !on_border || first == 0 {
			break;
		}
		first -= 1;
	}
	if first + 1 < hash.len() {
		log::trace!(
			"adjacent {direction} of {:?} carries over {} symbols",
			String::from_utf8_lossy(hash),
			hash.len() - first
		);
	}
	if let Some(position) = hash[..first].iter().position(|b| !b.is_ascii_alphanumeric()) {
		return Err(GeohashError::invalid_symbol(hash[position], position));
	}

	let mut result = String::with_capacity(hash.len());
	result.extend(hash[..first].iter().map(|b| char::from(b.to_ascii_lowercase())));
	for (position, &symbol) in hash.iter().enumerate().skip(first) {
		let value = symbol_value(symbol).ok_or(GeohashError::invalid_symbol(symbol, position))?;
		result.push(char::from(NEIGHBOR[position % 2][dir][value as usize]));
	}
	Ok(result)
}

fn read_symbol(hash: &[u8], position: usize) -> Result<u8> {
	let symbol = hash[position];
	symbol_value(symbol).ok_or(GeohashError::invalid_symbol(symbol, position))
}
