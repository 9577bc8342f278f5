use crate::{adjacent::adjacent, error::Result, types::Direction, types::Neighbors};

/// Computes all eight neighbours of a geohash.
///
/// Diagonals step vertically first, then horizontally (`ne = east(north(hash))`), so the
/// output is reproducible.
///
/// # Errors
/// Fails like [`adjacent`] does for the same hash.
///
/// # Examples
/// ```
/// use geohashkit_core::neighbors;
///
/// let n = neighbors("6gkzwgjz").unwrap();
/// assert_eq!(n.ne, "6gkzwgq0");
/// assert_eq!(n.sw, "6gkzwgjw");
/// ```
pub fn neighbors(hash: impl AsRef<[u8]>) -> Result<Neighbors> {
	let hash = hash.as_ref();
	let n = adjacent(hash, Direction::North)?;
	let s = adjacent(hash, Direction::South)?;
	Ok(Neighbors {
		e: adjacent(hash, Direction::East)?,
		w: adjacent(hash, Direction::West)?,
		ne: adjacent(&n, Direction::East)?,
		se: adjacent(&s, Direction::East)?,
		nw: adjacent(&n, Direction::West)?,
		sw: adjacent(&s, Direction::West)?,
		n,
		s,
	})
}
