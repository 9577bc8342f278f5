/// The eight cells surrounding a geohash, all of the same length as the centre cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Neighbors {
	pub n: String,
	pub s: String,
	pub e: String,
	pub w: String,
	pub ne: String,
	pub se: String,
	pub nw: String,
	pub sw: String,
}

impl Neighbors {
	/// Iterates clockwise starting in the north, yielding `(label, hash)` pairs.
	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
		[
			("n", &self.n),
			("ne", &self.ne),
			("e", &self.e),
			("se", &self.se),
			("s", &self.s),
			("sw", &self.sw),
			("w", &self.w),
			("nw", &self.nw),
		]
		.into_iter()
		.map(|(label, hash)| (label, hash.as_str()))
	}
}
