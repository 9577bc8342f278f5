use std::fmt::{self, Debug};

/// A single position in degrees.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeoPoint {
	pub latitude: f64,
	pub longitude: f64,
}

impl GeoPoint {
	pub fn new(latitude: f64, longitude: f64) -> GeoPoint {
		GeoPoint { latitude, longitude }
	}

	/// Returns the point as `(latitude, longitude)`.
	pub fn as_tuple(&self) -> (f64, f64) {
		(self.latitude, self.longitude)
	}
}

impl Debug for GeoPoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}, {}", self.latitude, self.longitude)
	}
}
