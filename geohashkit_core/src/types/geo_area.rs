//! The rectangular cell a geohash denotes.

use super::{GeoPoint, GeoRange};
use std::fmt::{self, Debug};

/// The latitude/longitude rectangle covered by a geohash.
///
/// Bounds are the exact cell edges as produced by binary subdivision, never rounded.
/// For display purposes use [`GeoArea::center_rounded`].
///
/// # Examples
/// ```
/// use geohashkit_core::decode;
///
/// let area = decode("s01").unwrap();
/// assert_eq!(area.as_array(), [1.40625, 0.0, 2.8125, 1.40625]);
/// assert!(area.contains(1.0, 2.0));
/// ```
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeoArea {
	pub latitude: GeoRange,
	pub longitude: GeoRange,
}

impl GeoArea {
	/// The whole world, the area of the empty prefix.
	pub const WORLD: GeoArea = GeoArea {
		latitude: GeoRange::LATITUDE,
		longitude: GeoRange::LONGITUDE,
	};

	pub fn new(latitude: GeoRange, longitude: GeoRange) -> GeoArea {
		GeoArea { latitude, longitude }
	}

	/// Returns `true` if the point lies inside the area or on its border.
	pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
		self.latitude.contains(latitude) && self.longitude.contains(longitude)
	}

	/// The exact centre of the area.
	pub fn center(&self) -> GeoPoint {
		GeoPoint::new(self.latitude.mid(), self.longitude.mid())
	}

	/// The centre of the area, each axis rounded to the fewest decimals that still fall inside
	/// the cell: `floor(2 - log10(span))`, never negative.
	///
	/// ```
	/// use geohashkit_core::decode;
	///
	/// let point = decode("s01").unwrap().center_rounded();
	/// assert_eq!(point.as_tuple(), (0.7, 2.1));
	/// ```
	pub fn center_rounded(&self) -> GeoPoint {
		GeoPoint::new(
			round_to_span(self.latitude.mid(), self.latitude.span()),
			round_to_span(self.longitude.mid(), self.longitude.span()),
		)
	}

	/// Returns the area as `[west, south, east, north]`.
	pub fn as_array(&self) -> [f64; 4] {
		[
			self.longitude.min,
			self.latitude.min,
			self.longitude.max,
			self.latitude.max,
		]
	}
}

fn round_to_span(value: f64, span: f64) -> f64 {
	let decimals = (2.0 - span.log10()).floor().max(0.0);
	let factor = 10f64.powi(decimals as i32);
	(value * factor).round() / factor
}

impl Debug for GeoArea {
	/// Formats the area as `lat [min, max], lon [min, max]`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "lat {:?}, lon {:?}", self.latitude, self.longitude)
	}
}
