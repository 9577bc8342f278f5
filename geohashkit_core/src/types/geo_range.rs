use std::fmt::{self, Debug};

/// A closed interval `[min, max]` of degrees along one axis.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeoRange {
	pub min: f64,
	pub max: f64,
}

impl GeoRange {
	/// The full latitude span, `[-90, 90]`.
	pub const LATITUDE: GeoRange = GeoRange { min: -90.0, max: 90.0 };
	/// The full longitude span, `[-180, 180]`.
	pub const LONGITUDE: GeoRange = GeoRange { min: -180.0, max: 180.0 };

	/// Creates a range from two bounds given in any order.
	pub fn new(a: f64, b: f64) -> GeoRange {
		GeoRange {
			min: a.min(b),
			max: a.max(b),
		}
	}

	pub fn mid(&self) -> f64 {
		(self.min + self.max) / 2.0
	}

	pub fn span(&self) -> f64 {
		self.max - self.min
	}

	pub fn contains(&self, value: f64) -> bool {
		self.min <= value && value <= self.max
	}

	/// Halves the range around its midpoint and keeps the upper half if `upper` is set,
	/// the lower half otherwise.
	#[inline]
	pub(crate) fn narrow(&mut self, upper: bool) {
		let mid = self.mid();
		if upper {
			self.min = mid;
		} else {
			self.max = mid;
		}
	}

	/// Halves the range towards `value` and reports which half was kept (`true` = upper).
	///
	/// Values on the midpoint belong to the upper half.
	#[inline]
	pub(crate) fn bisect(&mut self, value: f64) -> bool {
		let upper = value >= self.mid();
		self.narrow(upper);
		upper
	}
}

impl Debug for GeoRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}, {}]", self.min, self.max)
	}
}
