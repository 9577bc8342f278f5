//! Contains the value types of the codec: ranges, areas, points, directions and neighbour sets.

mod direction;
pub use direction::*;

mod geo_area;
pub use geo_area::*;

mod geo_point;
pub use geo_point::*;

mod geo_range;
pub use geo_range::*;

mod neighbors;
pub use neighbors::*;
