//! # geohashkit
//!
//! Geohash encoding, decoding and neighbour lookup, plus the `geohashkit` command line tool.
//!
//! The codec itself lives in [`core`]; this crate re-exports it.
//!
//! ```rust
//! use geohashkit::core::{Direction, adjacent, decode_point, encode};
//!
//! let hash = encode(52.5163, 13.3777, 7).unwrap();
//! assert_eq!(hash, "u33db2m");
//!
//! let north = adjacent(&hash, Direction::North).unwrap();
//! assert_eq!(north.len(), 7);
//!
//! println!("{hash} is at {:?}", decode_point(&hash).unwrap());
//! ```

pub use geohashkit_core as core;
