//! A geohash codec.
//!
//! Converts positions into base32 geohash strings and back, and walks from a cell to its
//! neighbours purely on the symbols of the hash.
//!
//! All functions are pure: they share nothing but constant lookup tables and can be called
//! from any number of threads at once.
//!
//! ```
//! use geohashkit_core::*;
//!
//! let hash = encode(1.0, 2.0, 3).unwrap();
//! assert_eq!(hash, "s01");
//!
//! let area = decode(&hash).unwrap();
//! assert!(area.contains(1.0, 2.0));
//!
//! assert_eq!(adjacent("abx1", Direction::North).unwrap(), "abx4");
//! assert_eq!(neighbors("6gkzwgjz").unwrap().se, "6gkzwgnn");
//! ```

pub mod adjacent;
pub mod alphabet;
pub mod decode;
pub mod encode;
pub mod error;
pub mod neighbors;
pub mod types;

pub use adjacent::adjacent;
pub use alphabet::{decode_symbol, encode_symbol, validate_hash, verify_hash};
pub use decode::{MAX_BITS_LENGTH, decode, decode_point, decode_to_bits};
pub use encode::{MAX_HASH_LENGTH, encode};
pub use error::{GeohashError, Result};
pub use neighbors::neighbors;
pub use types::*;
