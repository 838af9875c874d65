//! # dynbits
//!
//! A resizable bit vector: an ordered sequence of boolean flags addressable by
//! index, with set logic, shifting, and conversions to and from `'0'`/`'1'`
//! strings and unsigned integers.
//!
//! Index 0 is the most-significant bit and is printed first. Construction takes a
//! [Capacity]: [Capacity::Fixed] left-pads shorter sources with `false` and rejects
//! longer ones, [Capacity::Growable] keeps the natural length of the source.
//!
//! ## Example
//!
//! ```
//! use dynbits::{BitVector, Capacity};
//!
//! let a = BitVector::from_str_with_capacity("10001", Capacity::Fixed(5)).unwrap();
//! let b: BitVector = "10101".parse().unwrap();
//!
//! assert_eq!((&a & &b).to_string(), "10001");
//! assert_eq!((&a | &b).to_string(), "10101");
//! assert_eq!((&a ^ &b).to_string(), "00100");
//!
//! let mut c = BitVector::from_integer(10, Capacity::Fixed(6)).unwrap();
//! c <<= 2;
//! assert_eq!(c.to_string(), "101000");
//! assert_eq!(c.to_unsigned(), Ok(40));
//! ```

pub mod bit_vector;
pub mod bits;
pub mod capacity;
pub mod errors;
pub mod ops;
#[cfg(feature = "serde")]
pub mod serde;

pub use bit_vector::BitVector;
pub use capacity::Capacity;
