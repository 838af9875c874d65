//! Error types for construction, parsing, element access and numeric conversion.

use thiserror::Error;

/// An element access outside `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of range for bit vector of length {len}")]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

/// A character other than `'0'` or `'1'` in a textual bit representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid bit character {character:?} at position {position}")]
pub struct FormatError {
    pub character: char,
    /// Zero-based char offset inside the parsed token.
    pub position: usize,
}

/// Source data needs more bits than the fixed capacity allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("source needs {required} bits but capacity is fixed at {capacity}")]
pub struct LengthError {
    pub capacity: usize,
    pub required: usize,
}

/// Numeric conversion would drop set bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value has {significant_bits} significant bits, more than the target width of {target_bits}")]
pub struct OverflowError {
    /// Bits from the highest set bit down to weight `2^0`.
    pub significant_bits: usize,
    pub target_bits: u32,
}

/// Errors produced when building a [crate::BitVector] from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Length(#[from] LengthError),
}

/// Errors produced when reading a [crate::BitVector] token from a byte stream.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The underlying reader failed.
    #[error("failed to read bit token: {0}")]
    Io(#[from] std::io::Error),
    /// The stream ended before any non-whitespace byte.
    #[error("stream ended before a bit token was found")]
    MissingToken,
    #[error(transparent)]
    Parse(#[from] ParseError),
}
