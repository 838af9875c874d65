//! Construction-time length policy for a [crate::BitVector].

use crate::errors::LengthError;

/// Target length used when building a bit vector from shorter source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Capacity {
    /// Keep the natural length of the source.
    Growable,
    /// Left-pad with `false` up to this many bits. Longer sources are rejected.
    Fixed(usize),
}

impl Default for Capacity {
    fn default() -> Self {
        Capacity::Growable
    }
}

/// `0` means natural length, anything else is a fixed capacity.
impl From<usize> for Capacity {
    fn from(value: usize) -> Self {
        match value {
            0 => Capacity::Growable,
            n => Capacity::Fixed(n),
        }
    }
}

impl Capacity {
    /// Resolves the final length for a source of `natural_len` bits.
    pub fn target(self, natural_len: usize) -> Result<usize, LengthError> {
        match self {
            Capacity::Growable => Ok(natural_len),
            Capacity::Fixed(capacity) if natural_len > capacity => {
                tracing::debug!(capacity, required = natural_len, "source exceeds fixed capacity");
                Err(LengthError {
                    capacity,
                    required: natural_len,
                })
            }
            Capacity::Fixed(capacity) => Ok(capacity),
        }
    }
}
