//! The [BitVector] value type: an ordered, index-addressable sequence of booleans.
//!
//! Index 0 is the most-significant bit and is printed first.

use std::{
    fmt,
    hash::{Hash, Hasher},
    io::BufRead,
    str::FromStr,
};

use crate::{
    bits,
    capacity::Capacity,
    errors::{IndexError, LengthError, OverflowError, ParseError, ReadError},
};

/// A resizable bit vector.
///
/// Cloning is explicit and deep; there is no implicit copy.
#[derive(Debug, Clone, Default)]
pub struct BitVector {
    bits: Vec<bool>,
}

impl BitVector {
    /// All-`false` vector: `capacity` bits for [Capacity::Fixed], empty for [Capacity::Growable].
    pub fn new(capacity: Capacity) -> Self {
        let len = match capacity {
            Capacity::Growable => 0,
            Capacity::Fixed(len) => len,
        };

        Self::zeros(len)
    }

    /// All-`false` vector of exactly `len` bits.
    pub fn zeros(len: usize) -> Self {
        BitVector {
            bits: vec![false; len],
        }
    }

    /// Minimal big-endian encoding of `value`, left-padded to `capacity`.
    ///
    /// ```
    /// use dynbits::{BitVector, Capacity};
    ///
    /// let bv = BitVector::from_integer(10, Capacity::Fixed(6)).unwrap();
    /// assert_eq!(bv.to_string(), "001010");
    /// ```
    pub fn from_integer(value: u64, capacity: Capacity) -> Result<Self, LengthError> {
        Self::from_vec(bits::u64_to_bits(value), capacity)
    }

    /// Copies `bits`, left-padded to `capacity`.
    pub fn from_bits(bits: &[bool], capacity: Capacity) -> Result<Self, LengthError> {
        Self::from_vec(bits.to_vec(), capacity)
    }

    /// Takes ownership of `bits`, left-padded to `capacity`.
    pub fn from_vec(bits: Vec<bool>, capacity: Capacity) -> Result<Self, LengthError> {
        let target = capacity.target(bits.len())?;

        Ok(BitVector {
            bits: bits::left_pad(bits, target),
        })
    }

    /// Parses a string of `'0'`/`'1'` characters (index 0 = first character),
    /// left-padded to `capacity`.
    pub fn from_str_with_capacity(text: &str, capacity: Capacity) -> Result<Self, ParseError> {
        let parsed = bits::parse_bits(text)?;

        Ok(Self::from_vec(parsed, capacity)?)
    }

    /// Reads one whitespace-delimited token from `reader` and parses it like
    /// [BitVector::from_str_with_capacity].
    ///
    /// Leading ASCII whitespace is skipped. The byte that terminates the token is
    /// consumed; anything after it is left in the reader.
    pub fn read_from<R: BufRead>(reader: &mut R, capacity: Capacity) -> Result<Self, ReadError> {
        let token = read_token(reader)?;
        tracing::trace!(len = token.len(), "read bit token");

        Ok(Self::from_str_with_capacity(&token, capacity)?)
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit at `index`.
    pub fn get(&self, index: usize) -> Result<bool, IndexError> {
        bits::check_index(self.len(), index)?;

        Ok(self.bits[index])
    }

    /// Assigns the bit at `index`.
    pub fn set_bit(&mut self, index: usize, value: bool) -> Result<&mut Self, IndexError> {
        bits::check_index(self.len(), index)?;
        self.bits[index] = value;

        Ok(self)
    }

    /// True when every bit is set. Vacuously true for an empty vector.
    pub fn all(&self) -> bool {
        self.bits.iter().all(|&bit| bit)
    }

    /// True when at least one bit is set. False for an empty vector.
    pub fn any(&self) -> bool {
        self.bits.iter().any(|&bit| bit)
    }

    /// True when no bit is set. True for an empty vector.
    pub fn none(&self) -> bool {
        !self.any()
    }

    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&bit| bit).count()
    }

    pub fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }

    /// Reverses the bit order in place.
    pub fn reverse(&mut self) -> &mut Self {
        self.bits.reverse();
        self
    }

    /// Assigns every bit to `value`.
    pub fn set(&mut self, value: bool) -> &mut Self {
        self.bits.fill(value);
        self
    }

    /// Clears every bit.
    pub fn reset(&mut self) -> &mut Self {
        self.set(false)
    }

    /// Bitwise AND over the first `min(self.len(), other.len())` bits.
    pub fn and(&self, other: &BitVector) -> BitVector {
        self.zip_with(other, |a, b| a & b)
    }

    /// Bitwise OR over the first `min(self.len(), other.len())` bits.
    pub fn or(&self, other: &BitVector) -> BitVector {
        self.zip_with(other, |a, b| a | b)
    }

    /// Bitwise XOR over the first `min(self.len(), other.len())` bits.
    pub fn xor(&self, other: &BitVector) -> BitVector {
        self.zip_with(other, |a, b| a ^ b)
    }

    /// In-place AND. Truncates `self` to `min(self.len(), other.len())`.
    pub fn and_assign(&mut self, other: &BitVector) -> &mut Self {
        self.zip_assign(other, |a, b| a & b)
    }

    /// In-place OR. Truncates `self` to `min(self.len(), other.len())`.
    pub fn or_assign(&mut self, other: &BitVector) -> &mut Self {
        self.zip_assign(other, |a, b| a | b)
    }

    /// In-place XOR. Truncates `self` to `min(self.len(), other.len())`.
    pub fn xor_assign(&mut self, other: &BitVector) -> &mut Self {
        self.zip_assign(other, |a, b| a ^ b)
    }

    /// Shifts every bit `amount` positions toward index 0, filling the tail with `false`.
    /// Amounts `>= len()` clear the vector without changing its length.
    pub fn shift_left_assign(&mut self, amount: usize) -> &mut Self {
        bits::shift_toward_msb(&mut self.bits, amount);
        self
    }

    /// Shifts every bit `amount` positions away from index 0, filling the head with `false`.
    /// Amounts `>= len()` clear the vector without changing its length.
    pub fn shift_right_assign(&mut self, amount: usize) -> &mut Self {
        bits::shift_toward_lsb(&mut self.bits, amount);
        self
    }

    /// Big-endian unsigned value: index `len() - 1` has weight `2^0`.
    ///
    /// Fails with [OverflowError] if a set bit has weight `2^64` or more.
    pub fn to_unsigned(&self) -> Result<u64, OverflowError> {
        bits::bits_to_u64(&self.bits)
    }

    /// The underlying sequence.
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    pub fn into_inner(self) -> Vec<bool> {
        self.bits
    }

    /// Forward traversal from index 0. Each call starts fresh.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, bool>> {
        self.bits.iter().copied()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, bool> {
        self.bits.iter_mut()
    }

    pub(crate) fn bits_mut(&mut self) -> &mut Vec<bool> {
        &mut self.bits
    }

    fn zip_with(&self, other: &BitVector, op: impl Fn(bool, bool) -> bool) -> BitVector {
        BitVector {
            bits: self.iter().zip(other.iter()).map(|(a, b)| op(a, b)).collect(),
        }
    }

    fn zip_assign(&mut self, other: &BitVector, op: impl Fn(bool, bool) -> bool) -> &mut Self {
        self.bits.truncate(other.len());
        for (bit, rhs) in self.bits.iter_mut().zip(other.iter()) {
            *bit = op(*bit, rhs);
        }

        self
    }
}

fn read_token<R: BufRead>(reader: &mut R) -> Result<String, ReadError> {
    let mut token = Vec::new();

    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }

        let skip = if token.is_empty() {
            buf.iter().take_while(|b| b.is_ascii_whitespace()).count()
        } else {
            0
        };
        let rest = &buf[skip..];
        let taken = rest.iter().take_while(|b| !b.is_ascii_whitespace()).count();
        token.extend_from_slice(&rest[..taken]);

        let hit_delimiter = taken < rest.len();
        let consumed = skip + taken + usize::from(hit_delimiter && !token.is_empty());
        reader.consume(consumed);

        if hit_delimiter && !token.is_empty() {
            break;
        }
    }

    if token.is_empty() {
        return Err(ReadError::MissingToken);
    }

    Ok(String::from_utf8_lossy(&token).into_owned())
}

impl PartialEq for BitVector {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl Eq for BitVector {}

impl Hash for BitVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

/// Prints the same characters as [BitVector::to_string], with no separators.
impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&bits::bits_to_string(&self.bits))
    }
}

/// Parses at natural length.
impl FromStr for BitVector {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_with_capacity(s, Capacity::Growable)
    }
}

impl From<Vec<bool>> for BitVector {
    fn from(bits: Vec<bool>) -> Self {
        BitVector { bits }
    }
}

impl From<&[bool]> for BitVector {
    fn from(bits: &[bool]) -> Self {
        BitVector {
            bits: bits.to_vec(),
        }
    }
}

impl From<&BitVector> for String {
    fn from(value: &BitVector) -> Self {
        value.to_string()
    }
}

impl TryFrom<&BitVector> for u64 {
    type Error = OverflowError;

    fn try_from(value: &BitVector) -> Result<Self, Self::Error> {
        value.to_unsigned()
    }
}

impl TryFrom<&BitVector> for usize {
    type Error = OverflowError;

    fn try_from(value: &BitVector) -> Result<Self, Self::Error> {
        let wide = value.to_unsigned()?;

        usize::try_from(wide).map_err(|_| OverflowError {
            significant_bits: bits::significant_bits(value.as_slice()),
            target_bits: usize::BITS,
        })
    }
}

impl FromIterator<bool> for BitVector {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        BitVector {
            bits: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for BitVector {
    type Item = bool;
    type IntoIter = std::vec::IntoIter<bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.into_iter()
    }
}

impl<'a> IntoIterator for &'a BitVector {
    type Item = bool;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, bool>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
