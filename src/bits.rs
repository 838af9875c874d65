//! Low-level helpers over plain boolean sequences.
//!
//! Bits are addressed in MSB-first order: index 0 is the most-significant bit.

use crate::errors::{FormatError, IndexError, OverflowError};

/// Fails with [IndexError] unless `index < len`.
pub fn check_index(len: usize, index: usize) -> Result<(), IndexError> {
    if index >= len {
        return Err(IndexError { index, len });
    }

    Ok(())
}

/// Inserts `false` at the front of `bits` until it is `target` bits long.
/// Sequences already at or beyond `target` are returned unchanged.
pub fn left_pad(bits: Vec<bool>, target: usize) -> Vec<bool> {
    let padding = target.saturating_sub(bits.len());
    if padding == 0 {
        return bits;
    }

    tracing::trace!(padding, target, "left-padding bit sequence");
    let mut padded = vec![false; padding];
    padded.extend(bits);

    padded
}

/// Minimal big-endian representation of `value`. Zero is a single `false` bit.
pub fn u64_to_bits(value: u64) -> Vec<bool> {
    let width = (u64::BITS - value.leading_zeros()).max(1);

    (0..width).rev().map(|shift| (value >> shift) & 1 == 1).collect()
}

/// Number of bits from the first set bit to the end, 0 if none is set.
pub fn significant_bits(bits: &[bool]) -> usize {
    bits.iter()
        .position(|&bit| bit)
        .map_or(0, |first| bits.len() - first)
}

/// Reads `bits` as a big-endian unsigned value. Leading `false` bits never overflow.
pub fn bits_to_u64(bits: &[bool]) -> Result<u64, OverflowError> {
    let significant = significant_bits(bits);
    if significant > u64::BITS as usize {
        tracing::debug!(significant_bits = significant, "bit vector does not fit in u64");
        return Err(OverflowError {
            significant_bits: significant,
            target_bits: u64::BITS,
        });
    }

    let value = bits[bits.len() - significant..]
        .iter()
        .fold(0u64, |value, &bit| (value << 1) | bit as u64);

    Ok(value)
}

/// Maps each `'0'`/`'1'` of `text` to a bit, in order.
pub fn parse_bits(text: &str) -> Result<Vec<bool>, FormatError> {
    text.chars()
        .enumerate()
        .map(|(position, character)| match character {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => {
                tracing::debug!(%character, position, "invalid bit character");
                Err(FormatError {
                    character,
                    position,
                })
            }
        })
        .collect()
}

/// Renders `bits` as `'0'`/`'1'` characters, MSB first.
pub fn bits_to_string(bits: &[bool]) -> String {
    bits.iter().map(|&bit| if bit { '1' } else { '0' }).collect()
}

/// Moves every bit `amount` positions toward index 0 and clears the vacated tail.
pub fn shift_toward_msb(bits: &mut [bool], amount: usize) {
    let len = bits.len();
    if amount >= len {
        bits.fill(false);
        return;
    }

    bits.copy_within(amount.., 0);
    bits[len - amount..].fill(false);
}

/// Moves every bit `amount` positions away from index 0 and clears the vacated head.
pub fn shift_toward_lsb(bits: &mut [bool], amount: usize) {
    let len = bits.len();
    if amount >= len {
        bits.fill(false);
        return;
    }

    bits.copy_within(..len - amount, amount);
    bits[..amount].fill(false);
}
