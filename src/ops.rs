//! Operator sugar over the named [BitVector] methods.
//!
//! Binary operators follow the named forms: results are `min(lhs.len(), rhs.len())`
//! bits long, and the assigning forms truncate the left operand the same way.

use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Index, IndexMut, Shl,
    ShlAssign, Shr, ShrAssign,
};

use crate::bit_vector::BitVector;

macro_rules! binary_op {
    ($op:ident, $fn:ident, $method:ident, $assign_op:ident, $assign_fn:ident, $assign_method:ident) => {
        impl $op<&BitVector> for &BitVector {
            type Output = BitVector;

            fn $fn(self, rhs: &BitVector) -> BitVector {
                self.$method(rhs)
            }
        }

        impl $op<BitVector> for BitVector {
            type Output = BitVector;

            fn $fn(mut self, rhs: BitVector) -> BitVector {
                self.$assign_method(&rhs);
                self
            }
        }

        impl $assign_op<&BitVector> for BitVector {
            fn $assign_fn(&mut self, rhs: &BitVector) {
                self.$assign_method(rhs);
            }
        }

        impl $assign_op<BitVector> for BitVector {
            fn $assign_fn(&mut self, rhs: BitVector) {
                self.$assign_method(&rhs);
            }
        }
    };
}

binary_op!(BitAnd, bitand, and, BitAndAssign, bitand_assign, and_assign);
binary_op!(BitOr, bitor, or, BitOrAssign, bitor_assign, or_assign);
binary_op!(BitXor, bitxor, xor, BitXorAssign, bitxor_assign, xor_assign);

impl ShlAssign<usize> for BitVector {
    fn shl_assign(&mut self, amount: usize) {
        self.shift_left_assign(amount);
    }
}

impl ShrAssign<usize> for BitVector {
    fn shr_assign(&mut self, amount: usize) {
        self.shift_right_assign(amount);
    }
}

impl Shl<usize> for BitVector {
    type Output = BitVector;

    fn shl(mut self, amount: usize) -> BitVector {
        self.shift_left_assign(amount);
        self
    }
}

impl Shr<usize> for BitVector {
    type Output = BitVector;

    fn shr(mut self, amount: usize) -> BitVector {
        self.shift_right_assign(amount);
        self
    }
}

impl Shl<usize> for &BitVector {
    type Output = BitVector;

    fn shl(self, amount: usize) -> BitVector {
        self.clone() << amount
    }
}

impl Shr<usize> for &BitVector {
    type Output = BitVector;

    fn shr(self, amount: usize) -> BitVector {
        self.clone() >> amount
    }
}

/// Panics when `index >= len()`, like slice indexing. Use [BitVector::get] for a checked read.
impl Index<usize> for BitVector {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.as_slice()[index]
    }
}

/// Panics when `index >= len()`. Use [BitVector::set_bit] for a checked write.
impl IndexMut<usize> for BitVector {
    fn index_mut(&mut self, index: usize) -> &mut bool {
        &mut self.bits_mut()[index]
    }
}
