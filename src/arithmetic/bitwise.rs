//! Bitwise AND, OR, XOR and NOT
//!
//! The magnitudes combine digit by digit, the shorter operand zero
//! extended; since the storage is sign-magnitude the result's sign
//! comes from a truth table over the operand signs rather than from
//! two's-complement bit patterns. In a power-of-two radix a digit is a
//! fixed bit field, so the digitwise combination is exact; any other
//! radix round-trips through the canonical binary radix.

use crate::arithmetic::trim_magnitude;
use crate::{radix, BigInt};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BitwiseOp {
    And,
    Or,
    Xor,
}

impl BitwiseOp {
    #[inline]
    fn apply(self, a: u32, b: u32) -> u32 {
        match self {
            BitwiseOp::And => a & b,
            BitwiseOp::Or => a | b,
            BitwiseOp::Xor => a ^ b,
        }
    }

    /// Sign of the result: AND is negative when both operands are, OR
    /// when either is, XOR when exactly one is
    #[inline]
    fn sign(self, a: bool, b: bool) -> bool {
        match self {
            BitwiseOp::And => a && b,
            BitwiseOp::Or => a || b,
            BitwiseOp::Xor => a != b,
        }
    }
}

pub(crate) fn bitwise_assign<const BASE: u32>(
    value: &mut BigInt<BASE>,
    other: &BigInt<BASE>,
    op: BitwiseOp,
) {
    if radix::bits_per_bigit(BASE) == 0 {
        let mut binary = value.to_binary();
        bitwise_assign(&mut binary, &other.to_binary(), op);
        *value = binary.to_radix::<BASE>();
        return;
    }

    let negative = op.sign(value.negative, other.negative);
    if op == BitwiseOp::And {
        // digits past the shorter operand are annihilated
        value.bigits.truncate(other.size());
    } else if value.size() < other.size() {
        value.bigits.resize(other.size(), 0);
    }
    for (digit, &o) in value.bigits.iter_mut().zip(&other.bigits) {
        *digit = op.apply(*digit, o);
    }
    trim_magnitude(&mut value.bigits);
    value.negative = negative;
    value.normalize_zero_sign();
    debug_assert!(value.valid());
}

/// Finite-width complement: every bit of every digit flips in place and
/// the sign inverts; the digit count does not grow
pub(crate) fn not_assign<const BASE: u32>(value: &mut BigInt<BASE>) {
    if radix::bits_per_bigit(BASE) == 0 {
        let mut binary = value.to_binary();
        not_assign(&mut binary);
        *value = binary.to_radix::<BASE>();
        return;
    }

    let mask = BigInt::<BASE>::true_base() - 1;
    let negative = !value.negative;
    for digit in value.bigits.iter_mut() {
        *digit = (*digit as u64 ^ mask) as u32;
    }
    trim_magnitude(&mut value.bigits);
    value.set_sign(negative);
    debug_assert!(value.valid());
}


#[cfg(test)]
mod tests {
    use super::*;

    include!("bitwise.tests.rs");
}
