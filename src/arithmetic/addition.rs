//! Addition and subtraction
//!
//! The magnitude routines are signless; the `*_assign` wrappers pick
//! add or subtract from the operand signs, and a subtraction that
//! crosses zero reports the flip so the caller can correct the sign.

use std::cmp::Ordering;

use crate::arithmetic::{cmp_magnitude, trim_magnitude};
use crate::{radix, BigInt};

/// `lhs += rhs` over raw magnitudes
pub(crate) fn add_magnitudes(lhs: &mut Vec<u32>, rhs: &[u32], tb: u64) {
    if lhs.len() < rhs.len() {
        lhs.resize(rhs.len(), 0);
    }
    let mut carry = 0u64;
    for (i, digit) in lhs.iter_mut().enumerate() {
        let mut n = *digit as u64 + carry;
        if let Some(&r) = rhs.get(i) {
            n += r as u64;
        }
        carry = if n >= tb {
            n -= tb;
            1
        } else {
            0
        };
        *digit = n as u32;
    }
    if carry != 0 {
        lhs.push(1);
    }
}

/// `lhs = |lhs - rhs|`, returning whether the true difference was
/// negative. Always subtracts the smaller magnitude from the larger so
/// the borrow chain cannot run off the top.
pub(crate) fn sub_magnitudes(lhs: &mut Vec<u32>, rhs: &[u32], tb: u64) -> bool {
    let lhs_larger = cmp_magnitude(lhs, rhs, true) != Ordering::Less;
    if lhs.len() < rhs.len() {
        lhs.resize(rhs.len(), 0);
    }
    let mut borrow = 0i64;
    for (i, digit) in lhs.iter_mut().enumerate() {
        let a = *digit as i64;
        let b = rhs.get(i).copied().unwrap_or(0) as i64;
        let mut n = if lhs_larger { a - b } else { b - a } - borrow;
        borrow = if n < 0 {
            n += tb as i64;
            1
        } else {
            0
        };
        *digit = n as u32;
    }
    debug_assert_eq!(borrow, 0);
    trim_magnitude(lhs);
    !lhs_larger
}

/// Adds a native magnitude in place, rippling the carry upward; the
/// value's sign is not consulted
pub(crate) fn add_small_magnitude(bigits: &mut Vec<u32>, mut n: u64, tb: u64) {
    let tb = tb as u128;
    let mut i = 0;
    while n != 0 {
        if i == bigits.len() {
            bigits.push(0);
        }
        let t = bigits[i] as u128 + n as u128;
        bigits[i] = (t % tb) as u32;
        n = (t / tb) as u64;
        i += 1;
    }
}

/// `value += other`
pub(crate) fn add_assign<const BASE: u32>(value: &mut BigInt<BASE>, other: &BigInt<BASE>) {
    let tb = BigInt::<BASE>::true_base();
    if value.negative == other.negative {
        add_magnitudes(&mut value.bigits, &other.bigits, tb);
    } else {
        let flipped = sub_magnitudes(&mut value.bigits, &other.bigits, tb);
        value.negative ^= flipped;
    }
    value.normalize_zero_sign();
    debug_assert!(value.valid());
}

/// `value -= other`
pub(crate) fn sub_assign<const BASE: u32>(value: &mut BigInt<BASE>, other: &BigInt<BASE>) {
    let tb = BigInt::<BASE>::true_base();
    if value.negative != other.negative {
        add_magnitudes(&mut value.bigits, &other.bigits, tb);
    } else {
        let flipped = sub_magnitudes(&mut value.bigits, &other.bigits, tb);
        value.negative ^= flipped;
    }
    value.normalize_zero_sign();
    debug_assert!(value.valid());
}

/// Magnitude-only `value += n`, for callers tracking sign themselves
pub(crate) fn add_assign_small<const BASE: u32>(value: &mut BigInt<BASE>, n: u64) {
    add_small_magnitude(&mut value.bigits, n, BigInt::<BASE>::true_base());
    debug_assert!(value.valid());
}

/// `value += other` for a native operand
pub(crate) fn add_assign_i64<const BASE: u32>(value: &mut BigInt<BASE>, other: i64) {
    signed_small_op(value, other < 0, other.unsigned_abs());
}

/// `value -= other` for a native operand; negating through the
/// sign/magnitude pair keeps `i64::MIN` in range
pub(crate) fn sub_assign_i64<const BASE: u32>(value: &mut BigInt<BASE>, other: i64) {
    signed_small_op(value, other > 0, other.unsigned_abs());
}

fn signed_small_op<const BASE: u32>(value: &mut BigInt<BASE>, negative: bool, magnitude: u64) {
    let tb = BigInt::<BASE>::true_base();
    if value.negative == negative {
        add_small_magnitude(&mut value.bigits, magnitude, tb);
    } else {
        let rhs = radix::digits_of(magnitude, tb);
        let flipped = sub_magnitudes(&mut value.bigits, &rhs, tb);
        value.negative ^= flipped;
    }
    value.normalize_zero_sign();
    debug_assert!(value.valid());
}


#[cfg(test)]
mod tests {
    use super::*;

    include!("addition.tests.rs");
}
