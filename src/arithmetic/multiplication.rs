//! Multiplication
//!
//! Schoolbook long multiplication into a fresh digit vector, with
//! short-circuits for zero and unit operands, a single-digit inner loop
//! for small native multipliers, and a digit prepend when the
//! multiplier is a power of the radix.

use crate::arithmetic::trim_magnitude;
use crate::{radix, BigInt};

/// Product of two magnitudes into a fresh vector
pub(crate) fn mul_magnitudes(lhs: &[u32], rhs: &[u32], tb: u64) -> Vec<u32> {
    let mut prod = vec![0u32; lhs.len() + rhs.len()];
    for (i, &a) in lhs.iter().enumerate() {
        let mut carry = 0u64;
        for (j, &b) in rhs.iter().enumerate() {
            let n = a as u64 * b as u64 + prod[i + j] as u64 + carry;
            prod[i + j] = (n % tb) as u32;
            carry = n / tb;
        }
        let mut k = i + rhs.len();
        while carry != 0 {
            let n = prod[k] as u64 + carry;
            prod[k] = (n % tb) as u32;
            carry = n / tb;
            k += 1;
        }
    }
    trim_magnitude(&mut prod);
    prod
}

/// `value *= other`
pub(crate) fn mul_assign<const BASE: u32>(value: &mut BigInt<BASE>, other: &BigInt<BASE>) {
    if value.is_zero() {
        return;
    }
    if other.is_zero() {
        *value = BigInt::new();
        return;
    }
    if other.magnitude_is_one() {
        value.negative ^= other.negative;
        return;
    }
    if value.magnitude_is_one() {
        let negative = value.negative ^ other.negative;
        value.bigits = other.bigits.clone();
        value.negative = negative;
        return;
    }
    let tb = BigInt::<BASE>::true_base();
    value.bigits = mul_magnitudes(&value.bigits, &other.bigits, tb);
    value.negative ^= other.negative;
    debug_assert!(value.valid());
}

/// Magnitude-only `value *= m`; the sign is untouched unless the
/// product is zero
pub(crate) fn mul_assign_small<const BASE: u32>(value: &mut BigInt<BASE>, m: u64) {
    if value.is_zero() || m == 1 {
        return;
    }
    if m == 0 {
        *value = BigInt::new();
        return;
    }

    let tb = BigInt::<BASE>::true_base();

    // a power of the radix prepends zero digits
    let shift = radix::int_log_of(m, tb) as usize;
    if shift != 0 {
        let mut shifted = vec![0u32; shift];
        shifted.extend_from_slice(&value.bigits);
        value.bigits = shifted;
        return;
    }

    if m < tb {
        let mut carry = 0u64;
        for digit in value.bigits.iter_mut() {
            let n = *digit as u64 * m + carry;
            *digit = (n % tb) as u32;
            carry = n / tb;
        }
        while carry != 0 {
            value.bigits.push((carry % tb) as u32);
            carry /= tb;
        }
    } else {
        let rhs = radix::digits_of(m, tb);
        value.bigits = mul_magnitudes(&value.bigits, &rhs, tb);
    }
    debug_assert!(value.valid());
}

/// `value *= other` for a native operand
pub(crate) fn mul_assign_i64<const BASE: u32>(value: &mut BigInt<BASE>, other: i64) {
    mul_assign_small(value, other.unsigned_abs());
    if other < 0 {
        value.negative = !value.negative;
    }
    value.normalize_zero_sign();
    debug_assert!(value.valid());
}


#[cfg(test)]
mod tests {
    use super::*;

    include!("multiplication.tests.rs");
}
