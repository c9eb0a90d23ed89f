//! Division and remainder
//!
//! Truncating division: the quotient rounds toward zero, the remainder
//! takes the dividend's sign, and `(q * den) + r == num` always holds.
//!
//! A single-digit divisor runs a one-pass short division. A divisor
//! which is a power of the radix splits the digit vector in place. The
//! general case is binary long division over the value's bits, which a
//! non-power-of-two radix reaches by converting through the canonical
//! binary radix.

use std::cmp::Ordering;

use crate::arithmetic::addition::sub_magnitudes;
use crate::arithmetic::{cmp_magnitude, trim_magnitude};
use crate::{radix, ArithmeticError, BigInt};

/// In-place short division of a magnitude by a native divisor in
/// `2..=tb`, returning the remainder
pub(crate) fn div_rem_small_magnitude(bigits: &mut Vec<u32>, divisor: u64, tb: u64) -> u64 {
    debug_assert!(2 <= divisor && divisor <= tb);
    let mut rem = 0u64;
    for digit in bigits.iter_mut().rev() {
        let n = rem * tb + *digit as u64;
        *digit = (n / divisor) as u32;
        rem = n % divisor;
    }
    trim_magnitude(bigits);
    rem
}

/// Remainder of a magnitude by a native divisor in `2..=tb`, without
/// building the quotient
fn rem_small_magnitude(bigits: &[u32], divisor: u64, tb: u64) -> u64 {
    debug_assert!(2 <= divisor && divisor <= tb);
    let mut rem = 0u64;
    for &digit in bigits.iter().rev() {
        rem = (rem * tb + digit as u64) % divisor;
    }
    rem
}

/// Truncating division with remainder.
///
/// # Errors
///
/// [`ArithmeticError::DivideByZero`] when `den` is zero.
pub(crate) fn div_rem<const BASE: u32>(
    num: &BigInt<BASE>,
    den: &BigInt<BASE>,
) -> Result<(BigInt<BASE>, BigInt<BASE>), ArithmeticError> {
    if den.is_zero() {
        return Err(ArithmeticError::DivideByZero);
    }
    let tb = BigInt::<BASE>::true_base();
    let q_negative = num.negative ^ den.negative;
    let r_negative = num.negative;

    if cmp_magnitude(&num.bigits, &den.bigits, true) == Ordering::Less {
        return Ok((BigInt::new(), num.clone()));
    }

    if den.size() == 1 {
        let divisor = den.bigits[0] as u64;
        let (q_bigits, rem) = if divisor == 1 {
            (num.bigits.clone(), 0)
        } else {
            let mut q_bigits = num.bigits.clone();
            let rem = div_rem_small_magnitude(&mut q_bigits, divisor, tb);
            (q_bigits, rem)
        };
        let quotient = BigInt::from_bigits(q_bigits, q_negative);
        let remainder = BigInt::from_bigits(radix::digits_of(rem, tb), r_negative);
        return Ok((quotient, remainder));
    }

    // a power-of-radix divisor splits the digit vector: the low digits
    // are the remainder, the rest the quotient
    if den.back() == 1 && den.bigits[..den.size() - 1].iter().all(|&digit| digit == 0) {
        let k = den.size() - 1;
        let q_bigits = num.bigits[k..].to_vec();
        let mut r_bigits = num.bigits[..k].to_vec();
        trim_magnitude(&mut r_bigits);
        let quotient = BigInt::from_bigits(q_bigits, q_negative);
        let remainder = BigInt::from_bigits(r_bigits, r_negative);
        return Ok((quotient, remainder));
    }

    let bits = radix::bits_per_bigit(BASE);
    if bits == 0 {
        let (quotient, remainder) = div_rem(&num.to_binary(), &den.to_binary())?;
        return Ok((quotient.to_radix::<BASE>(), remainder.to_radix::<BASE>()));
    }

    // binary long division over the dividend's bits, top down
    let mut q_bigits = vec![0u32; num.size()];
    let mut rem: Vec<u32> = vec![0];
    for (i, &digit) in num.bigits.iter().enumerate().rev() {
        for bit in (0..bits).rev() {
            shl1_magnitude(&mut rem, tb);
            rem[0] |= (digit >> bit) & 1;
            if cmp_magnitude(&rem, &den.bigits, true) != Ordering::Less {
                sub_magnitudes(&mut rem, &den.bigits, tb);
                q_bigits[i] |= 1 << bit;
            }
        }
    }
    trim_magnitude(&mut q_bigits);

    let quotient = BigInt::from_bigits(q_bigits, q_negative);
    let remainder = BigInt::from_bigits(rem, r_negative);
    Ok((quotient, remainder))
}

fn shl1_magnitude(bigits: &mut Vec<u32>, tb: u64) {
    let mut carry = 0u64;
    for digit in bigits.iter_mut() {
        let n = ((*digit as u64) << 1) | carry;
        *digit = (n % tb) as u32;
        carry = n / tb;
    }
    if carry != 0 {
        bigits.push(carry as u32);
    }
}

/// `value /= other`; panics on a zero divisor like native division
pub(crate) fn div_assign<const BASE: u32>(value: &mut BigInt<BASE>, other: &BigInt<BASE>) {
    match div_rem(value, other) {
        Ok((quotient, _)) => *value = quotient,
        Err(err) => panic!("{}", err),
    }
}

/// `value %= other`; panics on a zero divisor like native remainder
pub(crate) fn rem_assign<const BASE: u32>(value: &mut BigInt<BASE>, other: &BigInt<BASE>) {
    match div_rem(value, other) {
        Ok((_, remainder)) => *value = remainder,
        Err(err) => panic!("{}", err),
    }
}

/// `value /= other` for a native divisor
pub(crate) fn div_assign_i64<const BASE: u32>(value: &mut BigInt<BASE>, other: i64) {
    if other == 0 {
        panic!("{}", ArithmeticError::DivideByZero);
    }
    let tb = BigInt::<BASE>::true_base();
    let divisor = other.unsigned_abs();
    let q_negative = value.negative ^ (other < 0);

    if divisor == 1 {
        value.negative = q_negative;
    } else if divisor <= tb {
        div_rem_small_magnitude(&mut value.bigits, divisor, tb);
        value.negative = q_negative;
    } else {
        div_assign(value, &BigInt::from(other));
        return;
    }
    value.normalize_zero_sign();
    debug_assert!(value.valid());
}

/// `value %= other` for a native divisor; the divisor's sign never
/// affects the result
pub(crate) fn rem_assign_i64<const BASE: u32>(value: &mut BigInt<BASE>, other: i64) {
    if other == 0 {
        panic!("{}", ArithmeticError::DivideByZero);
    }
    let tb = BigInt::<BASE>::true_base();
    let divisor = other.unsigned_abs();

    if divisor == 1 {
        *value = BigInt::new();
    } else if divisor == 2 {
        // parity works in every radix, no division needed
        let negative = value.negative;
        let parity = value.parity();
        *value = BigInt::from_bigits(vec![parity], negative);
    } else if divisor <= tb {
        let negative = value.negative;
        let rem = rem_small_magnitude(&value.bigits, divisor, tb);
        *value = BigInt::from_bigits(radix::digits_of(rem, tb), negative);
    } else {
        rem_assign(value, &BigInt::from(other));
    }
    debug_assert!(value.valid());
}


#[cfg(test)]
mod tests {
    use super::*;

    include!("division.tests.rs");
}
