//! Exponentiation and integer logarithm

use crate::arithmetic::{addition, division, multiplication};
use crate::BigInt;

/// Square-and-multiply; caller guarantees `exponent > 0`
pub(crate) fn pow<const BASE: u32>(base: &BigInt<BASE>, exponent: &BigInt<BASE>) -> BigInt<BASE> {
    let mut result = BigInt::from(1);
    let mut square = base.clone();
    let mut exp = exponent.clone();
    loop {
        if exp.parity() == 1 {
            multiplication::mul_assign(&mut result, &square);
        }
        division::div_assign_i64(&mut exp, 2);
        if exp.is_zero() {
            break;
        }
        let prev = square.clone();
        multiplication::mul_assign(&mut square, &prev);
    }
    result
}

/// [`pow`] with a native exponent; caller guarantees `exponent > 0`
pub(crate) fn powi<const BASE: u32>(base: &BigInt<BASE>, mut exponent: u64) -> BigInt<BASE> {
    let mut result = BigInt::from(1);
    let mut square = base.clone();
    loop {
        if exponent & 1 == 1 {
            multiplication::mul_assign(&mut result, &square);
        }
        exponent >>= 1;
        if exponent == 0 {
            break;
        }
        let prev = square.clone();
        multiplication::mul_assign(&mut square, &prev);
    }
    result
}

/// Floored logarithm by counting whole divisions; caller guarantees
/// `value > 0` and `base > 1`
pub(crate) fn log<const BASE: u32>(value: &BigInt<BASE>, base: &BigInt<BASE>) -> BigInt<BASE> {
    let mut count = BigInt::new();
    let mut value = value.clone();
    loop {
        division::div_assign(&mut value, base);
        if value.is_zero() {
            break;
        }
        addition::add_assign_small(&mut count, 1);
    }
    count
}


#[cfg(test)]
mod tests {
    use super::*;

    include!("pow.tests.rs");
}
