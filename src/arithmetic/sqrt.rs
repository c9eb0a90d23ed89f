//! Integer square root
//!
//! Digit-by-digit method in base 2: starting from the highest even
//! power of two at or below the value, each round decides one bit of
//! the root. Needs only shifts, adds and compares, so it runs directly
//! in any power-of-two radix.

use crate::arithmetic::{addition, shift};
use crate::{radix, BigInt};

/// Floored square root; caller guarantees `value >= 2`
pub(crate) fn sqrt<const BASE: u32>(value: &BigInt<BASE>) -> BigInt<BASE> {
    if radix::bits_per_bigit(BASE) == 0 {
        return sqrt(&value.to_binary()).to_radix::<BASE>();
    }

    let bits = value.bits();
    let top = if bits % 2 == 1 { bits - 1 } else { bits - 2 };
    let mut bit = BigInt::from(1);
    shift::shl_assign(&mut bit, top as i64);

    let mut rem = value.clone();
    let mut result = BigInt::new();
    while !bit.is_zero() {
        let mut sum = result.clone();
        addition::add_assign(&mut sum, &bit);
        if rem >= sum {
            addition::sub_assign(&mut rem, &sum);
            shift::shr_assign(&mut result, 1);
            addition::add_assign(&mut result, &bit);
        } else {
            shift::shr_assign(&mut result, 1);
        }
        shift::shr_assign(&mut bit, 2);
    }
    result
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_square() {
        let value = BigInt::<1024>::from_bigits(vec![0, 0, 1], false);
        // sqrt(2^20) == 2^10
        assert_eq!(sqrt(&value).bigits(), &[0, 1]);
    }

    #[test]
    fn floors_between_squares() {
        // sqrt(123456) == 351
        let value = BigInt::<1024>::from_bigits(vec![576, 120], false);
        assert_eq!(sqrt(&value).bigits(), &[351]);
    }

    #[test]
    fn non_power_of_two_radix() {
        let value = BigInt::<1000>::from_bigits(vec![654, 987], false);
        // sqrt(987654) == 993
        assert_eq!(sqrt(&value).bigits(), &[993]);
    }
}
