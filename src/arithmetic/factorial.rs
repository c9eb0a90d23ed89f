//! Factorial
//!
//! Symmetric pairing halves the number of full-width multiplications:
//! `n!` groups as `(1·n)(2·(n-1))(3·(n-2))...`, and each pair product
//! is the previous one plus a step that shrinks by two, so the factors
//! come from additions instead of fresh multiplications. An odd `n`
//! contributes its middle term `(n / 2) + 1` separately.

use std::cmp::Ordering;

use crate::arithmetic::{addition, cmp_small, multiplication, shift};
use crate::BigInt;

/// Caller guarantees `value` is not negative
pub(crate) fn factorial<const BASE: u32>(value: &BigInt<BASE>) -> BigInt<BASE> {
    if value.size() == 1 && value.bigits()[0] <= 1 {
        return BigInt::from(1);
    }
    // past u32 range the result would not fit in memory anyway, but the
    // pair accumulator would also overflow u64, so stay exact
    match value.to_i64() {
        Ok(n) if n <= u32::MAX as i64 => factorial_native(n as u64),
        _ => factorial_big(value),
    }
}

fn factorial_native<const BASE: u32>(n: u64) -> BigInt<BASE> {
    let mut result: BigInt<BASE> = if n % 2 == 1 {
        BigInt::from((n >> 1) + 1)
    } else {
        BigInt::from(1)
    };
    let mut mult = n;
    let mut diff = n - 2;
    multiplication::mul_assign_small(&mut result, mult);
    while diff > 1 {
        mult += diff;
        multiplication::mul_assign_small(&mut result, mult);
        diff -= 2;
    }
    result
}

fn factorial_big<const BASE: u32>(n: &BigInt<BASE>) -> BigInt<BASE> {
    let mut result = if n.parity() == 1 {
        let mut middle = n.clone();
        shift::shr_assign(&mut middle, 1);
        addition::add_assign_small(&mut middle, 1);
        middle
    } else {
        BigInt::from(1)
    };
    let mut mult = n.clone();
    let mut diff = n.clone();
    addition::sub_assign_i64(&mut diff, 2);
    loop {
        multiplication::mul_assign(&mut result, &mult);
        if cmp_small(&diff, 1) != Ordering::Greater {
            break;
        }
        addition::add_assign(&mut mult, &diff);
        addition::sub_assign_i64(&mut diff, 2);
    }
    result
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        let seven = BigInt::<1_000_000_000>::from_bigits(vec![7], false);
        assert_eq!(factorial(&seven).bigits(), &[5040]);
    }

    #[test]
    fn zero_and_one() {
        assert_eq!(factorial(&BigInt::<1024>::new()).bigits(), &[1]);
        let one = BigInt::<1024>::from_bigits(vec![1], false);
        assert_eq!(factorial(&one).bigits(), &[1]);
    }

    #[test]
    fn even_operand() {
        // 18! == 6402373705728000
        let n = BigInt::<1_000_000_000>::from_bigits(vec![18], false);
        assert_eq!(factorial(&n).bigits(), &[705728000, 6402373]);
    }

    #[test]
    fn odd_operand() {
        // 5! exercises the middle factor of the pairing
        let n = BigInt::<1024>::from_bigits(vec![5], false);
        assert_eq!(factorial(&n).bigits(), &[120]);
    }

    #[test]
    fn power_of_two_radix() {
        // 20! == 2432902008176640000
        let n = BigInt::<1024>::from_bigits(vec![20], false);
        assert_eq!(factorial(&n).bigits(), &[0, 256, 43, 498, 871, 112, 2]);
    }
}
