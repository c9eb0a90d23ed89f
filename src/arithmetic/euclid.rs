//! Greatest common divisor and least common multiple

use crate::arithmetic::{division, multiplication};
use crate::BigInt;

/// Euclid's algorithm on the magnitudes; the result is never negative
/// and `gcd(0, 0) == 0`
pub(crate) fn gcd<const BASE: u32>(a: &BigInt<BASE>, b: &BigInt<BASE>) -> BigInt<BASE> {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        division::rem_assign(&mut a, &b);
        std::mem::swap(&mut a, &mut b);
    }
    a
}

/// `|a * b| / gcd(a, b)`, dividing first to keep the intermediate
/// small; zero when either operand is zero
pub(crate) fn lcm<const BASE: u32>(a: &BigInt<BASE>, b: &BigInt<BASE>) -> BigInt<BASE> {
    if a.is_zero() || b.is_zero() {
        return BigInt::new();
    }
    let divisor = gcd(a, b);
    let mut result = a.abs();
    division::div_assign(&mut result, &divisor);
    multiplication::mul_assign(&mut result, &b.abs());
    result
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_ignores_signs() {
        // gcd(-123456, 987654) == 6
        let a = BigInt::<1024>::from_bigits(vec![576, 120], true);
        let b = BigInt::<1024>::from_bigits(vec![518, 964], false);
        let g = gcd(&a, &b);
        assert_eq!(g.bigits(), &[6]);
        assert!(!g.is_negative());

        let g = gcd(&b, &a);
        assert_eq!(g.bigits(), &[6]);
        assert!(!g.is_negative());
    }

    #[test]
    fn gcd_with_zero_is_other_magnitude() {
        let zero = BigInt::<1024>::new();
        let a = BigInt::<1024>::from_bigits(vec![576, 120], true);
        assert_eq!(gcd(&zero, &a).bigits(), &[576, 120]);
        assert_eq!(gcd(&a, &zero).bigits(), &[576, 120]);
        assert!(gcd(&zero, &zero).is_zero());
    }

    #[test]
    fn gcd_of_multiple() {
        let a = BigInt::<1000>::from_bigits(vec![144], false);
        let b = BigInt::<1000>::from_bigits(vec![24], true);
        assert_eq!(gcd(&a, &b).bigits(), &[24]);
    }

    #[test]
    fn lcm_never_negative() {
        // lcm(-4, 6) == 12
        let a = BigInt::<1000>::from_bigits(vec![4], true);
        let b = BigInt::<1000>::from_bigits(vec![6], false);
        let l = lcm(&a, &b);
        assert_eq!(l.bigits(), &[12]);
        assert!(!l.is_negative());
    }

    #[test]
    fn lcm_large() {
        // lcm(123456, -987654) == 123456 * 987654 / 6 == 20321968704
        let a = BigInt::<1_000_000_000>::from_bigits(vec![123456], false);
        let b = BigInt::<1_000_000_000>::from_bigits(vec![987654], true);
        assert_eq!(lcm(&a, &b).bigits(), &[321968704, 20]);
    }

    #[test]
    fn lcm_with_zero_is_zero() {
        let zero = BigInt::<1000>::new();
        let a = BigInt::<1000>::from_bigits(vec![7], false);
        assert!(lcm(&zero, &a).is_zero());
    }
}
