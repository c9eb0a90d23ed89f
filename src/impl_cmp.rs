//! Ordering, and comparison against native integers
//!
//! Equality is derived: the canonical forms (trimmed digits, no
//! negative zero) make structural equality value equality.

use std::cmp::Ordering;

use crate::arithmetic::{cmp_magnitude, cmp_small};
use crate::BigInt;

impl<const BASE: u32> Ord for BigInt<BASE> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (negative, _) => cmp_magnitude(self.bigits(), other.bigits(), !negative),
        }
    }
}

impl<const BASE: u32> PartialOrd for BigInt<BASE> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const BASE: u32> PartialEq<i64> for BigInt<BASE> {
    fn eq(&self, other: &i64) -> bool {
        cmp_small(self, *other) == Ordering::Equal
    }
}

impl<const BASE: u32> PartialOrd<i64> for BigInt<BASE> {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(cmp_small(self, *other))
    }
}

impl<const BASE: u32> PartialEq<BigInt<BASE>> for i64 {
    fn eq(&self, other: &BigInt<BASE>) -> bool {
        cmp_small(other, *self) == Ordering::Equal
    }
}

impl<const BASE: u32> PartialOrd<BigInt<BASE>> for i64 {
    fn partial_cmp(&self, other: &BigInt<BASE>) -> Option<Ordering> {
        Some(cmp_small(other, *self).reverse())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_BASE;

    #[test]
    fn sign_dominates() {
        let neg = BigInt::<1000>::from_bigits(vec![999, 999, 999], true);
        let pos = BigInt::<1000>::from_bigits(vec![1], false);
        assert!(neg < pos);
        assert!(pos > neg);
    }

    #[test]
    fn both_negative_reverses_magnitudes() {
        let a = BigInt::<1000>::from_bigits(vec![654, 987], true);
        let b = BigInt::<1000>::from_bigits(vec![456, 123], true);
        assert!(a < b);
    }

    #[test]
    fn zero_sits_between() {
        let zero = BigInt::<1000>::new();
        assert!(zero > BigInt::from_bigits(vec![1], true));
        assert!(zero < BigInt::from_bigits(vec![1], false));
        assert_eq!(zero, BigInt::new());
    }

    #[test]
    fn against_i64() {
        let a = BigInt::<1000>::from_bigits(vec![654, 987], true);
        assert!(a < -987_653);
        assert!(a > -987_655);
        assert_eq!(a, -987_654);
        assert!(-987_655 < a);
        assert!(0 > a);
    }

    #[test]
    fn i64_min_equality() {
        let v = BigInt::<MAX_BASE>::from_bigits(vec![0, 2_147_483_648], true);
        assert_eq!(v, i64::MIN);
    }
}
