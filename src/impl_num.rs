//! Implementations of the num-traits and num-integer interfaces

use num_integer::Integer;
use num_traits::{
    CheckedAdd, CheckedDiv, CheckedMul, CheckedRem, CheckedSub, FromPrimitive, Num, One, Signed,
    ToPrimitive, Zero,
};

use crate::arithmetic::division;
use crate::{parsing, BigInt, ParseBigIntError};

impl<const BASE: u32> Zero for BigInt<BASE> {
    #[inline]
    fn zero() -> BigInt<BASE> {
        BigInt::new()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl<const BASE: u32> One for BigInt<BASE> {
    #[inline]
    fn one() -> BigInt<BASE> {
        BigInt::from(1)
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.magnitude_is_one() && !self.is_negative()
    }
}

impl<const BASE: u32> Num for BigInt<BASE> {
    type FromStrRadixErr = ParseBigIntError;

    fn from_str_radix(s: &str, radix: u32) -> Result<BigInt<BASE>, ParseBigIntError> {
        parsing::parse_str(s, radix)
    }
}

impl<const BASE: u32> Signed for BigInt<BASE> {
    fn abs(&self) -> BigInt<BASE> {
        BigInt::abs(self)
    }

    fn abs_sub(&self, other: &BigInt<BASE>) -> BigInt<BASE> {
        if self <= other {
            BigInt::new()
        } else {
            self - other
        }
    }

    fn signum(&self) -> BigInt<BASE> {
        if self.is_zero() {
            BigInt::new()
        } else {
            let mut one = BigInt::from(1);
            one.set_sign(self.is_negative());
            one
        }
    }

    fn is_positive(&self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    fn is_negative(&self) -> bool {
        BigInt::is_negative(self)
    }
}

impl<const BASE: u32> ToPrimitive for BigInt<BASE> {
    fn to_i64(&self) -> Option<i64> {
        BigInt::to_i64(self).ok()
    }

    fn to_u64(&self) -> Option<u64> {
        if self.is_negative() {
            return None;
        }
        let tb = Self::true_base();
        let mut ret: u64 = 0;
        for &bigit in self.bigits().iter().rev() {
            ret = ret.checked_mul(tb)?.checked_add(bigit as u64)?;
        }
        Some(ret)
    }
}

impl<const BASE: u32> FromPrimitive for BigInt<BASE> {
    fn from_i64(n: i64) -> Option<BigInt<BASE>> {
        Some(BigInt::from(n))
    }

    fn from_u64(n: u64) -> Option<BigInt<BASE>> {
        Some(BigInt::from(n))
    }
}

impl<const BASE: u32> CheckedAdd for BigInt<BASE> {
    fn checked_add(&self, v: &BigInt<BASE>) -> Option<BigInt<BASE>> {
        Some(self + v)
    }
}

impl<const BASE: u32> CheckedSub for BigInt<BASE> {
    fn checked_sub(&self, v: &BigInt<BASE>) -> Option<BigInt<BASE>> {
        Some(self - v)
    }
}

impl<const BASE: u32> CheckedMul for BigInt<BASE> {
    fn checked_mul(&self, v: &BigInt<BASE>) -> Option<BigInt<BASE>> {
        Some(self * v)
    }
}

impl<const BASE: u32> CheckedDiv for BigInt<BASE> {
    fn checked_div(&self, v: &BigInt<BASE>) -> Option<BigInt<BASE>> {
        if v.is_zero() {
            None
        } else {
            Some(self / v)
        }
    }
}

impl<const BASE: u32> CheckedRem for BigInt<BASE> {
    fn checked_rem(&self, v: &BigInt<BASE>) -> Option<BigInt<BASE>> {
        if v.is_zero() {
            None
        } else {
            Some(self % v)
        }
    }
}

impl<const BASE: u32> Integer for BigInt<BASE> {
    /// Quotient rounded toward negative infinity
    fn div_floor(&self, other: &BigInt<BASE>) -> BigInt<BASE> {
        let (q, r) = self.div_rem(other);
        if !r.is_zero() && (self.is_negative() != other.is_negative()) {
            q - 1
        } else {
            q
        }
    }

    /// Remainder with the divisor's sign, pairing [`Integer::div_floor`]
    fn mod_floor(&self, other: &BigInt<BASE>) -> BigInt<BASE> {
        let r = self % other;
        if !r.is_zero() && (r.is_negative() != other.is_negative()) {
            r + other
        } else {
            r
        }
    }

    fn gcd(&self, other: &BigInt<BASE>) -> BigInt<BASE> {
        BigInt::gcd(self, other)
    }

    fn lcm(&self, other: &BigInt<BASE>) -> BigInt<BASE> {
        BigInt::lcm(self, other)
    }

    fn is_multiple_of(&self, other: &BigInt<BASE>) -> bool {
        if other.is_zero() {
            self.is_zero()
        } else {
            (self % other).is_zero()
        }
    }

    fn is_even(&self) -> bool {
        self.parity() == 0
    }

    fn is_odd(&self) -> bool {
        self.parity() == 1
    }

    /// Truncating division with remainder; panics on a zero divisor
    fn div_rem(&self, other: &BigInt<BASE>) -> (BigInt<BASE>, BigInt<BASE>) {
        match division::div_rem(self, other) {
            Ok(pair) => pair,
            Err(err) => panic!("{}", err),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floored_division_differs_from_truncating() {
        let a = BigInt::<1000>::from(-7);
        let b = BigInt::<1000>::from(2);
        assert_eq!(a.div_rem(&b), (BigInt::from(-3), BigInt::from(-1)));
        assert_eq!(a.div_floor(&b), BigInt::from(-4));
        assert_eq!(a.mod_floor(&b), BigInt::from(1));
    }

    #[test]
    fn floored_division_agrees_when_exact() {
        let a = BigInt::<1000>::from(-8);
        let b = BigInt::<1000>::from(2);
        assert_eq!(a.div_floor(&b), BigInt::from(-4));
        assert!(a.mod_floor(&b).is_zero());
    }

    #[test]
    fn parity_in_odd_radix() {
        // 1000 in radix 999 is [1, 1]: digit parities cancel
        let v = BigInt::<999>::from(1000);
        assert!(v.is_even());
        assert!(BigInt::<999>::from(999).is_odd());
    }

    #[test]
    fn signum_and_abs_sub() {
        let a = BigInt::<1000>::from(-5);
        let b = BigInt::<1000>::from(3);
        assert_eq!(Signed::signum(&a), BigInt::from(-1));
        assert_eq!(Signed::signum(&BigInt::<1000>::new()), BigInt::new());
        assert_eq!(a.abs_sub(&b), BigInt::new());
        assert_eq!(b.abs_sub(&a), BigInt::from(8));
    }

    #[test]
    fn to_u64_rejects_negative() {
        assert_eq!(BigInt::<1000>::from(-1).to_u64(), None);
        assert_eq!(BigInt::<1000>::from(u64::MAX).to_u64(), Some(u64::MAX));
    }

    #[test]
    fn from_str_radix_via_num() {
        let v: BigInt<1024> = Num::from_str_radix("-f1206", 16).unwrap();
        assert_eq!(v.bigits(), &[518, 964]);
        assert!(v.is_negative());
    }
}
