//! Conversions between `BigInt`, native integers, and strings

use std::convert::TryFrom;
use std::str::FromStr;

use crate::{parsing, radix, ArithmeticError, BigInt, ParseBigIntError};

macro_rules! impl_from_signed_int {
    ($($t:ty),*) => {$(
        impl<const BASE: u32> From<$t> for BigInt<BASE> {
            fn from(n: $t) -> BigInt<BASE> {
                let negative = n < 0;
                let magnitude = (n as i64).unsigned_abs();
                BigInt::from_bigits(radix::digits_of(magnitude, Self::true_base()), negative)
            }
        }
    )*};
}

macro_rules! impl_from_unsigned_int {
    ($($t:ty),*) => {$(
        impl<const BASE: u32> From<$t> for BigInt<BASE> {
            fn from(n: $t) -> BigInt<BASE> {
                BigInt::from_bigits(radix::digits_of(n as u64, Self::true_base()), false)
            }
        }
    )*};
}

impl_from_signed_int!(i8, i16, i32, i64, isize);
impl_from_unsigned_int!(u8, u16, u32, u64, usize);

impl<const BASE: u32> TryFrom<&BigInt<BASE>> for i64 {
    type Error = ArithmeticError;

    fn try_from(value: &BigInt<BASE>) -> Result<i64, ArithmeticError> {
        value.to_i64()
    }
}

impl<const BASE: u32> TryFrom<BigInt<BASE>> for i64 {
    type Error = ArithmeticError;

    fn try_from(value: BigInt<BASE>) -> Result<i64, ArithmeticError> {
        value.to_i64()
    }
}

impl<const BASE: u32> FromStr for BigInt<BASE> {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<BigInt<BASE>, ParseBigIntError> {
        parsing::parse_str(s, 10)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_BASE;

    #[test]
    fn from_native_ints() {
        let v = BigInt::<1000>::from(-123456i64);
        assert_eq!(v.bigits(), &[456, 123]);
        assert!(v.is_negative());

        let v = BigInt::<1000>::from(255u8);
        assert_eq!(v.bigits(), &[255]);

        let v = BigInt::<1000>::from(0i32);
        assert!(v.is_zero());
        assert!(!v.is_negative());
    }

    #[test]
    fn from_i64_min() {
        let v = BigInt::<MAX_BASE>::from(i64::MIN);
        assert_eq!(v.bigits(), &[0, 2_147_483_648]);
        assert!(v.is_negative());
    }

    #[test]
    fn i64_round_trips() {
        for n in [0i64, 42, -42, i64::MAX, i64::MIN] {
            let v = BigInt::<1_000_000_000>::from(n);
            assert_eq!(i64::try_from(&v), Ok(n));
        }
    }

    #[test]
    fn narrowing_overflow() {
        let too_big = BigInt::<1_000_000_000>::from(i64::MAX) + 1;
        assert_eq!(i64::try_from(&too_big), Err(ArithmeticError::Overflow));

        let too_small = BigInt::<1_000_000_000>::from(i64::MIN) - 1;
        assert_eq!(i64::try_from(&too_small), Err(ArithmeticError::Underflow));
    }

    #[test]
    fn from_str_uses_base_ten() {
        let v: BigInt<1024> = "987654".parse().unwrap();
        assert_eq!(v.bigits(), &[518, 964]);
        assert!("".parse::<BigInt>().unwrap().is_zero());
    }
}
