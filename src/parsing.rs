//! Text → `BigInt` parsing for radices 2 through 36
//!
//! When the internal radix is an exact power of the text radix, digits
//! pack into bigits a fixed-size chunk at a time with no big-number
//! arithmetic; parsing decimal text into the default 10<sup>9</sup>
//! radix takes this path. Everything else is a Horner evaluation.

use crate::arithmetic::{self, addition, multiplication};
use crate::{radix, BigInt, ParseBigIntError};

/// Value of one digit character, case insensitive
pub(crate) fn char_value(c: char, radix: u32) -> Result<u32, ParseBigIntError> {
    match c.to_digit(36) {
        Some(v) if v < radix => Ok(v),
        _ => Err(ParseBigIntError::InvalidDigit(c)),
    }
}

/// Digit character for a value below 36, lowercase
pub(crate) fn value_to_char(v: u32) -> char {
    debug_assert!(v < 36);
    std::char::from_digit(v, 36).unwrap_or('?')
}

pub(crate) fn parse_str<const BASE: u32>(
    s: &str,
    radix: u32,
) -> Result<BigInt<BASE>, ParseBigIntError> {
    if !(2..=36).contains(&radix) {
        return Err(ParseBigIntError::InvalidBase(radix));
    }
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    // empty input, like all-zero input, is the canonical zero
    if digits.is_empty() {
        return Ok(BigInt::new());
    }

    let mut values = Vec::with_capacity(digits.len());
    for c in digits.chars() {
        values.push(char_value(c, radix)?);
    }
    let values = match values.iter().position(|&v| v != 0) {
        Some(first_nonzero) => &values[first_nonzero..],
        None => return Ok(BigInt::new()),
    };

    let tb = BigInt::<BASE>::true_base();

    // tb = radix^k: k text digits pack into one bigit
    let chunk_size = radix::int_log_of(tb, radix as u64) as usize;
    if chunk_size != 0 {
        let mut bigits = Vec::with_capacity(values.len() / chunk_size + 1);
        for chunk in values.rchunks(chunk_size) {
            let bigit = chunk
                .iter()
                .fold(0u64, |acc, &v| acc * radix as u64 + v as u64);
            bigits.push(bigit as u32);
        }
        arithmetic::trim_magnitude(&mut bigits);
        return Ok(BigInt::from_bigits(bigits, negative));
    }

    let mut result = BigInt::<BASE>::new();
    for &v in values {
        multiplication::mul_assign_small(&mut result, radix as u64);
        addition::add_assign_small(&mut result, v as u64);
    }
    result.set_sign(negative);
    Ok(result)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_chunks_into_default_radix() {
        let value: BigInt<1_000_000_000> = parse_str("123456789012345678901234567890", 10).unwrap();
        assert_eq!(value.bigits(), &[234567890, 345678901, 456789012, 123]);
        assert!(!value.is_negative());
    }

    #[test]
    fn sign_prefixes() {
        let value: BigInt<1000> = parse_str("-987654", 10).unwrap();
        assert_eq!(value.bigits(), &[654, 987]);
        assert!(value.is_negative());

        let value: BigInt<1000> = parse_str("+987654", 10).unwrap();
        assert!(!value.is_negative());
    }

    #[test]
    fn leading_zeros_stripped() {
        let value: BigInt<1000> = parse_str("000987654", 10).unwrap();
        assert_eq!(value.bigits(), &[654, 987]);
    }

    #[test]
    fn negative_zero_normalizes() {
        let value: BigInt<1000> = parse_str("-000", 10).unwrap();
        assert!(value.is_zero());
        assert!(!value.is_negative());
    }

    #[test]
    fn empty_input_is_zero() {
        assert!(parse_str::<1000>("", 10).unwrap().is_zero());
        assert!(parse_str::<1000>("-", 10).unwrap().is_zero());
        assert!(parse_str::<1000>("+", 10).unwrap().is_zero());
    }

    #[test]
    fn binary_text_into_power_of_two_radix() {
        // 987654 == 0b11110001001000000110
        let value: BigInt<1024> = parse_str("11110001001000000110", 2).unwrap();
        assert_eq!(value.bigits(), &[518, 964]);
    }

    #[test]
    fn base36_case_insensitive() {
        let lower: BigInt<1_000_000_000> = parse_str("zik0zj", 36).unwrap();
        let upper: BigInt<1_000_000_000> = parse_str("ZIK0ZJ", 36).unwrap();
        // zik0zj in base 36 == i32::MAX
        assert_eq!(lower.bigits(), &[147483647, 2]);
        assert_eq!(lower, upper);
    }

    #[test]
    fn horner_path_into_odd_radix() {
        let value: BigInt<999> = parse_str("987654", 10).unwrap();
        // 987654 == 988*999 + 642
        assert_eq!(value.bigits(), &[642, 988]);
    }

    #[test]
    fn rejected_inputs() {
        assert_eq!(
            parse_str::<1000>("12x4", 10).unwrap_err(),
            ParseBigIntError::InvalidDigit('x'),
        );
        assert_eq!(
            parse_str::<1000>("129", 8).unwrap_err(),
            ParseBigIntError::InvalidDigit('9'),
        );
        assert_eq!(
            parse_str::<1000>("123", 37).unwrap_err(),
            ParseBigIntError::InvalidBase(37),
        );
        assert_eq!(
            parse_str::<1000>("123", 1).unwrap_err(),
            ParseBigIntError::InvalidBase(1),
        );
    }
}
