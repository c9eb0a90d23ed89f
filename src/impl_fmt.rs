//! `BigInt` → text in radices 2 through 36
//!
//! When the internal radix is an exact power of the text radix each
//! bigit expands to a fixed-width chunk of text independently, so the
//! default 10<sup>9</sup> radix prints decimal without dividing.

use std::fmt;

use crate::arithmetic::division;
use crate::parsing::value_to_char;
use crate::{radix, ArithmeticError, BigInt};

impl<const BASE: u32> BigInt<BASE> {
    /// Writes the value in text `radix` with lowercase digits and a
    /// leading `-` when negative.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::InvalidBase`] when `radix` is outside
    /// `[2, 36]`.
    pub fn to_str_radix(&self, radix: u32) -> Result<String, ArithmeticError> {
        if !(2..=36).contains(&radix) {
            return Err(ArithmeticError::InvalidBase(radix));
        }
        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }
        out.push_str(&self.magnitude_str(radix));
        Ok(out)
    }

    fn magnitude_str(&self, text_radix: u32) -> String {
        if self.is_zero() {
            return "0".to_owned();
        }
        let tb = Self::true_base();
        // a tiny internal radix cannot short-divide by the text radix
        if (text_radix as u64) > tb {
            return self.to_binary().magnitude_str(text_radix);
        }

        let chunk_size = radix::int_log_of(tb, text_radix as u64) as usize;
        if chunk_size != 0 {
            // fixed-width chunks, the most significant unpadded
            let mut text = String::with_capacity(self.size() * chunk_size);
            for (i, &bigit) in self.bigits().iter().rev().enumerate() {
                let mut chunk = ['0'; 32];
                let mut bigit = bigit as u64;
                let mut pos = chunk_size;
                while bigit != 0 {
                    pos -= 1;
                    chunk[pos] = value_to_char((bigit % text_radix as u64) as u32);
                    bigit /= text_radix as u64;
                }
                let start = if i == 0 { pos } else { 0 };
                text.extend(chunk[start..chunk_size].iter());
            }
            text
        } else {
            let mut digits = Vec::new();
            let mut magnitude = self.bigits().to_vec();
            loop {
                let rem = division::div_rem_small_magnitude(&mut magnitude, text_radix as u64, tb);
                digits.push(value_to_char(rem as u32));
                if magnitude.len() == 1 && magnitude[0] == 0 {
                    break;
                }
            }
            digits.iter().rev().collect()
        }
    }
}

impl<const BASE: u32> fmt::Display for BigInt<BASE> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_str(10))
    }
}

impl<const BASE: u32> fmt::Debug for BigInt<BASE> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "BigInt<{}>({}{:?})",
            BASE,
            if self.is_negative() { "-" } else { "" },
            self.bigits(),
        )
    }
}

impl<const BASE: u32> fmt::Binary for BigInt<BASE> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0b", &self.magnitude_str(2))
    }
}

impl<const BASE: u32> fmt::Octal for BigInt<BASE> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0o", &self.magnitude_str(8))
    }
}

impl<const BASE: u32> fmt::LowerHex for BigInt<BASE> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.magnitude_str(16))
    }
}

impl<const BASE: u32> fmt::UpperHex for BigInt<BASE> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.magnitude_str(16).to_uppercase())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_BASE;

    fn sample() -> BigInt<1_000_000_000> {
        BigInt::from_bigits(vec![234567890, 345678901, 456789012, 123], false)
    }

    #[test]
    fn display_pads_interior_chunks() {
        // interior bigits print zero padded to nine places
        let value = BigInt::<1_000_000_000>::from_bigits(vec![42, 7], true);
        assert_eq!(value.to_string(), "-7000000042");
    }

    #[test]
    fn display_large() {
        assert_eq!(sample().to_string(), "123456789012345678901234567890");
    }

    #[test]
    fn display_respects_format_flags() {
        let value = BigInt::<1000>::from_bigits(vec![654, 987], true);
        assert_eq!(format!("{:>12}", value), "     -987654");
        assert_eq!(format!("{:08}", value), "-0987654");

        let value = BigInt::<1000>::from_bigits(vec![654, 987], false);
        assert_eq!(format!("{:+}", value), "+987654");
    }

    #[test]
    fn zero_prints_bare() {
        assert_eq!(BigInt::<1024>::new().to_string(), "0");
    }

    #[test]
    fn hex_octal_binary() {
        let value = BigInt::<MAX_BASE>::from_bigits(vec![0xDEAD_BEEF], false);
        assert_eq!(format!("{:x}", value), "deadbeef");
        assert_eq!(format!("{:X}", value), "DEADBEEF");
        assert_eq!(format!("{:#x}", value), "0xdeadbeef");
        assert_eq!(format!("{:o}", value), "33653337357");
        assert_eq!(format!("{:b}", BigInt::<1024>::from_bigits(vec![518, 964], false)), "11110001001000000110");
    }

    #[test]
    fn to_str_radix_round_trip_vectors() {
        let value = BigInt::<1000>::from_bigits(vec![654, 987], true);
        assert_eq!(value.to_str_radix(10).unwrap(), "-987654");
        assert_eq!(value.to_str_radix(36).unwrap(), "-l62u");
        assert_eq!(value.to_str_radix(2).unwrap(), "-11110001001000000110");
    }

    #[test]
    fn tiny_internal_radix_formats_through_binary() {
        // 987654 stored in radix 2 still prints decimal
        let value = BigInt::<1000>::from_bigits(vec![654, 987], false).to_radix::<2>();
        assert_eq!(value.to_string(), "987654");
    }

    #[test]
    fn radix_out_of_range() {
        let value = sample();
        assert_eq!(value.to_str_radix(1).unwrap_err(), ArithmeticError::InvalidBase(1));
        assert_eq!(value.to_str_radix(37).unwrap_err(), ArithmeticError::InvalidBase(37));
    }
}
