// Copyright 2016 Adam Sunderland
//           2016-2023 Andrew Kubera
//           2017 Ruben De Smet
// See the COPYRIGHT file at the top-level directory of this
// distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Arbitrary-precision signed integers in a configurable radix
//!
//! `BigInt<BASE>` stores an integer of unbounded magnitude as a vector of
//! unsigned 32-bit digits ("bigits"), least significant first, each less
//! than `BASE`. The radix is a const generic, so mixing two radices is a
//! type error; moving a value between radices goes through the explicit
//! [`BigInt::to_radix`] conversion.
//!
//! A `BASE` of `0` is the [`MAX_BASE`] sentinel meaning 2<sup>32</sup>,
//! which gives the densest storage and lets the hot loops skip the
//! per-digit modulo. The default radix is `DEFAULT_BASE`
//! (10<sup>9</sup> unless overridden through the
//! `RUST_BIGRADIX_DEFAULT_BASE` environment variable at build time),
//! which formats decimal text fastest.
//!
//! Values are sign-magnitude, not two's complement: negation flips a flag
//! rather than rewriting digits, and the bitwise operators compute the
//! sign of their result from a truth table over the operand signs while
//! combining the magnitudes digit by digit.
//!
//! # Example
//!
//! ```
//! use bigradix::BigInt;
//!
//! let a: BigInt = "123456789012345678901234567890".parse().unwrap();
//! let b = BigInt::from(-987654321i64);
//!
//! assert_eq!((&a % &b).to_string(), "574845669");
//!
//! let n: BigInt = BigInt::from(18);
//! assert_eq!(n.factorial().unwrap().to_string(), "6402373705728000");
//! ```
#![allow(clippy::needless_return)]
#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::suspicious_op_assign_impl)]
#![allow(clippy::redundant_field_names)]

use std::fmt;

pub use num_traits::{FromPrimitive, Num, One, Signed, ToPrimitive, Zero};

// const DEFAULT_BASE: u32 = ${RUST_BIGRADIX_DEFAULT_BASE:-1000000000};
include!(concat!(env!("OUT_DIR"), "/default_base.rs"));

/// Radix sentinel meaning 2<sup>32</sup>: least storage per digit, no
/// modulo on the hot path
pub const MAX_BASE: u32 = 0;

/// Alias of [`MAX_BASE`]; every power of two up to 2<sup>32</sup> is a
/// valid radix and this is the largest
pub const MAX_BINARY_BASE: u32 = MAX_BASE;

/// Largest power of ten that fits a 32-bit digit; the fastest radix for
/// decimal formatting
pub const MAX_DECIMAL_BASE: u32 = 1_000_000_000;

/// `BigInt` in the canonical binary radix; the working type of the
/// bit-level algorithms when a value's own radix is not a power of two
pub type BinaryBigInt = BigInt<MAX_BASE>;

#[macro_use]
mod macros;

pub(crate) mod arithmetic;
pub mod radix;

// From<T>, TryFrom<T>, FromStr
mod impl_convert;

// Add, Sub, Mul, Div, Rem, shifts, bitwise, Neg, Not, Sum, Product
mod impl_ops;

// PartialOrd, Ord, and comparison against i64
mod impl_cmp;

// Implementations of num_traits / num_integer
mod impl_num;

// Display, Debug, {Lower,Upper}Hex, Octal, Binary, to_str_radix
mod impl_fmt;

mod parsing;

#[cfg(feature = "serde")]
mod impl_serde;


/// Failure of text → `BigInt` conversion
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseBigIntError {
    /// Requested text radix outside the supported range `[2, 36]`
    InvalidBase(u32),
    /// A character which is not a digit of the requested radix
    InvalidDigit(char),
}

impl fmt::Display for ParseBigIntError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseBigIntError::*;

        match *self {
            InvalidBase(base) => write!(f, "text radix must be between 2 and 36, got {}", base),
            InvalidDigit(c) => write!(f, "invalid digit {:?} for the requested radix", c),
        }
    }
}

impl std::error::Error for ParseBigIntError {}


/// Precondition violation of an arithmetic operation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Division or modulo with a zero divisor
    DivideByZero,
    /// Digit-statistics radix of 1, or larger than the internal radix
    InvalidBase(u32),
    /// Logarithm of zero or of a negative value
    NonPositiveValue,
    /// Logarithm base less than 2
    InvalidLogBase,
    /// Square root of a negative value
    NegativeRadicand,
    /// Factorial of a negative value
    NegativeOperand,
    /// Narrowing a value too large for the target range
    Overflow,
    /// Narrowing a value too small for the target range
    Underflow,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ArithmeticError::*;

        match *self {
            DivideByZero => "cannot divide by zero".fmt(f),
            InvalidBase(base) => write!(f, "digit radix {} is not between 2 and the internal radix", base),
            NonPositiveValue => "cannot take the logarithm of a non-positive number".fmt(f),
            InvalidLogBase => "logarithm base must be greater than 1".fmt(f),
            NegativeRadicand => "cannot take the square root of a negative number".fmt(f),
            NegativeOperand => "cannot take the factorial of a negative number".fmt(f),
            Overflow => "overflowed the target range".fmt(f),
            Underflow => "underflowed the target range".fmt(f),
        }
    }
}

impl std::error::Error for ArithmeticError {}


/// A signed integer of unbounded magnitude stored in radix `BASE`.
///
/// Digits are least significant first; the most significant digit is
/// nonzero except for the canonical zero `[0]`. Zero never carries a
/// negative sign, so structural equality is value equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt<const BASE: u32 = DEFAULT_BASE> {
    bigits: Vec<u32>,
    negative: bool,
}

impl<const BASE: u32> BigInt<BASE> {
    const RADIX_NOT_UNARY: () = assert!(BASE != 1, "radix 1 is not supported");

    /// The effective per-digit modulus: `BASE`, or 2<sup>32</sup> when
    /// `BASE` is the [`MAX_BASE`] sentinel
    pub const fn true_base() -> u64 {
        let () = Self::RADIX_NOT_UNARY;
        if BASE == 0 {
            radix::BASE_ZERO_TRUE_VALUE
        } else {
            BASE as u64
        }
    }

    /// Creates a `BigInt` equal to zero
    #[inline]
    pub fn new() -> BigInt<BASE> {
        BigInt {
            bigits: vec![0],
            negative: false,
        }
    }

    /// Creates a `BigInt` from a raw digit sequence, least significant
    /// first, and a sign flag.
    ///
    /// The caller must uphold the representation invariants: the
    /// sequence is non-empty, the most significant digit is nonzero
    /// unless the sequence is exactly `[0]`, and every digit is less
    /// than [`BigInt::true_base`]. Violations are caught by debug
    /// assertions only.
    #[inline]
    pub fn from_bigits(bigits: Vec<u32>, negative: bool) -> BigInt<BASE> {
        let mut value = BigInt { bigits, negative };
        value.normalize_zero_sign();
        debug_assert!(value.valid());
        value
    }

    /// Number of bigits in the magnitude; the canonical zero has one
    #[inline]
    pub fn size(&self) -> usize {
        self.bigits.len()
    }

    /// The digit sequence, least significant first
    #[inline]
    pub fn bigits(&self) -> &[u32] {
        &self.bigits
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.bigits.len() == 1 && self.bigits[0] == 0
    }

    /// Whether the sign flag is set; never true for zero
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Sets the sign flag; ignored for zero
    #[inline]
    pub fn set_sign(&mut self, negative: bool) {
        self.negative = negative && !self.is_zero();
    }

    /// Returns the absolute value
    #[inline]
    pub fn abs(&self) -> BigInt<BASE> {
        BigInt {
            bigits: self.bigits.clone(),
            negative: false,
        }
    }

    /// Floored integer square root.
    ///
    /// Runs bit by bit over the binary form, converting through the
    /// canonical binary radix first if `BASE` is not a power of two.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::NegativeRadicand`] if `self` is negative.
    pub fn sqrt(&self) -> Result<BigInt<BASE>, ArithmeticError> {
        if self.negative {
            return Err(ArithmeticError::NegativeRadicand);
        }
        if self.size() == 1 && self.bigits[0] <= 1 {
            return Ok(self.clone());
        }
        Ok(arithmetic::sqrt::sqrt(self))
    }

    /// Floored integer logarithm in base `base`.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::NonPositiveValue`] unless `self > 0`, and
    /// [`ArithmeticError::InvalidLogBase`] unless `base > 1`.
    pub fn log(&self, base: &BigInt<BASE>) -> Result<BigInt<BASE>, ArithmeticError> {
        if self.negative || self.is_zero() {
            return Err(ArithmeticError::NonPositiveValue);
        }
        if *base <= 1i64 {
            return Err(ArithmeticError::InvalidLogBase);
        }
        Ok(arithmetic::pow::log(self, base))
    }

    /// Raises `self` to `exponent` by binary exponentiation.
    ///
    /// An exponent of zero yields one, including `0.pow(0)`; a negative
    /// exponent yields zero, as the true result would be a fraction.
    pub fn pow(&self, exponent: &BigInt<BASE>) -> BigInt<BASE> {
        if exponent.negative {
            return BigInt::new();
        }
        if exponent.is_zero() {
            return BigInt::from(1);
        }
        arithmetic::pow::pow(self, exponent)
    }

    /// [`BigInt::pow`] with a native exponent, skipping construction
    pub fn powi(&self, exponent: i64) -> BigInt<BASE> {
        if exponent < 0 {
            return BigInt::new();
        }
        if exponent == 0 {
            return BigInt::from(1);
        }
        arithmetic::pow::powi(self, exponent as u64)
    }

    /// Greatest common divisor; the result is always non-negative
    pub fn gcd(&self, other: &BigInt<BASE>) -> BigInt<BASE> {
        arithmetic::euclid::gcd(self, other)
    }

    /// Least common multiple; the result is always non-negative
    pub fn lcm(&self, other: &BigInt<BASE>) -> BigInt<BASE> {
        arithmetic::euclid::lcm(self, other)
    }

    /// Factorial, pairing symmetric factors to halve the number of
    /// full-width multiplications.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::NegativeOperand`] if `self` is negative.
    pub fn factorial(&self) -> Result<BigInt<BASE>, ArithmeticError> {
        if self.negative {
            return Err(ArithmeticError::NegativeOperand);
        }
        Ok(arithmetic::factorial::factorial(self))
    }

    /// Number of binary digits in the magnitude; zero counts one
    pub fn bits(&self) -> u64 {
        self.digits_in(2)
    }

    /// Number of digits of the magnitude written in `radix`, where a
    /// `radix` of zero means 2<sup>32</sup>.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::InvalidBase`] when `radix` is 1 or exceeds the
    /// internal radix.
    pub fn digits(&self, radix: u32) -> Result<u64, ArithmeticError> {
        Ok(self.digits_in(Self::validate_digit_base(radix)?))
    }

    /// Sum of the digits of the magnitude written in `radix`, where a
    /// `radix` of zero means 2<sup>32</sup>.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::InvalidBase`] as for [`BigInt::digits`], or
    /// [`ArithmeticError::Overflow`] if the running sum leaves `u64`
    /// range.
    pub fn digit_sum(&self, radix: u32) -> Result<u64, ArithmeticError> {
        let digit_base = Self::validate_digit_base(radix)?;
        let tb = Self::true_base();

        let mut sum: u64 = 0;
        if digit_base == tb || radix::int_log_of(tb, digit_base) != 0 {
            for &bigit in &self.bigits {
                let mut bigit = bigit as u64;
                loop {
                    sum = sum
                        .checked_add(bigit % digit_base)
                        .ok_or(ArithmeticError::Overflow)?;
                    bigit /= digit_base;
                    if bigit == 0 {
                        break;
                    }
                }
            }
        } else {
            let mut magnitude = self.bigits.clone();
            loop {
                let rem = arithmetic::division::div_rem_small_magnitude(&mut magnitude, digit_base, tb);
                sum = sum.checked_add(rem).ok_or(ArithmeticError::Overflow)?;
                if magnitude.len() == 1 && magnitude[0] == 0 {
                    break;
                }
            }
        }
        Ok(sum)
    }

    /// Narrows to an `i64`.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::Overflow`] / [`ArithmeticError::Underflow`] at
    /// the first accumulation step that leaves `i64` range.
    pub fn to_i64(&self) -> Result<i64, ArithmeticError> {
        let fail = || {
            if self.negative {
                ArithmeticError::Underflow
            } else {
                ArithmeticError::Overflow
            }
        };
        let tb = Self::true_base() as i64;

        // accumulate on the negative side so i64::MIN narrows cleanly
        let mut ret: i64 = 0;
        for &bigit in self.bigits.iter().rev() {
            ret = ret.checked_mul(tb).ok_or_else(fail)?;
            ret = ret.checked_sub(bigit as i64).ok_or_else(fail)?;
        }
        if self.negative {
            Ok(ret)
        } else {
            ret.checked_neg().ok_or_else(fail)
        }
    }

    /// Division with remainder; the remainder's sign follows `self`.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivideByZero`] when `other` is zero.
    pub fn try_div_rem(
        &self,
        other: &BigInt<BASE>,
    ) -> Result<(BigInt<BASE>, BigInt<BASE>), ArithmeticError> {
        arithmetic::division::div_rem(self, other)
    }

    /// Left shift by an arbitrary-precision distance; a negative
    /// distance shifts right.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::Overflow`] / [`ArithmeticError::Underflow`]
    /// if the distance does not fit an `i64`.
    pub fn try_shl(&self, count: &BigInt<BASE>) -> Result<BigInt<BASE>, ArithmeticError> {
        let count = count.to_i64()?;
        let mut out = self.clone();
        arithmetic::shift::shl_assign(&mut out, count);
        Ok(out)
    }

    /// Right shift by an arbitrary-precision distance; a negative
    /// distance shifts left.
    ///
    /// # Errors
    ///
    /// As for [`BigInt::try_shl`].
    pub fn try_shr(&self, count: &BigInt<BASE>) -> Result<BigInt<BASE>, ArithmeticError> {
        let count = count.to_i64()?;
        let mut out = self.clone();
        arithmetic::shift::shr_assign(&mut out, count);
        Ok(out)
    }

    fn validate_digit_base(radix: u32) -> Result<u64, ArithmeticError> {
        let digit_base = radix::true_base_of(radix);
        if digit_base < 2 || digit_base > Self::true_base() {
            return Err(ArithmeticError::InvalidBase(radix));
        }
        Ok(digit_base)
    }

    fn digits_in(&self, digit_base: u64) -> u64 {
        let tb = Self::true_base();
        if digit_base == tb {
            return self.size() as u64;
        }

        let per_bigit = radix::int_log_of(tb, digit_base) as u64;
        if per_bigit != 0 {
            let mut count = (self.size() as u64 - 1) * per_bigit;
            let mut last = self.back() as u64;
            loop {
                count += 1;
                last /= digit_base;
                if last == 0 {
                    break;
                }
            }
            count
        } else {
            let mut magnitude = self.bigits.clone();
            let mut count = 0u64;
            loop {
                count += 1;
                arithmetic::division::div_rem_small_magnitude(&mut magnitude, digit_base, tb);
                if magnitude.len() == 1 && magnitude[0] == 0 {
                    break;
                }
            }
            count
        }
    }

    /// Most significant digit
    #[inline]
    pub(crate) fn back(&self) -> u32 {
        self.bigits[self.bigits.len() - 1]
    }

    /// Whether the magnitude, sign ignored, is exactly one
    #[inline]
    pub(crate) fn magnitude_is_one(&self) -> bool {
        self.bigits.len() == 1 && self.bigits[0] == 1
    }

    /// Value modulo 2, valid in every radix: in an odd radix every digit's
    /// parity contributes, not just the lowest
    #[inline]
    pub(crate) fn parity(&self) -> u32 {
        if Self::true_base() % 2 == 0 {
            self.bigits[0] & 1
        } else {
            self.bigits.iter().fold(0, |p, &d| p ^ (d & 1))
        }
    }

    /// Zero never keeps a negative sign
    #[inline]
    pub(crate) fn normalize_zero_sign(&mut self) {
        if self.negative && self.is_zero() {
            self.negative = false;
        }
    }

    /// Representation invariants, checked by debug assertions after the
    /// mutating algorithms
    pub(crate) fn valid(&self) -> bool {
        !self.bigits.is_empty()
            && (self.back() != 0 || self.bigits.len() == 1)
            && (BASE == 0 || self.bigits.iter().all(|&bigit| (bigit as u64) < Self::true_base()))
            && (!self.negative || !self.is_zero())
    }
}

impl<const BASE: u32> Default for BigInt<BASE> {
    #[inline]
    fn default() -> BigInt<BASE> {
        BigInt::new()
    }
}


#[cfg(test)]
#[allow(non_snake_case)]
mod bigint_tests {
    use super::*;

    include!("lib.tests.rs");
}

#[cfg(test)]
#[allow(non_snake_case)]
mod property_tests {
    use super::*;

    include!("lib.tests.property-tests.rs");
}
