//! Operator overloads
//!
//! Every arithmetic, bitwise and shift operator works on owned and
//! borrowed values on both sides, and on `i64` on either side. The
//! in-place work lives in the `arithmetic` modules; everything here is
//! generated delegation. Division and remainder by zero panic, matching
//! the native integer operators; the fallible forms are
//! [`BigInt::try_div_rem`], [`BigInt::try_shl`] and [`BigInt::try_shr`].

use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use crate::arithmetic::bitwise::{self, BitwiseOp};
use crate::arithmetic::{addition, division, multiplication, shift};
use crate::BigInt;

forward_binop!(impl Add: add, AddAssign: add_assign, addition::add_assign, addition::add_assign_i64);
forward_binop!(impl Sub: sub, SubAssign: sub_assign, addition::sub_assign, addition::sub_assign_i64);
forward_binop!(impl Mul: mul, MulAssign: mul_assign, multiplication::mul_assign, multiplication::mul_assign_i64);
forward_binop!(impl Div: div, DivAssign: div_assign, division::div_assign, division::div_assign_i64);
forward_binop!(impl Rem: rem, RemAssign: rem_assign, division::rem_assign, division::rem_assign_i64);

fn bitand_assign<const BASE: u32>(value: &mut BigInt<BASE>, other: &BigInt<BASE>) {
    bitwise::bitwise_assign(value, other, BitwiseOp::And);
}

fn bitand_assign_i64<const BASE: u32>(value: &mut BigInt<BASE>, other: i64) {
    bitwise::bitwise_assign(value, &BigInt::from(other), BitwiseOp::And);
}

fn bitor_assign<const BASE: u32>(value: &mut BigInt<BASE>, other: &BigInt<BASE>) {
    bitwise::bitwise_assign(value, other, BitwiseOp::Or);
}

fn bitor_assign_i64<const BASE: u32>(value: &mut BigInt<BASE>, other: i64) {
    bitwise::bitwise_assign(value, &BigInt::from(other), BitwiseOp::Or);
}

fn bitxor_assign<const BASE: u32>(value: &mut BigInt<BASE>, other: &BigInt<BASE>) {
    bitwise::bitwise_assign(value, other, BitwiseOp::Xor);
}

fn bitxor_assign_i64<const BASE: u32>(value: &mut BigInt<BASE>, other: i64) {
    bitwise::bitwise_assign(value, &BigInt::from(other), BitwiseOp::Xor);
}

forward_binop!(impl BitAnd: bitand, BitAndAssign: bitand_assign, bitand_assign, bitand_assign_i64);
forward_binop!(impl BitOr: bitor, BitOrAssign: bitor_assign, bitor_assign, bitor_assign_i64);
forward_binop!(impl BitXor: bitxor, BitXorAssign: bitxor_assign, bitxor_assign, bitxor_assign_i64);

forward_shift!(impl Shl: shl, ShlAssign: shl_assign, shift::shl_assign, i64, i32, u32, usize);
forward_shift!(impl Shr: shr, ShrAssign: shr_assign, shift::shr_assign, i64, i32, u32, usize);

impl<const BASE: u32> Shl<&BigInt<BASE>> for &BigInt<BASE> {
    type Output = BigInt<BASE>;

    /// Panics when the distance does not fit an `i64`
    fn shl(self, count: &BigInt<BASE>) -> BigInt<BASE> {
        match self.try_shl(count) {
            Ok(result) => result,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<const BASE: u32> Shr<&BigInt<BASE>> for &BigInt<BASE> {
    type Output = BigInt<BASE>;

    /// Panics when the distance does not fit an `i64`
    fn shr(self, count: &BigInt<BASE>) -> BigInt<BASE> {
        match self.try_shr(count) {
            Ok(result) => result,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<const BASE: u32> Neg for BigInt<BASE> {
    type Output = BigInt<BASE>;

    fn neg(mut self) -> BigInt<BASE> {
        let negative = !self.is_negative();
        self.set_sign(negative);
        self
    }
}

impl<const BASE: u32> Neg for &BigInt<BASE> {
    type Output = BigInt<BASE>;

    fn neg(self) -> BigInt<BASE> {
        -self.clone()
    }
}

impl<const BASE: u32> Not for BigInt<BASE> {
    type Output = BigInt<BASE>;

    fn not(mut self) -> BigInt<BASE> {
        bitwise::not_assign(&mut self);
        self
    }
}

impl<const BASE: u32> Not for &BigInt<BASE> {
    type Output = BigInt<BASE>;

    fn not(self) -> BigInt<BASE> {
        !self.clone()
    }
}

impl<const BASE: u32> Sum for BigInt<BASE> {
    fn sum<I: Iterator<Item = BigInt<BASE>>>(iter: I) -> BigInt<BASE> {
        iter.fold(BigInt::new(), |mut acc, x| {
            addition::add_assign(&mut acc, &x);
            acc
        })
    }
}

impl<'a, const BASE: u32> Sum<&'a BigInt<BASE>> for BigInt<BASE> {
    fn sum<I: Iterator<Item = &'a BigInt<BASE>>>(iter: I) -> BigInt<BASE> {
        iter.fold(BigInt::new(), |mut acc, x| {
            addition::add_assign(&mut acc, x);
            acc
        })
    }
}

impl<const BASE: u32> Product for BigInt<BASE> {
    fn product<I: Iterator<Item = BigInt<BASE>>>(iter: I) -> BigInt<BASE> {
        iter.fold(BigInt::from(1), |mut acc, x| {
            multiplication::mul_assign(&mut acc, &x);
            acc
        })
    }
}

impl<'a, const BASE: u32> Product<&'a BigInt<BASE>> for BigInt<BASE> {
    fn product<I: Iterator<Item = &'a BigInt<BASE>>>(iter: I) -> BigInt<BASE> {
        iter.fold(BigInt::from(1), |mut acc, x| {
            multiplication::mul_assign(&mut acc, x);
            acc
        })
    }
}
