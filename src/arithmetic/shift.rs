//! Bit shifts
//!
//! Shifts move the magnitude; the sign rides along untouched unless the
//! result is zero. A negative distance reverses direction. In a
//! power-of-two radix the distance splits into whole digits plus a
//! sub-digit bit offset; any other radix round-trips through the
//! canonical binary radix.

use crate::arithmetic::trim_magnitude;
use crate::{radix, BigInt};

/// `value <<= count`; a negative count shifts right
pub(crate) fn shl_assign<const BASE: u32>(value: &mut BigInt<BASE>, count: i64) {
    if count >= 0 {
        shl_magnitude_bits(value, count as u64);
    } else {
        shr_magnitude_bits(value, count.unsigned_abs());
    }
}

/// `value >>= count`; a negative count shifts left
pub(crate) fn shr_assign<const BASE: u32>(value: &mut BigInt<BASE>, count: i64) {
    if count >= 0 {
        shr_magnitude_bits(value, count as u64);
    } else {
        shl_magnitude_bits(value, count.unsigned_abs());
    }
}

fn shl_magnitude_bits<const BASE: u32>(value: &mut BigInt<BASE>, n: u64) {
    if n == 0 || value.is_zero() {
        return;
    }
    let bits = radix::bits_per_bigit(BASE) as u64;
    if bits == 0 {
        let mut binary = value.to_binary();
        shl_magnitude_bits(&mut binary, n);
        *value = binary.to_radix::<BASE>();
        return;
    }

    let whole = (n / bits) as usize;
    let partial = (n % bits) as u32;
    let mut bigits = vec![0u32; whole];
    bigits.reserve(value.size() + 1);
    if partial == 0 {
        bigits.extend_from_slice(&value.bigits);
    } else {
        let mask = BigInt::<BASE>::true_base() - 1;
        let mut carry = 0u64;
        for &digit in &value.bigits {
            let v = ((digit as u64) << partial) | carry;
            bigits.push((v & mask) as u32);
            carry = v >> bits;
        }
        if carry != 0 {
            bigits.push(carry as u32);
        }
    }
    value.bigits = bigits;
    debug_assert!(value.valid());
}

fn shr_magnitude_bits<const BASE: u32>(value: &mut BigInt<BASE>, n: u64) {
    if n == 0 || value.is_zero() {
        return;
    }
    let bits = radix::bits_per_bigit(BASE) as u64;
    if bits == 0 {
        let mut binary = value.to_binary();
        shr_magnitude_bits(&mut binary, n);
        *value = binary.to_radix::<BASE>();
        return;
    }

    let whole = (n / bits) as usize;
    if whole >= value.size() {
        *value = BigInt::new();
        return;
    }
    let partial = (n % bits) as u32;
    let src = &value.bigits[whole..];
    let mut bigits = Vec::with_capacity(src.len());
    if partial == 0 {
        bigits.extend_from_slice(src);
    } else {
        for (i, &digit) in src.iter().enumerate() {
            let mut v = (digit as u64) >> partial;
            if let Some(&next) = src.get(i + 1) {
                v |= (next as u64) << (bits as u32 - partial);
            }
            bigits.push(v as u32);
        }
        trim_magnitude(&mut bigits);
    }
    value.bigits = bigits;
    value.normalize_zero_sign();
    debug_assert!(value.valid());
}


#[cfg(test)]
mod tests {
    use super::*;

    include!("shift.tests.rs");
}
