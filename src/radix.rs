//! Radix properties and cross-radix conversion
//!
//! The fast paths here rely on one radix being an integer power of the
//! other, in which case digits pack and unpack positionally without any
//! big-number arithmetic. Everything else goes through a Horner
//! evaluation in the destination radix.

use crate::arithmetic;
use crate::{BigInt, BinaryBigInt, MAX_BASE};

/// Per-digit modulus of the [`MAX_BASE`] radix sentinel: 2<sup>32</sup>
pub const BASE_ZERO_TRUE_VALUE: u64 = (u32::MAX as u64) + 1;

/// Maps a radix parameter to its per-digit modulus, `0` meaning 2<sup>32</sup>
#[inline]
pub const fn true_base_of(base: u32) -> u64 {
    if base == 0 {
        BASE_ZERO_TRUE_VALUE
    } else {
        base as u64
    }
}

/// Returns `k > 0` such that `base`<sup>`k`</sup>` == eq`, or `0` when
/// `eq` is not a positive power of `base`
pub const fn int_log_of(eq: u64, base: u64) -> u32 {
    if base < 2 {
        return 0;
    }
    let mut acc = 1u64;
    let mut k = 0u32;
    while acc < eq {
        acc *= base;
        k += 1;
    }
    if acc == eq && k > 0 {
        k
    } else {
        0
    }
}

/// Bits in one digit of radix `base`, or `0` if `base` is not a power
/// of two; const-foldable, so the power-of-two branches compile away
#[inline]
pub(crate) const fn bits_per_bigit(base: u32) -> u32 {
    int_log_of(true_base_of(base), 2)
}

/// Number of radix-`tb` digits in `n`; zero takes one digit
pub(crate) fn int_size(mut n: u64, tb: u64) -> usize {
    let mut size = 1;
    n /= tb;
    while n != 0 {
        size += 1;
        n /= tb;
    }
    size
}

/// Digit decomposition of a native integer, least significant first
pub(crate) fn digits_of(mut n: u64, tb: u64) -> Vec<u32> {
    let mut bigits = Vec::with_capacity(int_size(n, tb));
    loop {
        bigits.push((n % tb) as u32);
        n /= tb;
        if n == 0 {
            break;
        }
    }
    bigits
}

impl<const BASE: u32> BigInt<BASE> {
    /// Rewrites the value in radix `NEW_BASE`.
    ///
    /// When one radix is a power of the other the digits pack or unpack
    /// positionally in a single pass; otherwise the digits feed a Horner
    /// evaluation carried out in the destination radix.
    pub fn to_radix<const NEW_BASE: u32>(&self) -> BigInt<NEW_BASE> {
        let src = Self::true_base();
        let dst = BigInt::<NEW_BASE>::true_base();

        if src == dst {
            return BigInt::from_bigits(self.bigits().to_vec(), self.is_negative());
        }
        if self.is_zero() {
            return BigInt::new();
        }

        // dst = src^k: pack k source digits into one
        let pack = int_log_of(dst, src) as usize;
        if pack != 0 {
            let mut bigits = Vec::with_capacity(self.size() / pack + 1);
            for chunk in self.bigits().chunks(pack) {
                let bigit = chunk.iter().rev().fold(0u64, |acc, &d| acc * src + d as u64);
                bigits.push(bigit as u32);
            }
            arithmetic::trim_magnitude(&mut bigits);
            return BigInt::from_bigits(bigits, self.is_negative());
        }

        // src = dst^k: split each source digit into k
        let unpack = int_log_of(src, dst);
        if unpack != 0 {
            let mut bigits = Vec::with_capacity(self.size() * unpack as usize);
            for &bigit in self.bigits() {
                let mut bigit = bigit as u64;
                for _ in 0..unpack {
                    bigits.push((bigit % dst) as u32);
                    bigit /= dst;
                }
            }
            arithmetic::trim_magnitude(&mut bigits);
            return BigInt::from_bigits(bigits, self.is_negative());
        }

        let mut result = BigInt::<NEW_BASE>::new();
        for &bigit in self.bigits().iter().rev() {
            arithmetic::multiplication::mul_assign_small(&mut result, src);
            arithmetic::addition::add_assign_small(&mut result, bigit as u64);
        }
        result.set_sign(self.is_negative());
        result
    }

    /// View of the value in the canonical binary radix, the working form
    /// of the bit-level algorithms
    pub(crate) fn to_binary(&self) -> BinaryBigInt {
        self.to_radix::<MAX_BASE>()
    }
}


#[cfg(test)]
mod test_int_log_of {
    use super::*;

    #[test]
    fn powers_of_two() {
        assert_eq!(int_log_of(1024, 2), 10);
        assert_eq!(int_log_of(BASE_ZERO_TRUE_VALUE, 2), 32);
        assert_eq!(int_log_of(BASE_ZERO_TRUE_VALUE, 1024), 0);
        assert_eq!(int_log_of(BASE_ZERO_TRUE_VALUE, 65536), 2);
    }

    #[test]
    fn powers_of_ten() {
        assert_eq!(int_log_of(1_000_000_000, 10), 9);
        assert_eq!(int_log_of(1_000_000_000, 1000), 3);
        assert_eq!(int_log_of(1_000_000_000, 100_000), 0);
    }

    #[test]
    fn non_powers() {
        assert_eq!(int_log_of(999, 10), 0);
        assert_eq!(int_log_of(10, 10), 1);
        assert_eq!(int_log_of(1, 10), 0);
        assert_eq!(int_log_of(7, 1), 0);
    }
}

#[cfg(test)]
mod test_digits_of {
    use super::*;

    #[test]
    fn zero_is_one_digit() {
        assert_eq!(digits_of(0, 10), vec![0]);
        assert_eq!(int_size(0, 10), 1);
    }

    #[test]
    fn little_endian_order() {
        assert_eq!(digits_of(864197532, 1000), vec![532, 197, 864]);
        assert_eq!(digits_of(864197532, BASE_ZERO_TRUE_VALUE), vec![864197532]);
        assert_eq!(int_size(u64::MAX, BASE_ZERO_TRUE_VALUE), 2);
    }
}
