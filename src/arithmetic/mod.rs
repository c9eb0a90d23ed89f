//! Sign-magnitude arithmetic over little-endian digit vectors
//!
//! The algorithms here work on raw digit vectors plus an explicit
//! per-digit modulus, leaving sign handling to thin wrappers on
//! `BigInt`. Power-of-two radices get bit-level fast paths; any other
//! radix reaches those algorithms through a round trip over the
//! canonical binary radix.

use std::cmp::Ordering;

use crate::{radix, BigInt};

pub(crate) mod addition;
pub(crate) mod bitwise;
pub(crate) mod division;
pub(crate) mod euclid;
pub(crate) mod factorial;
pub(crate) mod multiplication;
pub(crate) mod pow;
pub(crate) mod shift;
pub(crate) mod sqrt;

/// Drops leading zero digits, never below one digit
pub(crate) fn trim_magnitude(bigits: &mut Vec<u32>) {
    while bigits.len() > 1 && bigits[bigits.len() - 1] == 0 {
        bigits.pop();
    }
}

/// Compares digit magnitudes, sign ignored: longer wins, then the first
/// unequal digit from the top. `ascending = false` reverses the result,
/// folding the both-negative comparison into the same walk.
pub(crate) fn cmp_magnitude(lhs: &[u32], rhs: &[u32], ascending: bool) -> Ordering {
    let ord = match lhs.len().cmp(&rhs.len()) {
        Ordering::Equal => lhs
            .iter()
            .rev()
            .zip(rhs.iter().rev())
            .map(|(a, b)| a.cmp(b))
            .find(|&ord| ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal),
        unequal => unequal,
    };
    if ascending {
        ord
    } else {
        ord.reverse()
    }
}

/// Compares a `BigInt` against a native integer without building one
pub(crate) fn cmp_small<const BASE: u32>(value: &BigInt<BASE>, other: i64) -> Ordering {
    match (value.is_negative(), other < 0) {
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        (negative, _) => {
            let tb = BigInt::<BASE>::true_base();
            let digits = radix::digits_of(other.unsigned_abs(), tb);
            cmp_magnitude(value.bigits(), &digits, !negative)
        }
    }
}


#[cfg(test)]
mod test_cmp_magnitude {
    use super::*;

    #[test]
    fn length_decides_first() {
        assert_eq!(cmp_magnitude(&[0, 0, 1], &[999, 999], true), Ordering::Greater);
        assert_eq!(cmp_magnitude(&[999, 999], &[0, 0, 1], true), Ordering::Less);
    }

    #[test]
    fn top_digit_decides_ties() {
        assert_eq!(cmp_magnitude(&[5, 7], &[9, 7], true), Ordering::Less);
        assert_eq!(cmp_magnitude(&[5, 7], &[5, 7], true), Ordering::Equal);
    }

    #[test]
    fn descending_reverses() {
        assert_eq!(cmp_magnitude(&[5, 7], &[9, 7], false), Ordering::Greater);
        assert_eq!(cmp_magnitude(&[5, 7], &[5, 7], false), Ordering::Equal);
    }
}
