use crate::MAX_BASE;

#[test]
fn add_magnitudes_ripples_carry() {
    let mut lhs = vec![9, 9, 9];
    add_magnitudes(&mut lhs, &[1], 10);
    assert_eq!(lhs, vec![0, 0, 0, 1]);
}

#[test]
fn add_magnitudes_max_base() {
    let mut lhs = vec![u32::MAX, u32::MAX];
    add_magnitudes(&mut lhs, &[1], radix::BASE_ZERO_TRUE_VALUE);
    assert_eq!(lhs, vec![0, 0, 1]);
}

#[test]
fn sub_magnitudes_borrows() {
    let mut lhs = vec![0, 0, 1];
    let flipped = sub_magnitudes(&mut lhs, &[1], 10);
    assert!(!flipped);
    assert_eq!(lhs, vec![9, 9]);
}

#[test]
fn sub_magnitudes_flips_when_rhs_larger() {
    let mut lhs = vec![3];
    let flipped = sub_magnitudes(&mut lhs, &[5, 1], 10);
    assert!(flipped);
    assert_eq!(lhs, vec![2, 1]);
}

#[test]
fn add_small_magnitude_extends() {
    let mut bigits = vec![999_999_999];
    add_small_magnitude(&mut bigits, 1, 1_000_000_000);
    assert_eq!(bigits, vec![0, 1]);

    let mut bigits = vec![0];
    add_small_magnitude(&mut bigits, u64::MAX, 1_000_000_000);
    assert_eq!(bigits, vec![709551615, 446744073, 18]);
}

#[test]
fn add_assign_opposite_signs() {
    // -123456 + 987654 in radix 1024
    let mut a = BigInt::<1024>::from_bigits(vec![576, 120], true);
    let b = BigInt::<1024>::from_bigits(vec![518, 964], false);
    add_assign(&mut a, &b);
    assert_eq!(a.bigits(), &[966, 843]);
    assert!(!a.is_negative());
}

#[test]
fn add_assign_same_sign_stays_negative() {
    let mut a = BigInt::<1024>::from_bigits(vec![576, 120], true);
    let b = a.clone();
    add_assign(&mut a, &b);
    assert_eq!(a.bigits(), &[128, 241]);
    assert!(a.is_negative());
}

#[test]
fn sub_assign_opposite_signs_adds() {
    // -123456 - 987654 == -1111110
    let mut a = BigInt::<1024>::from_bigits(vec![576, 120], true);
    let b = BigInt::<1024>::from_bigits(vec![518, 964], false);
    sub_assign(&mut a, &b);
    assert_eq!(a.bigits(), &[70, 61, 1]);
    assert!(a.is_negative());
}

#[test]
fn sub_assign_crossing_zero_flips_sign() {
    let mut a = BigInt::<10>::from_bigits(vec![3], false);
    let b = BigInt::<10>::from_bigits(vec![5, 1], false);
    sub_assign(&mut a, &b);
    assert_eq!(a.bigits(), &[2, 1]);
    assert!(a.is_negative());
}

#[test]
fn sub_assign_self_is_canonical_zero() {
    let mut a = BigInt::<1024>::from_bigits(vec![576, 120], true);
    let b = a.clone();
    sub_assign(&mut a, &b);
    assert_eq!(a.bigits(), &[0]);
    assert!(!a.is_negative());
}

#[test]
fn zero_plus_negative_keeps_sign() {
    let mut zero = BigInt::<1000>::new();
    add_assign_i64(&mut zero, -42);
    assert_eq!(zero.bigits(), &[42]);
    assert!(zero.is_negative());
}

#[test]
fn zero_minus_positive_negates() {
    let mut zero = BigInt::<1000>::new();
    sub_assign_i64(&mut zero, 123_456);
    assert_eq!(zero.bigits(), &[456, 123]);
    assert!(zero.is_negative());
}

#[test]
fn sub_assign_i64_min_operand() {
    let mut value = BigInt::<MAX_BASE>::new();
    sub_assign_i64(&mut value, i64::MIN);
    assert_eq!(value.bigits(), &[0, 2_147_483_648]);
    assert!(!value.is_negative());
}
