#[test]
fn mul_magnitudes_carries_between_rows() {
    // 864197532 * 7 in radix 1000
    let prod = mul_magnitudes(&[532, 197, 864], &[7], 1000);
    assert_eq!(prod, vec![724, 382, 49, 6]);
}

#[test]
fn mul_magnitudes_max_base() {
    let prod = mul_magnitudes(&[u32::MAX], &[u32::MAX], crate::radix::BASE_ZERO_TRUE_VALUE);
    // (2^32 - 1)^2 == 2^64 - 2^33 + 1
    assert_eq!(prod, vec![1, u32::MAX - 1]);
}

#[test]
fn mul_assign_opposite_signs() {
    // -123456 * 987654 in radix 1024
    let mut a = BigInt::<1024>::from_bigits(vec![576, 120], true);
    let b = BigInt::<1024>::from_bigits(vec![518, 964], false);
    mul_assign(&mut a, &b);
    assert_eq!(a.bigits(), &[384, 243, 571, 113]);
    assert!(a.is_negative());
}

#[test]
fn mul_assign_both_negative() {
    let mut a = BigInt::<1024>::from_bigits(vec![518, 964], true);
    let b = a.clone();
    mul_assign(&mut a, &b);
    assert_eq!(a.bigits(), &[36, 566, 479, 908]);
    assert!(!a.is_negative());
}

#[test]
fn mul_assign_by_zero_clears_sign() {
    let mut a = BigInt::<1000>::from_bigits(vec![532, 197, 864], true);
    let zero = BigInt::<1000>::new();
    mul_assign(&mut a, &zero);
    assert_eq!(a.bigits(), &[0]);
    assert!(!a.is_negative());
}

#[test]
fn mul_assign_by_negative_one_flips() {
    let mut a = BigInt::<1000>::from_bigits(vec![532, 197, 864], false);
    let minus_one = BigInt::<1000>::from_bigits(vec![1], true);
    mul_assign(&mut a, &minus_one);
    assert_eq!(a.bigits(), &[532, 197, 864]);
    assert!(a.is_negative());
}

#[test]
fn mul_assign_small_power_of_radix_prepends() {
    let mut a = BigInt::<1000>::from_bigits(vec![532, 197, 864], false);
    mul_assign_small(&mut a, 1_000_000);
    assert_eq!(a.bigits(), &[0, 0, 532, 197, 864]);
}

#[test]
fn mul_assign_small_above_radix() {
    // 999 * 1001 == 999999
    let mut a = BigInt::<1000>::from_bigits(vec![999], false);
    mul_assign_small(&mut a, 1001);
    assert_eq!(a.bigits(), &[999, 999]);
}

#[test]
fn mul_assign_i64_zero_result_not_negative() {
    let mut a = BigInt::<1000>::from_bigits(vec![7], false);
    mul_assign_i64(&mut a, 0);
    assert!(!a.is_negative());
    assert!(a.is_zero());

    let mut b = BigInt::<1000>::new();
    mul_assign_i64(&mut b, -5);
    assert!(!b.is_negative());
}
