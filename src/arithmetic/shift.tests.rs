use crate::MAX_BASE;

#[test]
fn shl_whole_digits_prepends() {
    let mut value = BigInt::<1024>::from_bigits(vec![518, 964], false);
    shl_assign(&mut value, 10);
    assert_eq!(value.bigits(), &[0, 518, 964]);
}

#[test]
fn shl_sub_digit_carries() {
    // 987654 << 7 in radix 1024
    let mut value = BigInt::<1024>::from_bigits(vec![518, 964], false);
    shl_assign(&mut value, 7);
    assert_eq!(value.bigits(), &[768, 576, 120]);
}

#[test]
fn shr_sub_digit() {
    let mut value = BigInt::<1024>::from_bigits(vec![518, 964], true);
    shr_assign(&mut value, 5);
    assert_eq!(value.bigits(), &[144, 30]);
    assert!(value.is_negative());
}

#[test]
fn shr_past_width_is_zero() {
    let mut value = BigInt::<1024>::from_bigits(vec![518, 964], true);
    shr_assign(&mut value, 64);
    assert!(value.is_zero());
    assert!(!value.is_negative());
}

#[test]
fn negative_count_reverses_direction() {
    let mut value = BigInt::<1024>::from_bigits(vec![518, 964], false);
    shl_assign(&mut value, -5);
    assert_eq!(value.bigits(), &[144, 30]);

    let mut value = BigInt::<1024>::from_bigits(vec![144, 30], false);
    shr_assign(&mut value, -5);
    // 30864 << 5 == 987648
    assert_eq!(value.bigits(), &[512, 964]);
}

#[test]
fn non_power_of_two_radix_round_trips_through_binary() {
    let mut value = BigInt::<1000>::from_bigits(vec![654, 987], false);
    shl_assign(&mut value, 3);
    assert_eq!(value.bigits(), &[232, 901, 7]);

    let mut value = BigInt::<1000>::from_bigits(vec![654, 987], false);
    shr_assign(&mut value, 7);
    assert_eq!(value.bigits(), &[716, 7]);
}

#[test]
fn max_base_shift() {
    let mut value = BigInt::<MAX_BASE>::from_bigits(vec![0xDEAD_BEEF], false);
    shl_assign(&mut value, 13);
    assert_eq!(value.bigits(), &[3084771328, 7125]);
    shr_assign(&mut value, 13);
    assert_eq!(value.bigits(), &[0xDEAD_BEEF]);
}

#[test]
fn shift_of_zero_stays_canonical() {
    let mut zero = BigInt::<1024>::new();
    shl_assign(&mut zero, 100);
    assert_eq!(zero.bigits(), &[0]);
    shr_assign(&mut zero, 100);
    assert_eq!(zero.bigits(), &[0]);
}
