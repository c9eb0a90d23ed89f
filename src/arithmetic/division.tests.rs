use crate::MAX_BASE;

#[test]
fn div_rem_small_magnitude_short_division() {
    // 864197532 / 7 == 123456790 rem 2
    let mut bigits = vec![532, 197, 864];
    let rem = div_rem_small_magnitude(&mut bigits, 7, 1000);
    assert_eq!(bigits, vec![790, 456, 123]);
    assert_eq!(rem, 2);
}

#[test]
fn div_rem_small_magnitude_divisor_equal_to_base() {
    let mut bigits = vec![532, 197, 864];
    let rem = div_rem_small_magnitude(&mut bigits, 1000, 1000);
    assert_eq!(bigits, vec![197, 864]);
    assert_eq!(rem, 532);
}

#[test]
fn div_rem_zero_divisor() {
    let num = BigInt::<1000>::from_bigits(vec![1], false);
    let den = BigInt::<1000>::new();
    assert_eq!(div_rem(&num, &den), Err(ArithmeticError::DivideByZero));
}

#[test]
fn div_rem_smaller_dividend() {
    let num = BigInt::<1000>::from_bigits(vec![7], true);
    let den = BigInt::<1000>::from_bigits(vec![0, 1], false);
    let (q, r) = div_rem(&num, &den).unwrap();
    assert!(q.is_zero());
    assert!(!q.is_negative());
    assert_eq!(r, num);
}

#[test]
fn div_rem_quotient_sign_is_xor() {
    // 987654 / -123456 == -8 rem 6 in radix 1024
    let num = BigInt::<1024>::from_bigits(vec![518, 964], false);
    let den = BigInt::<1024>::from_bigits(vec![576, 120], true);
    let (q, r) = div_rem(&num, &den).unwrap();
    assert_eq!(q.bigits(), &[8]);
    assert!(q.is_negative());
    assert_eq!(r.bigits(), &[6]);
    assert!(!r.is_negative());
}

#[test]
fn div_rem_remainder_follows_dividend() {
    let num = BigInt::<1024>::from_bigits(vec![518, 964], true);
    let den = BigInt::<1024>::from_bigits(vec![576, 120], false);
    let (q, r) = div_rem(&num, &den).unwrap();
    assert_eq!(q.bigits(), &[8]);
    assert!(q.is_negative());
    assert_eq!(r.bigits(), &[6]);
    assert!(r.is_negative());
}

#[test]
fn div_rem_multi_digit_binary_path() {
    // 121931812230 / 123456 == 987654 rem 6 in radix 1024
    let num = BigInt::<1024>::from_bigits(vec![390, 243, 571, 113], false);
    let den = BigInt::<1024>::from_bigits(vec![576, 120], false);
    let (q, r) = div_rem(&num, &den).unwrap();
    assert_eq!(q.bigits(), &[518, 964]);
    assert_eq!(r.bigits(), &[6]);
}

#[test]
fn div_rem_multi_digit_max_base() {
    let num = BigInt::<MAX_BASE>::from_bigits(
        vec![1312754386, 3279151342, 2397638646, 1],
        false,
    );
    let den = BigInt::<MAX_BASE>::from_bigits(vec![2129924785, 229956191], false);
    let (q, r) = div_rem(&num, &den).unwrap();
    assert_eq!(q.bigits(), &[445947164, 29]);
    assert_eq!(r.bigits(), &[4089606774, 100606098]);
}

#[test]
fn div_rem_non_power_of_two_radix() {
    // 123456789012345678901234567890 / 987654321987654321
    let num = BigInt::<1_000_000_000>::from_bigits(
        vec![234567890, 345678901, 456789012, 123],
        false,
    );
    let den = BigInt::<1_000_000_000>::from_bigits(vec![987654321, 987654321], true);
    let (q, r) = div_rem(&num, &den).unwrap();
    assert_eq!(q.bigits(), &[999998748, 124]);
    assert!(q.is_negative());
    assert_eq!(r.bigits(), &[777777782, 432099904]);
    assert!(!r.is_negative());
}

#[test]
fn div_rem_power_of_radix_splits_digits() {
    let num = BigInt::<1000>::from_bigits(vec![532, 197, 864], true);
    let den = BigInt::<1000>::from_bigits(vec![0, 0, 1], false);
    let (q, r) = div_rem(&num, &den).unwrap();
    assert_eq!(q.bigits(), &[864]);
    assert!(q.is_negative());
    // remainder keeps the low digits, not just drops them
    assert_eq!(r.bigits(), &[532, 197]);
    assert!(r.is_negative());
}

#[test]
fn div_rem_equal_operands() {
    let num = BigInt::<1000>::from_bigits(vec![532, 197, 864], true);
    let (q, r) = div_rem(&num, &num).unwrap();
    assert_eq!(q.bigits(), &[1]);
    assert!(!q.is_negative());
    assert!(r.is_zero());
}

#[test]
fn rem_assign_i64_parity_shortcut() {
    let mut odd = BigInt::<1000>::from_bigits(vec![3, 1], true);
    rem_assign_i64(&mut odd, 2);
    assert_eq!(odd.bigits(), &[1]);
    assert!(odd.is_negative());

    // odd radix: every digit's parity counts
    let mut even = BigInt::<999>::from_bigits(vec![1, 1], false);
    rem_assign_i64(&mut even, 2);
    assert!(even.is_zero());
}

#[test]
fn rem_assign_i64_divisor_sign_ignored() {
    let mut value = BigInt::<1000>::from_bigits(vec![7], false);
    rem_assign_i64(&mut value, -4);
    assert_eq!(value.bigits(), &[3]);
    assert!(!value.is_negative());
}

#[test]
#[should_panic(expected = "cannot divide by zero")]
fn div_assign_i64_zero_divisor_panics() {
    let mut value = BigInt::<1000>::from_bigits(vec![7], false);
    div_assign_i64(&mut value, 0);
}
