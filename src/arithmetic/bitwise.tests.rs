fn operands_1024(a_negative: bool, b_negative: bool) -> (BigInt<1024>, BigInt<1024>) {
    // |a| == 987654, |b| == 123456
    (
        BigInt::from_bigits(vec![518, 964], a_negative),
        BigInt::from_bigits(vec![576, 120], b_negative),
    )
}

#[test]
fn and_truncates_to_shorter() {
    let (mut a, b) = operands_1024(false, false);
    bitwise_assign(&mut a, &b, BitwiseOp::And);
    assert_eq!(a.bigits(), &[512, 64]);
    assert!(!a.is_negative());
}

#[test]
fn and_negative_only_when_both_are() {
    let (mut a, b) = operands_1024(true, false);
    bitwise_assign(&mut a, &b, BitwiseOp::And);
    assert!(!a.is_negative());

    let (mut a, b) = operands_1024(true, true);
    bitwise_assign(&mut a, &b, BitwiseOp::And);
    assert_eq!(a.bigits(), &[512, 64]);
    assert!(a.is_negative());
}

#[test]
fn or_extends_to_longer() {
    let (mut a, b) = operands_1024(false, true);
    bitwise_assign(&mut a, &b, BitwiseOp::Or);
    assert_eq!(a.bigits(), &[582, 1020]);
    assert!(a.is_negative());
}

#[test]
fn xor_negative_when_exactly_one_is() {
    let (mut a, b) = operands_1024(true, false);
    bitwise_assign(&mut a, &b, BitwiseOp::Xor);
    assert_eq!(a.bigits(), &[70, 956]);
    assert!(a.is_negative());

    let (mut a, b) = operands_1024(true, true);
    bitwise_assign(&mut a, &b, BitwiseOp::Xor);
    assert!(!a.is_negative());
}

#[test]
fn xor_with_self_is_canonical_zero() {
    let (mut a, _) = operands_1024(true, false);
    let copy = a.clone();
    bitwise_assign(&mut a, &copy, BitwiseOp::Xor);
    assert_eq!(a.bigits(), &[0]);
    assert!(!a.is_negative());
}

#[test]
fn non_power_of_two_radix_uses_binary_view() {
    let mut a = BigInt::<1000>::from_bigits(vec![654, 987], false);
    let b = BigInt::<1000>::from_bigits(vec![456, 123], false);
    bitwise_assign(&mut a, &b, BitwiseOp::And);
    // 987654 & 123456 == 66048
    assert_eq!(a.bigits(), &[48, 66]);
}

#[test]
fn not_flips_digits_and_sign() {
    let mut a = BigInt::<1024>::from_bigits(vec![518, 964], false);
    not_assign(&mut a);
    assert_eq!(a.bigits(), &[505, 59]);
    assert!(a.is_negative());

    not_assign(&mut a);
    assert_eq!(a.bigits(), &[518, 964]);
    assert!(!a.is_negative());
}

#[test]
fn not_of_zero_is_digit_mask() {
    let mut zero = BigInt::<1024>::new();
    not_assign(&mut zero);
    assert_eq!(zero.bigits(), &[1023]);
    assert!(zero.is_negative());
}
