#[test]
fn pow_positive_base() {
    let base = BigInt::<1_000_000_000>::from_bigits(vec![3], false);
    let exp = BigInt::from_bigits(vec![20], false);
    assert_eq!(pow(&base, &exp).bigits(), &[486784401, 3]);
}

#[test]
fn pow_odd_exponent_keeps_sign() {
    let base = BigInt::<1024>::from_bigits(vec![7], true);
    let exp = BigInt::from_bigits(vec![13], false);
    let result = pow(&base, &exp);
    assert_eq!(result.bigits(), &[231, 574, 240, 90]);
    assert!(result.is_negative());
}

#[test]
fn pow_even_exponent_is_positive() {
    let base = BigInt::<1024>::from_bigits(vec![3], true);
    let exp = BigInt::from_bigits(vec![4], false);
    let result = pow(&base, &exp);
    assert_eq!(result.bigits(), &[81]);
    assert!(!result.is_negative());
}

#[test]
fn powi_large_exponent() {
    let two = BigInt::<1_000_000_000>::from_bigits(vec![2], false);
    let result = powi(&two, 100);
    assert_eq!(result.bigits(), &[703205376, 229401496, 650600228, 1267]);
}

#[test]
fn log_floors() {
    // floor(log3(123456)) == 10
    let value = BigInt::<1_000_000_000>::from_bigits(vec![123456], false);
    let base = BigInt::from_bigits(vec![3], false);
    assert_eq!(log(&value, &base).bigits(), &[10]);
}

#[test]
fn log_of_one_is_zero() {
    let one = BigInt::<1024>::from_bigits(vec![1], false);
    let ten = BigInt::from_bigits(vec![10], false);
    assert!(log(&one, &ten).is_zero());
}

#[test]
fn log_at_exact_power() {
    let value = BigInt::<1024>::from_bigits(vec![59049 % 1024, 59049 / 1024], false);
    let base = BigInt::from_bigits(vec![3], false);
    assert_eq!(log(&value, &base).bigits(), &[10]);
}
