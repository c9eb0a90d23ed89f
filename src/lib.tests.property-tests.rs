use paste::paste;
use proptest::prelude::*;

macro_rules! radix_properties {
    ($($radix:literal),* $(,)?) => {$( paste! {
        mod [< radix_ $radix >] {
            use super::*;

            proptest! {
                #[test]
                fn parse_format_round_trip(n in any::<i128>()) {
                    let text = n.to_string();
                    let value: BigInt<$radix> = text.parse().unwrap();
                    prop_assert_eq!(value.to_string(), text);
                    prop_assert!(value.valid());
                }

                #[test]
                fn addition_matches_i128(a in any::<i64>(), b in any::<i64>()) {
                    let sum = BigInt::<$radix>::from(a) + BigInt::from(b);
                    prop_assert_eq!(sum.to_string(), (a as i128 + b as i128).to_string());
                    prop_assert!(sum.valid());
                }

                #[test]
                fn multiplication_matches_i128(a in any::<i64>(), b in any::<i64>()) {
                    let product = BigInt::<$radix>::from(a) * BigInt::from(b);
                    prop_assert_eq!(product.to_string(), (a as i128 * b as i128).to_string());
                    prop_assert!(product.valid());
                }

                #[test]
                fn division_matches_i128(a in any::<i64>(), b in any::<i64>()) {
                    prop_assume!(b != 0);
                    let (q, r) = BigInt::<$radix>::from(a)
                        .try_div_rem(&BigInt::from(b))
                        .unwrap();
                    prop_assert_eq!(q.to_string(), (a as i128 / b as i128).to_string());
                    prop_assert_eq!(r.to_string(), (a as i128 % b as i128).to_string());
                }

                #[test]
                fn additive_inverse_is_zero(a in any::<i64>()) {
                    let value = BigInt::<$radix>::from(a);
                    let negated = -&value;
                    prop_assert!((value + negated).is_zero());
                }

                #[test]
                fn ordering_matches_i64(a in any::<i64>(), b in any::<i64>()) {
                    let lhs = BigInt::<$radix>::from(a);
                    let rhs = BigInt::from(b);
                    prop_assert_eq!(lhs.cmp(&rhs), a.cmp(&b));
                    prop_assert_eq!(lhs == rhs, a == b);
                }

                #[test]
                fn shift_round_trip(a in any::<i64>(), k in 0i64..256) {
                    let value = BigInt::<$radix>::from(a);
                    prop_assert_eq!((&value << k) >> k, value);
                }

                #[test]
                fn binary_radix_round_trip(a in any::<i64>()) {
                    let value = BigInt::<$radix>::from(a);
                    let there_and_back = value.to_radix::<MAX_BASE>().to_radix::<$radix>();
                    prop_assert_eq!(there_and_back, value);
                }

                #[test]
                fn narrowing_round_trip(a in any::<i64>()) {
                    let value = BigInt::<$radix>::from(a);
                    prop_assert_eq!(value.to_i64(), Ok(a));
                }

                #[test]
                fn digit_sum_bounded_by_digit_count(a in any::<i64>()) {
                    let value = BigInt::<$radix>::from(a);
                    let digits = value.digits(2).unwrap();
                    prop_assert_eq!(digits, value.bits());
                    prop_assert!(value.digit_sum(2).unwrap() <= digits);
                }
            }
        }
    })*};
}

radix_properties!(0, 2, 999, 1000, 1024, 1000000000);

proptest! {
    #[test]
    fn gcd_divides_both(a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(a != 0 || b != 0);
        let x = BigInt::<1024>::from(a);
        let y = BigInt::<1024>::from(b);
        let g = x.gcd(&y);
        prop_assert!(!g.is_negative());
        prop_assert!(!g.is_zero());
        prop_assert!((&x % &g).is_zero());
        prop_assert!((&y % &g).is_zero());
    }

    #[test]
    fn sqrt_brackets_the_value(a in 2u32..) {
        let value: BigInt = BigInt::from(a);
        let root = value.sqrt().unwrap();
        prop_assert!(&root * &root <= value);
        let next = &root + 1;
        prop_assert!(&next * &next > value);
    }

    #[test]
    fn to_str_radix_inverts_from_str_radix(a in any::<i64>(), radix in 2u32..=36) {
        let value: BigInt = BigInt::from(a);
        let text = value.to_str_radix(radix).unwrap();
        let back: BigInt = Num::from_str_radix(&text, radix).unwrap();
        prop_assert_eq!(back, value);
    }

    #[test]
    fn floored_and_truncating_agree_for_positive(a in 0i64.., b in 1i64..) {
        let x = BigInt::<1000>::from(a);
        let y = BigInt::<1000>::from(b);
        prop_assert_eq!(num_integer::Integer::div_floor(&x, &y), &x / &y);
    }
}
