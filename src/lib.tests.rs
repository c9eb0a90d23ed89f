use crate::radix::BASE_ZERO_TRUE_VALUE;

fn parse<const B: u32>(s: &str) -> BigInt<B> {
    s.parse().unwrap()
}

mod arithmetic_scenarios {
    use super::*;

    #[test]
    fn mixed_sign_walkthrough_radix_1024() {
        let a: BigInt<1024> = parse("-123456");
        let b: BigInt<1024> = parse("987654");

        let sum = &a + &b;
        assert_eq!(sum.bigits(), &[966, 843]);
        assert_eq!(sum.to_string(), "864198");

        let difference = &a - &b;
        assert_eq!(difference.to_string(), "-1111110");

        let product = &a * &b;
        assert_eq!(product.to_string(), "-121931812224");

        let quotient = &b / &a;
        assert_eq!(quotient.to_string(), "-8");

        let remainder = &b % &a;
        assert_eq!(remainder.to_string(), "6");

        // truncating division reassembles the dividend
        assert_eq!(&quotient * &a + &remainder, b);
    }

    #[test]
    fn remainder_sign_follows_dividend() {
        let a: BigInt = parse("-987654");
        let b: BigInt = parse("123456");
        assert_eq!((&a % &b).to_string(), "-6");
        assert_eq!((&a / &b).to_string(), "-8");
        assert_eq!((&b % &a).to_string(), "123456");
        assert_eq!((&b / &a).to_string(), "0");
    }

    #[test]
    fn large_decimal_division() {
        let num: BigInt = parse("123456789012345678901234567890");
        let den: BigInt = parse("987654321987654321");
        let (q, r) = num.try_div_rem(&den).unwrap();
        assert_eq!(q.to_string(), "124999998748");
        assert_eq!(r.to_string(), "432099904777777782");
    }

    #[test]
    fn division_by_zero_is_an_error() {
        let a: BigInt = parse("123456");
        assert_eq!(
            a.try_div_rem(&BigInt::new()),
            Err(ArithmeticError::DivideByZero),
        );
    }

    #[test]
    fn mixed_i64_operands() {
        let a: BigInt = parse("123456789012345678901234567890");
        assert_eq!((&a + 1).to_string(), "123456789012345678901234567891");
        assert_eq!((&a * -2).to_string(), "-246913578024691357802469135780");
        assert_eq!((1 - &a).to_string(), "-123456789012345678901234567889");
        assert_eq!((&a % 97).to_string(), (&a % parse::<DEFAULT_BASE>("97")).to_string());

        let mut running = a.clone();
        running += 10;
        running -= 10;
        running *= 3;
        running /= 3;
        assert_eq!(running, a);
    }

    #[test]
    fn negation_and_abs() {
        let a: BigInt = parse("-123456");
        assert_eq!((-&a).to_string(), "123456");
        assert_eq!(a.abs().to_string(), "123456");
        assert_eq!(-BigInt::<1024>::new(), BigInt::new());
    }

    #[test]
    fn sum_and_product_adaptors() {
        let values: Vec<BigInt> = (1..=10i64).map(BigInt::from).collect();
        let total: BigInt = values.iter().sum();
        assert_eq!(total, 55);
        let product: BigInt = values.iter().product();
        assert_eq!(product, 3628800);
    }

    #[test]
    fn fibonacci_hits_200_digits_at_index_954() {
        let mut a: BigInt = BigInt::from(1);
        let mut b: BigInt = BigInt::from(1);
        let mut index = 2u32;
        while b.digits(10).unwrap() < 200 {
            let next = &a + &b;
            a = b;
            b = next;
            index += 1;
        }
        assert_eq!(index, 954);
        let text = b.to_string();
        assert_eq!(text.len(), 200);
        assert!(text.starts_with("10585802725247397713"));
        assert!(text.ends_with("68316457818468660472"));
    }
}

mod number_theory {
    use super::*;

    #[test]
    fn gcd_lcm() {
        let a: BigInt = parse("123456789012345678901234567890");
        let b: BigInt = parse("-987654321987654321");
        assert_eq!(a.gcd(&b).to_string(), "819");
        assert_eq!(
            a.lcm(&b).to_string(),
            "148879891632187012499769701249828090233365510",
        );
        assert!(!a.lcm(&b).is_negative());
    }

    #[test]
    fn pow_and_log_are_inverses() {
        let three: BigInt = BigInt::from(3);
        let hundred: BigInt = BigInt::from(100);
        let p = three.pow(&hundred);
        assert_eq!(
            p.to_string(),
            "515377520732011331036461129765621272702107522001",
        );
        assert_eq!(p.log(&three).unwrap(), 100);
        assert_eq!((&p - 1).log(&three).unwrap(), 99);
    }

    #[test]
    fn pow_edge_exponents() {
        let a: BigInt = parse("123456");
        assert_eq!(a.powi(0), 1);
        assert_eq!(BigInt::<1024>::new().powi(0), 1);
        assert_eq!(a.powi(-3), 0);
        assert_eq!(a.pow(&BigInt::from(1)), a);
    }

    #[test]
    fn log_error_cases() {
        let a: BigInt = parse("123456");
        let one = BigInt::from(1);
        assert_eq!(a.log(&one), Err(ArithmeticError::InvalidLogBase));
        assert_eq!(
            (-&a).log(&BigInt::from(2)),
            Err(ArithmeticError::NonPositiveValue),
        );
        assert_eq!(
            BigInt::<DEFAULT_BASE>::new().log(&BigInt::from(2)),
            Err(ArithmeticError::NonPositiveValue),
        );
    }

    #[test]
    fn sqrt_of_large_square() {
        let n: BigInt = parse("123456789012345678901234567890");
        assert_eq!(n.sqrt().unwrap(), 351364182882014i64);

        let exact: BigInt = BigInt::from(351364182882014i64);
        assert_eq!((&exact * &exact).sqrt().unwrap(), exact);
        assert_eq!(
            parse::<DEFAULT_BASE>("-4").sqrt(),
            Err(ArithmeticError::NegativeRadicand),
        );
    }

    #[test]
    fn factorial_signed() {
        assert_eq!(
            BigInt::<1024>::from(18).factorial().unwrap().to_string(),
            "6402373705728000",
        );
        assert_eq!(
            BigInt::<DEFAULT_BASE>::from(-1).factorial(),
            Err(ArithmeticError::NegativeOperand),
        );
    }
}

mod digit_statistics {
    use super::*;

    #[test]
    fn counting_in_several_radices() {
        let n: BigInt = parse("123456789012345678901234567890");
        assert_eq!(n.bits(), 97);
        assert_eq!(n.digits(10), Ok(30));
        assert_eq!(n.digits(16), Ok(25));
        assert_eq!(n.digit_sum(10), Ok(135));
        assert_eq!(n.digit_sum(16), Ok(210));
    }

    #[test]
    fn radix_zero_sentinel_means_two_to_the_32() {
        let n: BigInt<MAX_BASE> = parse("123456789012345678901234567890");
        assert_eq!(n.digits(0), Ok(4));
        assert_eq!(n.digit_sum(0), Ok(6989544375));
        assert_eq!(n.size(), 4);
    }

    #[test]
    fn sign_never_affects_digit_counts() {
        let n: BigInt = parse("-123456789012345678901234567890");
        assert_eq!(n.digits(10), Ok(30));
        assert_eq!(n.digit_sum(10), Ok(135));
        assert_eq!(n.bits(), 97);
    }

    #[test]
    fn zero_counts_one_digit() {
        let zero: BigInt = BigInt::new();
        assert_eq!(zero.bits(), 1);
        assert_eq!(zero.digits(10), Ok(1));
        assert_eq!(zero.digit_sum(10), Ok(0));
    }

    #[test]
    fn radix_above_internal_base_is_rejected() {
        let n: BigInt<1000> = parse("123456");
        assert_eq!(n.digits(1001), Err(ArithmeticError::InvalidBase(1001)));
        assert_eq!(n.digit_sum(0), Err(ArithmeticError::InvalidBase(0)));
        assert_eq!(n.digits(1), Err(ArithmeticError::InvalidBase(1)));
        assert_eq!(n.digits(1000), Ok(2));
    }
}

mod radix_conversion {
    use super::*;

    #[test]
    fn packing_and_unpacking_powers() {
        let decimal: BigInt = parse("123456789012345678901234567890");
        let packed = decimal.to_radix::<MAX_BASE>();
        assert_eq!(packed.size(), 4);
        assert_eq!(packed.to_string(), decimal.to_string());

        let unpacked = packed.to_radix::<1024>();
        assert_eq!(unpacked.to_string(), decimal.to_string());
        assert_eq!(unpacked.to_radix::<MAX_BASE>(), packed);
    }

    #[test]
    fn horner_between_unrelated_radices() {
        let a: BigInt<999> = parse("-123456789012345678901234567890");
        let b = a.to_radix::<1_000_000_000>();
        assert_eq!(b.to_string(), "-123456789012345678901234567890");
        assert_eq!(b.to_radix::<999>(), a);
    }

    #[test]
    fn conversion_preserves_zero_and_sign() {
        let zero = BigInt::<1000>::new();
        assert!(zero.to_radix::<1024>().is_zero());

        let neg: BigInt<1000> = parse("-987654");
        assert!(neg.to_radix::<1024>().is_negative());
    }

    #[test]
    fn radix_two_round_trip() {
        let n: BigInt = parse("987654321987654321");
        let binary = n.to_radix::<2>();
        assert_eq!(binary.size() as u64, n.bits());
        assert_eq!(binary.to_radix::<DEFAULT_BASE>(), n);
    }
}

mod bit_operations {
    use super::*;

    #[test]
    fn shifts_scale_by_powers_of_two() {
        let n: BigInt = parse("987654");
        assert_eq!((&n << 10i64).to_string(), "1011357696");
        assert_eq!((&n >> 5i64).to_string(), "30864");
        assert_eq!((&n << -5i64).to_string(), "30864");
        assert_eq!(((&n << 100i64) >> 100i64), n);

        let neg: BigInt = parse("-987654");
        assert_eq!((&neg >> 5i64).to_string(), "-30864");
    }

    #[test]
    fn shift_by_bigint_distance() {
        let n: BigInt = parse("987654");
        let ten = BigInt::from(10);
        assert_eq!(n.try_shl(&ten).unwrap().to_string(), "1011357696");
        assert_eq!(n.try_shr(&ten).unwrap().to_string(), "964");
        let huge: BigInt = parse("99999999999999999999999999");
        assert_eq!(n.try_shl(&huge), Err(ArithmeticError::Overflow));
    }

    #[test]
    fn bitwise_magnitudes_and_sign_table() {
        let a: BigInt = parse("987654");
        let b: BigInt = parse("-123456");

        assert_eq!((&a & &b).to_string(), "66048");
        assert_eq!((&a | &b).to_string(), "-1045062");
        assert_eq!((&a ^ &b).to_string(), "-979014");
        assert_eq!((-&a & &b).to_string(), "-66048");
        assert_eq!((-&a ^ &b).to_string(), "979014");
    }

    #[test]
    fn xor_with_self_clears() {
        let a: BigInt = parse("-123456789012345678901234567890");
        assert!((&a ^ &a).is_zero());
        assert_eq!(&a & &a, a);
        assert_eq!(&a | &a, a);
    }
}

mod structure {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_radix_is_configurable_constant() {
        assert_eq!(BigInt::<DEFAULT_BASE>::true_base(), DEFAULT_BASE as u64);
        assert_eq!(BigInt::<MAX_BASE>::true_base(), BASE_ZERO_TRUE_VALUE);
        assert_eq!(
            BigInt::<MAX_DECIMAL_BASE>::true_base(),
            1_000_000_000,
        );
    }

    #[test]
    fn canonical_zero() {
        let zero: BigInt = BigInt::default();
        assert_eq!(zero.bigits(), &[0]);
        assert_eq!(zero.size(), 1);
        assert!(!zero.is_negative());
        assert_eq!(zero, parse::<DEFAULT_BASE>("-0"));
    }

    #[test]
    fn hashing_matches_equality() {
        let mut seen = HashSet::new();
        seen.insert(parse::<DEFAULT_BASE>("123456"));
        assert!(seen.contains(&parse::<DEFAULT_BASE>("+123456")));
        assert!(!seen.contains(&parse::<DEFAULT_BASE>("-123456")));
    }

    #[test]
    fn set_sign_on_zero_is_ignored() {
        let mut zero: BigInt = BigInt::new();
        zero.set_sign(true);
        assert!(!zero.is_negative());
    }

    #[test]
    fn debug_shows_radix_and_digits() {
        let n: BigInt<1024> = parse("-987654");
        assert_eq!(format!("{:?}", n), "BigInt<1024>(-[518, 964])");
    }
}
