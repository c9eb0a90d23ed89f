//! Benchmarks for arithmetic operations

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bigradix::{BigInt, MAX_BASE};

criterion_main!(
    arithmetic,
    conversion,
);

criterion_group!(
    name = arithmetic;
    config = Criterion::default()
                       .sample_size(300);
    targets =
        addition,
        multiplication,
        division,
        number_theory,
);

criterion_group!(
    name = conversion;
    config = Criterion::default()
                       .measurement_time(Duration::from_secs(7));
    targets =
        text_round_trip,
        radix_change,
);

/// Random values of `digits` decimal digits, reproducible from the seed
fn make_random_values(count: usize, digits: usize, seed: u64) -> Vec<BigInt> {
    let mut rng = oorandom::Rand32::new(seed);
    (0..count)
        .map(|_| {
            let mut text = String::with_capacity(digits + 1);
            if rng.rand_u32() % 2 == 0 {
                text.push('-');
            }
            text.push(char::from(b'1' + (rng.rand_u32() % 9) as u8));
            for _ in 1..digits {
                text.push(char::from(b'0' + (rng.rand_u32() % 10) as u8));
            }
            text.parse().unwrap()
        })
        .collect()
}

fn pairs(values: &[BigInt]) -> impl Iterator<Item = (&BigInt, &BigInt)> + Clone {
    let x_iter = values.iter().step_by(2);
    let y_iter = values.iter().skip(1).step_by(2);
    std::iter::zip(x_iter, y_iter)
}

fn addition(c: &mut Criterion) {
    for digits in [30, 300, 3000] {
        let values = make_random_values(100, digits, 7001);
        c.bench_function(&format!("addition-{}-digits", digits), |b| {
            b.iter_batched(
                || pairs(&values),
                |ps| {
                    for (x, y) in ps {
                        black_box(x + y);
                    }
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }
}

fn multiplication(c: &mut Criterion) {
    for digits in [30, 300] {
        let values = make_random_values(40, digits, 7003);
        c.bench_function(&format!("multiplication-{}-digits", digits), |b| {
            b.iter_batched(
                || pairs(&values),
                |ps| {
                    for (x, y) in ps {
                        black_box(x * y);
                    }
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }
}

fn division(c: &mut Criterion) {
    let dividends = make_random_values(20, 120, 7005);
    let divisors = make_random_values(20, 40, 7007);

    c.bench_function("division-120-by-40-digits", |b| {
        b.iter_batched(
            || std::iter::zip(dividends.iter(), divisors.iter()),
            |ps| {
                for (x, y) in ps {
                    black_box(x.try_div_rem(y).unwrap());
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });

    let binary: Vec<BigInt<MAX_BASE>> = dividends.iter().map(|x| x.to_radix()).collect();
    let binary_divisors: Vec<BigInt<MAX_BASE>> = divisors.iter().map(|x| x.to_radix()).collect();
    c.bench_function("division-120-by-40-digits-binary-radix", |b| {
        b.iter_batched(
            || std::iter::zip(binary.iter(), binary_divisors.iter()),
            |ps| {
                for (x, y) in ps {
                    black_box(x.try_div_rem(y).unwrap());
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn number_theory(c: &mut Criterion) {
    let values = make_random_values(20, 60, 7011);

    c.bench_function("gcd-60-digits", |b| {
        b.iter_batched(
            || pairs(&values),
            |ps| {
                for (x, y) in ps {
                    black_box(x.gcd(y));
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });

    c.bench_function("sqrt-60-digits", |b| {
        b.iter_batched(
            || values.iter(),
            |vals| {
                for x in vals {
                    black_box(x.abs().sqrt().unwrap());
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });

    c.bench_function("factorial-500", |b| {
        let n: BigInt = BigInt::from(500);
        b.iter(|| black_box(n.factorial().unwrap()))
    });
}

fn text_round_trip(c: &mut Criterion) {
    let values = make_random_values(50, 300, 7013);
    let texts: Vec<String> = values.iter().map(|v| v.to_string()).collect();

    c.bench_function("format-300-digits", |b| {
        b.iter_batched(
            || values.iter(),
            |vals| {
                for x in vals {
                    black_box(x.to_string());
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });

    c.bench_function("parse-300-digits", |b| {
        b.iter_batched(
            || texts.iter(),
            |ts| {
                for t in ts {
                    black_box(t.parse::<BigInt>().unwrap());
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn radix_change(c: &mut Criterion) {
    let values = make_random_values(50, 300, 7017);

    c.bench_function("to-binary-radix-300-digits", |b| {
        b.iter_batched(
            || values.iter(),
            |vals| {
                for x in vals {
                    black_box(x.to_radix::<MAX_BASE>());
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });

    let binary: Vec<BigInt<MAX_BASE>> = values.iter().map(|x| x.to_radix()).collect();
    c.bench_function("from-binary-radix-300-digits", |b| {
        b.iter_batched(
            || binary.iter(),
            |vals| {
                for x in vals {
                    black_box(x.to_radix::<1_000_000_000>());
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });
}
