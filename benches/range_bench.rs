use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigInt;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

use bounded_int_calc::{felt::Modulus, interval::Interval, ops::Op, range_ops, render::generate};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_ops");
    let pairs: &[(i64, i64, i64, i64)] = &[
        (0, 12288, 0, 12288),
        (-12288, 12288, -12288, 12288),
        (128, 255, 3, 8),
        (0, i64::MAX, 1, i64::MAX),
    ];
    for op in Op::ALL {
        for &(a_lo, a_hi, b_lo, b_hi) in pairs {
            let a = Interval::new(a_lo, a_hi).unwrap();
            let b = Interval::new(b_lo, b_hi).unwrap();
            group.bench_with_input(BenchmarkId::new(op.name(), format!("{a}{b}")), &(a, b), |bencher, (a, b)| {
                bencher.iter(|| black_box(range_ops::eval(op, black_box(a), black_box(b))));
            });
        }
    }

    let mut rng = rand::rngs::StdRng::from_seed([1; 32]);
    let inputs: Vec<Interval> = (0..256)
        .map(|_| {
            let lo = BigInt::from(rng.random::<i128>()) << 100u32;
            let hi = &lo + BigInt::from(rng.random::<u64>());
            Interval::new(lo, hi).unwrap()
        })
        .collect();
    let modulus = Modulus::felt252();
    group.bench_function("generate-mul-random-wide", |bencher| {
        bencher.iter(||
            for i in 0..inputs.len() {
                black_box(generate(Op::Mul, &inputs[i], &inputs[inputs.len() - 1 - i], None, &modulus).unwrap());
            }
        );
    });
    group.finish();
}

criterion_group!(name = benches; config = Criterion::default(); targets = criterion_benchmark);
criterion_main!(benches);
