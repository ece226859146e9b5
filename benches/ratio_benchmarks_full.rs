//! Benchmarks comparing Ratio<T> performance across every stored integer width
//!
//! Run with: cargo bench --bench ratio_benchmarks_full
//!
//! Each width is measured against num-rational over the same primitive (which
//! reduces but wraps or panics on overflow) and against BigRational (which never
//! overflows but allocates).

use checked_ratio::{gcd, Ratio, RatioInteger};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigInt;
use num_rational::{BigRational, Ratio as NumRatio};

/// Macro to generate complete benchmark suite for a given integer type
macro_rules! generate_ratio_benchmarks {
    ($mod_name:ident, $int:ty, $size_name:expr) => {
        mod $mod_name {
            use super::*;

            type TestInt = $int;
            type TestRatio = Ratio<$int>;
            type NativeRational = NumRatio<$int>;

            /// Operand pairs kept small enough that every operation fits i8.
            fn operands() -> Vec<(&'static str, (TestInt, TestInt), (TestInt, TestInt))> {
                vec![
                    ("same_denom", (1, 6), (2, 6)),
                    ("diff_denom", (1, 2), (1, 3)),
                    ("mixed_sign", (-5, 7), (3, 8)),
                ]
            }

            // ====================================================================
            // CONSTRUCTION
            // ====================================================================

            /// Benchmark construction with reduction
            pub fn bench_new(c: &mut Criterion) {
                let bench_name = format!("{}/new", $size_name);
                let mut group = c.benchmark_group(&bench_name);

                group.bench_function("Ratio", |b| {
                    b.iter(|| {
                        let r = TestRatio::new(black_box(48), black_box(-36));
                        black_box(r)
                    })
                });

                group.bench_function("num-rational", |b| {
                    b.iter(|| {
                        let r = NativeRational::new(black_box(48), black_box(-36));
                        black_box(r)
                    })
                });

                group.bench_function("BigRational", |b| {
                    b.iter(|| {
                        let r = BigRational::new(
                            BigInt::from(black_box(48)),
                            BigInt::from(black_box(-36)),
                        );
                        black_box(r)
                    })
                });

                group.finish();
            }

            /// Benchmark continued-fraction conversion from f64
            pub fn bench_from_f64(c: &mut Criterion) {
                let bench_name = format!("{}/from_f64", $size_name);
                let mut group = c.benchmark_group(&bench_name);

                let test_cases = vec![("half", 0.5), ("third", 1.0 / 3.0), ("pi", std::f64::consts::PI)];

                for (name, value) in test_cases {
                    group.bench_with_input(BenchmarkId::new("epsilon", name), &value, |b, &val| {
                        b.iter(|| black_box(TestRatio::from_f64(black_box(val))))
                    });

                    group.bench_with_input(
                        BenchmarkId::new("max_denominator", name),
                        &value,
                        |b, &val| {
                            b.iter(|| {
                                black_box(TestRatio::from_f64_with_max_denominator(
                                    black_box(val),
                                    black_box(100),
                                ))
                            })
                        },
                    );

                    group.bench_with_input(BenchmarkId::new("BigRational", name), &value, |b, &val| {
                        b.iter(|| black_box(BigRational::from_float(black_box(val))))
                    });
                }

                group.finish();
            }

            // ====================================================================
            // ARITHMETIC
            // ====================================================================

            /// Benchmark the four checked operations against both oracles
            pub fn bench_arithmetic(c: &mut Criterion) {
                let bench_name = format!("{}/arithmetic", $size_name);
                let mut group = c.benchmark_group(&bench_name);

                for (name, (n1, d1), (n2, d2)) in operands() {
                    let r1 = TestRatio::new(n1, d1).unwrap();
                    let r2 = TestRatio::new(n2, d2).unwrap();
                    let native = (NativeRational::new(n1, d1), NativeRational::new(n2, d2));

                    group.bench_with_input(BenchmarkId::new("add/Ratio", name), &(r1, r2), |b, (r1, r2)| {
                        b.iter(|| black_box(r1.add(black_box(r2))))
                    });
                    group.bench_with_input(
                        BenchmarkId::new("add/num-rational", name),
                        &native,
                        |b, (n1, n2)| b.iter(|| black_box(n1 + black_box(n2))),
                    );

                    group.bench_with_input(BenchmarkId::new("mul/Ratio", name), &(r1, r2), |b, (r1, r2)| {
                        b.iter(|| black_box(r1.mul(black_box(r2))))
                    });
                    group.bench_with_input(
                        BenchmarkId::new("mul/num-rational", name),
                        &native,
                        |b, (n1, n2)| b.iter(|| black_box(n1 * black_box(n2))),
                    );

                    group.bench_with_input(BenchmarkId::new("div/Ratio", name), &(r1, r2), |b, (r1, r2)| {
                        b.iter(|| black_box(r1.div(black_box(r2))))
                    });
                    group.bench_with_input(
                        BenchmarkId::new("div/num-rational", name),
                        &native,
                        |b, (n1, n2)| b.iter(|| black_box(n1 / black_box(n2))),
                    );
                }

                group.finish();
            }

            /// Benchmark comparison by wide cross-multiplication
            pub fn bench_comparison(c: &mut Criterion) {
                let bench_name = format!("{}/comparison", $size_name);
                let mut group = c.benchmark_group(&bench_name);

                let r1 = TestRatio::new(TestInt::MAX - 1, TestInt::MAX).unwrap();
                let r2 = TestRatio::new(TestInt::MAX - 2, TestInt::MAX - 1).unwrap();
                let n1 = NativeRational::new(TestInt::MAX - 1, TestInt::MAX);
                let n2 = NativeRational::new(TestInt::MAX - 2, TestInt::MAX - 1);

                group.bench_function("Ratio", |b| b.iter(|| black_box(r1 > black_box(r2))));
                group.bench_function("num-rational", |b| b.iter(|| black_box(&n1 > black_box(&n2))));

                group.finish();
            }

            /// Benchmark gcd on the wide type
            pub fn bench_gcd(c: &mut Criterion) {
                let bench_name = format!("{}/gcd", $size_name);
                let mut group = c.benchmark_group(&bench_name);

                let a = TestInt::MAX.to_wide();
                let b_val = (TestInt::MAX / 3).to_wide();

                group.bench_function("gcd", |b| {
                    b.iter(|| black_box(gcd(black_box(a), black_box(b_val))))
                });

                group.finish();
            }

            /// Sum of the harmonic series until the checked sum overflows
            pub fn bench_harmonic_until_overflow(c: &mut Criterion) {
                let bench_name = format!("{}/harmonic", $size_name);
                let mut group = c.benchmark_group(&bench_name);

                group.bench_function("Ratio", |b| {
                    b.iter(|| {
                        let mut sum = TestRatio::zero();
                        let mut k: TestInt = 1;
                        while let Ok(term) = TestRatio::new(1, k) {
                            match sum.add(&term) {
                                Ok(next) => sum = next,
                                Err(_) => break,
                            }
                            k = match k.checked_add(1) {
                                Some(k) => k,
                                None => break,
                            };
                        }
                        black_box(sum)
                    })
                });

                group.finish();
            }

            /// Export all benchmark functions for this size
            pub fn register_all(c: &mut Criterion) {
                bench_new(c);
                bench_from_f64(c);
                bench_arithmetic(c);
                bench_comparison(c);
                bench_gcd(c);
                bench_harmonic_until_overflow(c);
            }
        }
    };
}

// ============================================================================
// INSTANTIATE BENCHMARK SUITES FOR EACH INTEGER SIZE
// ============================================================================

generate_ratio_benchmarks!(i8_benches, i8, "i8");
generate_ratio_benchmarks!(i16_benches, i16, "i16");
generate_ratio_benchmarks!(i32_benches, i32, "i32");
generate_ratio_benchmarks!(i64_benches, i64, "i64");

// ============================================================================
// BENCHMARK GROUPS
// ============================================================================

criterion_group!(i8_benchmarks, i8_benches::register_all);

criterion_group!(i16_benchmarks, i16_benches::register_all);

criterion_group!(i32_benchmarks, i32_benches::register_all);

criterion_group!(i64_benchmarks, i64_benches::register_all);

// Run all sizes
criterion_main!(i8_benchmarks, i16_benchmarks, i32_benchmarks, i64_benchmarks);
