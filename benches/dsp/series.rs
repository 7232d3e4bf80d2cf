//! Benchmarks for Fourier partial sums.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavelab::series::{sample_partial_sum, MAX_HARMONICS};

pub fn bench_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("series");

    for harmonics in [1, 9, 49, MAX_HARMONICS] {
        group.bench_with_input(
            BenchmarkId::new("partial_sum", harmonics),
            &harmonics,
            |b, &h| b.iter(|| sample_partial_sum(black_box(h), 600)),
        );
    }

    group.finish();
}
