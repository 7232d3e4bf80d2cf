//! Benchmarks for the forward transform.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavelab::dsp::{DirectDft, PlannedFft, Transform};

use crate::TRANSFORM_SIZES;

pub fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/transform");

    for &size in TRANSFORM_SIZES {
        let input: Vec<f64> = (0..size).map(|i| (i as f64 * 0.1).sin()).collect();

        // O(N²) - one cos/sin pair per multiply-add
        let mut dft = DirectDft::new(size);
        group.bench_with_input(BenchmarkId::new("direct", size), &size, |b, _| {
            b.iter(|| dft.forward(black_box(&input)))
        });

        let mut fft = PlannedFft::new(size);
        group.bench_with_input(BenchmarkId::new("planned", size), &size, |b, _| {
            b.iter(|| fft.forward(black_box(&input)))
        });
    }

    group.finish();
}
