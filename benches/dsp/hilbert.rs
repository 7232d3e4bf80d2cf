//! Benchmarks for the Hilbert approximation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavelab::dsp::{hilbert::hilbert, DirectDft, PlannedFft};

use crate::TRANSFORM_SIZES;

pub fn bench_hilbert(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/hilbert");

    for &size in TRANSFORM_SIZES {
        // Shorter than the transform, like the 1000-in-1024 message
        let input: Vec<f64> = (0..size - size / 32)
            .map(|i| (i as f64 * 0.05).cos())
            .collect();

        let mut dft = DirectDft::new(size);
        group.bench_with_input(BenchmarkId::new("direct", size), &size, |b, _| {
            b.iter(|| hilbert(black_box(&input), &mut dft))
        });

        let mut fft = PlannedFft::new(size);
        group.bench_with_input(BenchmarkId::new("planned", size), &size, |b, _| {
            b.iter(|| hilbert(black_box(&input), &mut fft))
        });
    }

    group.finish();
}
