//! Benchmarks for regenerating the modulation screen.

use std::hint::black_box;

use criterion::Criterion;
use wavelab::{
    dsp::{modulate::ModulationKind, DirectDft, PlannedFft},
    AmParams, AmSignals, FFT_SIZE,
};

pub fn bench_modulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/modulate");

    let dsb = AmParams::default();
    let ssb = AmParams {
        kind: ModulationKind::Ssb,
        ..AmParams::default()
    };

    // DSB never touches the transform
    let mut dft = DirectDft::new(FFT_SIZE);
    group.bench_function("dsb", |b| {
        b.iter(|| AmSignals::generate(black_box(&dsb), &mut dft))
    });

    group.bench_function("ssb_direct", |b| {
        b.iter(|| AmSignals::generate(black_box(&ssb), &mut dft))
    });

    let mut fft = PlannedFft::new(FFT_SIZE);
    group.bench_function("ssb_planned", |b| {
        b.iter(|| AmSignals::generate(black_box(&ssb), &mut fft))
    });

    group.finish();
}
