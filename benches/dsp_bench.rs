//! Benchmarks for the signal layer.
//!
//! Run with: cargo bench
//!
//! Every UI input regenerates all signals synchronously, so these numbers are
//! the latency between a key press and the redrawn frame. At ~60fps a frame
//! leaves about 16ms.
//!
//! Benchmark groups:
//!   - dsp/transform   Direct DFT against the planned FFT
//!   - dsp/hilbert     Hilbert approximation on top of each transform
//!   - dsp/modulate    Full signal regeneration (DSB and SSB)
//!   - series          Partial sums for the Fourier screen

use criterion::{criterion_group, criterion_main};

mod dsp;

/// Transform sizes around the one the modulation screen uses (1024).
pub const TRANSFORM_SIZES: &[usize] = &[128, 256, 512, 1024];

criterion_group!(
    benches,
    dsp::bench_transform,
    dsp::bench_hilbert,
    dsp::bench_modulate,
    dsp::bench_series,
);
criterion_main!(benches);
