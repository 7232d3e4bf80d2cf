//! Fourier-series synthesis of a square wave.

/*
Square Wave from Odd Harmonics
==============================

A square wave of unit amplitude is the infinite sum

    sq(t) = 4/π · Σ_{n = 1, 3, 5, ...} sin(2π f0 n t) / n

Only odd harmonics appear and each falls off as 1/n. Truncating the sum at
harmonic H gives the partial sum shown on screen:

    H = 1   a pure sine, amplitude 4/π ≈ 1.27
    H = 3   flattening shoulders appear
    H = 9   recognisably square, with ripples at the edges
    H → ∞   converges to ±1 everywhere except at the jumps, where the
            overshoot settles near 9% (the Gibbs phenomenon)

The fundamental f0 is fixed at 1 Hz and one period is sampled across the
plot, so the time axis reads 0..1000 ms.
*/

pub mod transition;

use std::f64::consts::{PI, TAU};

pub use transition::Transition;

/// Fundamental frequency of the synthesized square wave (Hz).
pub const FUNDAMENTAL_HZ: f64 = 1.0;
/// Highest harmonic the selector allows.
pub const MAX_HARMONICS: u32 = 99;

/// Snap a requested harmonic count to the odd count actually summed.
///
/// Even counts drop to the odd number below; the result stays within
/// `1..=MAX_HARMONICS`.
pub fn normalize_harmonics(requested: u32) -> u32 {
    let clamped = requested.clamp(1, MAX_HARMONICS);
    if clamped % 2 == 0 {
        clamped - 1
    } else {
        clamped
    }
}

/// Partial sum of odd harmonics `1..=harmonics` at time `t`.
#[inline]
pub fn partial_sum(t: f64, harmonics: u32, f0: f64) -> f64 {
    let sum: f64 = (1..=harmonics)
        .step_by(2)
        .map(|n| {
            let n = n as f64;
            (TAU * f0 * n * t).sin() / n
        })
        .sum();
    sum * 4.0 / PI
}

/// `samples + 1` points of the partial sum across one period, `t = i / samples`.
pub fn sample_partial_sum(harmonics: u32, samples: usize) -> Vec<f64> {
    sample_period(samples, |t| partial_sum(t, harmonics, FUNDAMENTAL_HZ))
}

/// `samples + 1` points of the unscaled fundamental `sin(2π f0 t)`.
pub fn fundamental(samples: usize) -> Vec<f64> {
    sample_period(samples, |t| (TAU * FUNDAMENTAL_HZ * t).sin())
}

/// Ideal unit square wave the partial sums converge to.
pub fn ideal_square(t: f64, f0: f64) -> f64 {
    crate::dsp::oscillator::square(1.0, f0, t)
}

fn sample_period(samples: usize, f: impl Fn(f64) -> f64) -> Vec<f64> {
    let denom = samples.max(1) as f64;
    (0..=samples).map(|i| f(i as f64 / denom)).collect()
}
