//! Signal-generation primitives used by the visualizations.
//!
//! Everything here is plain numeric code over `f64` sample buffers. Each
//! function takes its parameters by value and returns freshly computed
//! samples; nothing is cached between calls.

/// Discrete Fourier transform and its inverse.
pub mod dft;
/// Hilbert transform approximation built on a [`dft::Transform`].
pub mod hilbert;
/// Double and single sideband amplitude modulation.
pub mod modulate;
/// Sine, triangle and square waveform generators.
pub mod oscillator;

pub use dft::{DirectDft, PlannedFft, Spectrum, Transform};
pub use oscillator::Waveform;
