pub mod dsp;
pub mod params; // Slider ranges and defaults
pub mod plot; // Chart geometry for the display panels
pub mod series; // Fourier-series square wave

pub use dsp::modulate::{AmParams, AmSignals, FFT_SIZE, SAMPLE_COUNT, SAMPLE_RATE};
