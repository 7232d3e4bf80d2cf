//! Plot geometry shared by the display panels.
//!
//! Turns sample buffers into chart coordinates. Nothing here knows about the
//! terminal; the binary maps these points and colours onto ratatui widgets.

use crate::dsp::Spectrum;

/// Largest absolute value in `signal`, or 1.0 when that is zero (or the
/// signal is empty) so it can always be used as a divisor.
pub fn peak_abs(signal: &[f64]) -> f64 {
    let peak = signal.iter().fold(0.0f64, |acc, &x| acc.max(x.abs()));
    if peak > 0.0 {
        peak
    } else {
        1.0
    }
}

/// Time-domain trace scaled to fit `[-1, 1]`, x running over `[0, 1)`.
pub fn trace_points(signal: &[f64]) -> Vec<(f64, f64)> {
    let scale = peak_abs(signal);
    let len = signal.len().max(1) as f64;
    signal
        .iter()
        .enumerate()
        .map(|(i, &value)| (i as f64 / len, value / scale))
        .collect()
}

/// X-Y (Lissajous) trace: sample `i` of `x` against sample `i` of `y`,
/// each axis scaled by its own peak.
pub fn xy_points(x: &[f64], y: &[f64]) -> Vec<(f64, f64)> {
    let scale_x = peak_abs(x);
    let scale_y = peak_abs(y);
    x.iter()
        .zip(y)
        .map(|(&vx, &vy)| (vx / scale_x, vy / scale_y))
        .collect()
}

/// Magnitude spectrum over the non-negative frequencies, normalized so the
/// strongest bin is 1.0. Points are `(frequency_hz, magnitude)`.
pub fn spectrum_points(spectrum: &Spectrum, sample_rate: f64) -> Vec<(f64, f64)> {
    let size = spectrum.len();
    if size == 0 {
        return Vec::new();
    }
    let half = (size / 2).max(1);
    let magnitudes: Vec<f64> = spectrum.magnitudes().into_iter().take(half).collect();
    let max = magnitudes.iter().copied().fold(0.0f64, f64::max);
    let max = if max > 0.0 { max } else { 1.0 };
    let bin_hz = sample_rate / size as f64;

    magnitudes
        .iter()
        .enumerate()
        .map(|(i, m)| (i as f64 * bin_hz, m / max))
        .collect()
}

/// Index of the strongest non-negative-frequency bin.
pub fn dominant_bin(spectrum: &Spectrum) -> Option<usize> {
    let half = spectrum.len() / 2;
    spectrum
        .magnitudes()
        .into_iter()
        .take(half.max(1))
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

/// Grid positions from `start` to `end` inclusive, every `step`.
pub fn ticks(start: f64, end: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || end < start {
        return Vec::new();
    }
    let count = ((end - start) / step + 1e-9).floor() as usize;
    (0..=count).map(|i| start + i as f64 * step).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }

    /// Scale brightness by `factor` in `[0, 1]`.
    pub fn dim(self, factor: f64) -> Rgb {
        Rgb::from_hex(0).lerp(self, factor.clamp(0.0, 1.0))
    }
}

/// Linear colour gradient over `[0, 1]`.
#[derive(Debug, Clone)]
pub struct Gradient {
    stops: Vec<(f64, Rgb)>,
}

impl Gradient {
    /// Stops must be given in increasing offset order.
    pub fn new(stops: &[(f64, Rgb)]) -> Self {
        Self {
            stops: stops.to_vec(),
        }
    }

    /// Colour at `t`, clamped to the first and last stop.
    pub fn at(&self, t: f64) -> Rgb {
        let Some(&(first_offset, first)) = self.stops.first() else {
            return Rgb(0, 0, 0);
        };
        if t <= first_offset {
            return first;
        }
        for pair in self.stops.windows(2) {
            let (o0, c0) = pair[0];
            let (o1, c1) = pair[1];
            if t <= o1 {
                let span = o1 - o0;
                let local = if span > 0.0 { (t - o0) / span } else { 1.0 };
                return c0.lerp(c1, local);
            }
        }
        self.stops.last().map(|&(_, c)| c).unwrap_or(first)
    }
}
