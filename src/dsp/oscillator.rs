use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Waveform Generators
===================

Each generator maps an instant `t` (seconds) to an amplitude. They are pure
functions of (amplitude, frequency, t), so any sample can be computed without
rendering the ones before it.

  Sine      amp · sin(2π f t + phase)
  Triangle  rises 0 → amp over the first quarter period, falls to -amp by
            three quarters, climbs back to 0 at the end of the period
  Square    +amp for the first half period, -amp for the second

Position within the period:

    p = (t mod T) / T,  T = 1 / f

Triangle, piecewise in p:

    p < 0.25          4p
    0.25 <= p < 0.75  2 - 4p
    p >= 0.75         -4 + 4p

A frequency of zero (or below) has no period. Triangle and square then hold
their p = 0 value.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    #[default]
    Sine,
    Triangle,
    Square,
}

impl Waveform {
    pub const ALL: [Waveform; 3] = [Waveform::Sine, Waveform::Triangle, Waveform::Square];

    /// Evaluate this waveform at time `t`.
    #[inline]
    pub fn sample(self, amp: f64, freq: f64, t: f64) -> f64 {
        match self {
            Waveform::Sine => sine(amp, freq, t, 0.0),
            Waveform::Triangle => triangle(amp, freq, t),
            Waveform::Square => square(amp, freq, t),
        }
    }

    /// Render the waveform at every instant of `time`.
    pub fn render(self, amp: f64, freq: f64, time: &[f64]) -> Vec<f64> {
        time.iter().map(|&t| self.sample(amp, freq, t)).collect()
    }

    /// Next waveform in selector order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Waveform::Sine => Waveform::Triangle,
            Waveform::Triangle => Waveform::Square,
            Waveform::Square => Waveform::Sine,
        }
    }

    /// Previous waveform in selector order, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Waveform::Sine => Waveform::Square,
            Waveform::Triangle => Waveform::Sine,
            Waveform::Square => Waveform::Triangle,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Triangle => "triangle",
            Waveform::Square => "square",
        }
    }

    /// Parse a selector value, falling back to [`Waveform::Sine`] for
    /// anything unrecognised.
    pub fn from_name_or_sine(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Waveform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sine" => Ok(Waveform::Sine),
            "triangle" => Ok(Waveform::Triangle),
            "square" => Ok(Waveform::Square),
            other => Err(format!("unknown waveform '{other}' (expected sine, triangle or square)")),
        }
    }
}

#[inline]
pub fn sine(amp: f64, freq: f64, t: f64, phase: f64) -> f64 {
    amp * (TAU * freq * t + phase).sin()
}

#[inline]
pub fn triangle(amp: f64, freq: f64, t: f64) -> f64 {
    let p = period_position(freq, t);
    let val = if p < 0.25 {
        p * 4.0
    } else if p < 0.75 {
        2.0 - p * 4.0
    } else {
        -4.0 + p * 4.0
    };
    amp * val
}

#[inline]
pub fn square(amp: f64, freq: f64, t: f64) -> f64 {
    if period_position(freq, t) < 0.5 {
        amp
    } else {
        -amp
    }
}

/// Fraction of the current period elapsed at `t`, in `[0, 1)`.
#[inline]
fn period_position(freq: f64, t: f64) -> f64 {
    if freq <= 0.0 {
        return 0.0;
    }
    let period = 1.0 / freq;
    (t.rem_euclid(period) / period).clamp(0.0, 1.0)
}

/// Evenly spaced instants `[0, dt, 2·dt, ...]`, `n` entries long.
pub fn time_vector(n: usize, dt: f64) -> Vec<f64> {
    (0..n).map(|i| i as f64 * dt).collect()
}
