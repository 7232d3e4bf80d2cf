//! Slider ranges and defaults for every adjustable parameter.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A bounded numeric control, the terminal stand-in for a range slider.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Control {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Control {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn increment(&self, value: f64) -> f64 {
        self.snap(value + self.step)
    }

    pub fn decrement(&self, value: f64) -> f64 {
        self.snap(value - self.step)
    }

    /// Position of `value` within the range, in `[0, 1]`.
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.clamp(value) - self.min) / span).clamp(0.0, 1.0)
    }

    /// Round to the nearest step above `min`, then clamp. Keeps repeated
    /// increments from drifting off the step grid.
    fn snap(&self, value: f64) -> f64 {
        if self.step <= 0.0 {
            return self.clamp(value);
        }
        let steps = ((value - self.min) / self.step).round();
        self.clamp(self.min + steps * self.step)
    }
}

pub const MESSAGE_AMPLITUDE: Control = Control::new(0.0, 5.0, 0.1);
pub const MESSAGE_FREQUENCY: Control = Control::new(1.0, 50.0, 1.0);
pub const CARRIER_AMPLITUDE: Control = Control::new(0.0, 5.0, 0.1);
pub const CARRIER_FREQUENCY: Control = Control::new(10.0, 250.0, 5.0);

/// Harmonic count slider. Steps by two so it always lands on odd counts.
pub const HARMONICS: Control = Control::new(1.0, crate::series::MAX_HARMONICS as f64, 2.0);
