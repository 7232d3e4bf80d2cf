//! Amplitude modulation: DSB and SSB.

/*
Amplitude Modulation
====================

Amplitude modulation carries a low-frequency message on a high-frequency
carrier by varying the carrier's amplitude with the message.

Vocabulary
----------

  message       The information signal m(t). Here a sine, triangle or square
                wave of a few Hz.

  carrier       The high-frequency sinusoid Ac · cos(2π fc t).

  sideband      Modulation copies the message spectrum to either side of the
                carrier: an upper sideband at fc + f and a lower one at fc - f.

  DSB           Double sideband. Both sidebands plus the carrier itself.

  SSB           Single sideband. One sideband only; half the bandwidth.

  Hilbert       ĥ(t), the message with every component shifted by -90°.
                Needed to cancel one sideband.


The Math
--------

DSB (with carrier):

    s(t) = [Ac + m(t)] · cos(2π fc t)

With m(t) = Am cos(2π fm t) this expands to

    Ac cos(2π fc t)                     carrier
  + Am/2 cos(2π (fc + fm) t)            upper sideband
  + Am/2 cos(2π (fc - fm) t)            lower sideband

SSB (phasing method):

    upper:  s(t) = m(t) cos(2π fc t) - ĥ(t) sin(2π fc t)
    lower:  s(t) = m(t) cos(2π fc t) + ĥ(t) sin(2π fc t)

For the single-tone message: cos·cos ∓ sin·sin = cos(a ± b), so exactly one
sideband survives.

Note that the carrier trace drawn next to the modulated signal is
Ac · sin(2π fc t) while the modulators use cosine. Both show the same carrier
frequency; only the phase differs.
*/

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::dft::Transform;
use super::hilbert::hilbert;
use super::oscillator::{sine, time_vector, Waveform};

/// Samples in every generated signal.
pub const SAMPLE_COUNT: usize = 1000;
/// Sample rate of the generated signals (Hz). One sample per millisecond.
pub const SAMPLE_RATE: f64 = 1000.0;
/// Transform size used for the Hilbert transform and the spectrum.
pub const FFT_SIZE: usize = 1024;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModulationKind {
    #[default]
    Dsb,
    Ssb,
}

impl ModulationKind {
    pub fn toggle(self) -> Self {
        match self {
            ModulationKind::Dsb => ModulationKind::Ssb,
            ModulationKind::Ssb => ModulationKind::Dsb,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModulationKind::Dsb => "DSB-AM",
            ModulationKind::Ssb => "SSB-AM",
        }
    }
}

impl FromStr for ModulationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dsb" => Ok(ModulationKind::Dsb),
            "ssb" => Ok(ModulationKind::Ssb),
            other => Err(format!("unknown modulation '{other}' (expected dsb or ssb)")),
        }
    }
}

impl fmt::Display for ModulationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sideband {
    #[default]
    Upper,
    Lower,
}

impl Sideband {
    pub fn toggle(self) -> Self {
        match self {
            Sideband::Upper => Sideband::Lower,
            Sideband::Lower => Sideband::Upper,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sideband::Upper => "USB",
            Sideband::Lower => "LSB",
        }
    }
}

impl FromStr for Sideband {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "usb" | "upper" => Ok(Sideband::Upper),
            "lsb" | "lower" => Ok(Sideband::Lower),
            other => Err(format!("unknown sideband '{other}' (expected usb or lsb)")),
        }
    }
}

impl fmt::Display for Sideband {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MessageParams {
    pub waveform: Waveform,
    pub amplitude: f64,
    /// Hz
    pub frequency: f64,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarrierParams {
    pub amplitude: f64,
    /// Hz
    pub frequency: f64,
}

/// Everything the modulation screen's controls can change.
///
/// `sideband` is remembered while `kind` is DSB so switching back to SSB
/// restores the previous choice.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmParams {
    pub message: MessageParams,
    pub carrier: CarrierParams,
    pub kind: ModulationKind,
    pub sideband: Sideband,
}

impl Default for AmParams {
    fn default() -> Self {
        Self {
            message: MessageParams {
                waveform: Waveform::Sine,
                amplitude: 1.0,
                frequency: 5.0,
            },
            carrier: CarrierParams {
                amplitude: 1.0,
                frequency: 50.0,
            },
            kind: ModulationKind::Dsb,
            sideband: Sideband::Upper,
        }
    }
}

/// One full set of signals for the modulation screen.
#[derive(Debug, Clone)]
pub struct AmSignals {
    pub time: Vec<f64>,
    pub message: Vec<f64>,
    pub carrier: Vec<f64>,
    pub modulated: Vec<f64>,
}

impl AmSignals {
    /// Generate message, carrier and modulated signals from scratch.
    pub fn generate<T: Transform + ?Sized>(params: &AmParams, transform: &mut T) -> Self {
        let time = time_vector(SAMPLE_COUNT, 1.0 / SAMPLE_RATE);

        let msg = params.message;
        let message = msg.waveform.render(msg.amplitude, msg.frequency, &time);

        let car = params.carrier;
        let carrier: Vec<f64> = time
            .iter()
            .map(|&t| sine(car.amplitude, car.frequency, t, 0.0))
            .collect();

        let modulated = match params.kind {
            ModulationKind::Dsb => dsb(&message, &time, car.amplitude, car.frequency),
            ModulationKind::Ssb => {
                let shifted = hilbert(&message, transform);
                ssb(&message, &shifted, &time, car.frequency, params.sideband)
            }
        };

        debug!(
            "generated {} samples: {} {} Hz msg, {} Hz carrier, {}",
            time.len(),
            msg.waveform,
            msg.frequency,
            car.frequency,
            match params.kind {
                ModulationKind::Dsb => params.kind.label().to_string(),
                ModulationKind::Ssb => format!("{} {}", params.kind, params.sideband),
            }
        );

        Self {
            time,
            message,
            carrier,
            modulated,
        }
    }
}

/// DSB-AM with carrier: `(Ac + m(t)) · cos(2π fc t)`.
pub fn dsb(message: &[f64], time: &[f64], carrier_amp: f64, carrier_freq: f64) -> Vec<f64> {
    message
        .iter()
        .zip(time)
        .map(|(&m, &t)| (carrier_amp + m) * (TAU * carrier_freq * t).cos())
        .collect()
}

/// SSB-AM by the phasing method. `shifted` is the Hilbert transform of
/// `message`.
pub fn ssb(
    message: &[f64],
    shifted: &[f64],
    time: &[f64],
    carrier_freq: f64,
    sideband: Sideband,
) -> Vec<f64> {
    let sign = match sideband {
        Sideband::Upper => -1.0,
        Sideband::Lower => 1.0,
    };

    message
        .iter()
        .zip(shifted)
        .zip(time)
        .map(|((&m, &h), &t)| {
            let phase = TAU * carrier_freq * t;
            m * phase.cos() + sign * h * phase.sin()
        })
        .collect()
}
