//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use wavelab::{
    dsp::{
        modulate::{CarrierParams, MessageParams, ModulationKind, Sideband},
        Waveform,
    },
    params::{self, Control},
    series, AmParams,
};

use crate::app::{AppConfig, Screen};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "wavelab")]
#[command(about = "Fourier-series and amplitude-modulation visualizer", long_about = None)]
pub struct Args {
    /// Screen shown at startup
    #[arg(long, value_enum, default_value = "fourier")]
    pub screen: Screen,

    /// Number of harmonics summed on the Fourier screen (even counts drop to odd)
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    pub harmonics: u32,

    /// Message waveform: sine, triangle or square
    #[arg(long, value_name = "WAVEFORM", default_value = "sine")]
    pub msg_waveform: Waveform,

    /// Message amplitude
    #[arg(long, value_name = "AMP", default_value_t = 1.0, value_parser = message_amplitude)]
    pub msg_amp: f64,

    /// Message frequency (Hz)
    #[arg(long, value_name = "HZ", default_value_t = 5.0, value_parser = message_frequency)]
    pub msg_freq: f64,

    /// Carrier amplitude
    #[arg(long, value_name = "AMP", default_value_t = 1.0, value_parser = carrier_amplitude)]
    pub car_amp: f64,

    /// Carrier frequency (Hz)
    #[arg(long, value_name = "HZ", default_value_t = 50.0, value_parser = carrier_frequency)]
    pub car_freq: f64,

    /// Modulation: dsb or ssb
    #[arg(long, value_name = "KIND", default_value = "dsb")]
    pub modulation: ModulationKind,

    /// Sideband kept by SSB: usb or lsb
    #[arg(long, value_name = "SIDEBAND", default_value = "usb")]
    pub sideband: Sideband,

    /// Use an FFT instead of the direct DFT for the Hilbert transform and spectrum
    #[arg(long)]
    pub fft: bool,

    /// Write logs to this file (RUST_LOG sets the filter)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Initial application state from the parsed arguments
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            screen: self.screen,
            harmonics: series::normalize_harmonics(self.harmonics),
            am: AmParams {
                message: MessageParams {
                    waveform: self.msg_waveform,
                    amplitude: self.msg_amp,
                    frequency: self.msg_freq,
                },
                carrier: CarrierParams {
                    amplitude: self.car_amp,
                    frequency: self.car_freq,
                },
                kind: self.modulation,
                sideband: self.sideband,
            },
            use_fft: self.fft,
        }
    }
}

fn bounded(s: &str, control: Control) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("'{s}' is not a number: {e}"))?;
    if value < control.min || value > control.max {
        return Err(format!(
            "{value} is outside {}..={}",
            control.min, control.max
        ));
    }
    Ok(value)
}

fn message_amplitude(s: &str) -> Result<f64, String> {
    bounded(s, params::MESSAGE_AMPLITUDE)
}

fn message_frequency(s: &str) -> Result<f64, String> {
    bounded(s, params::MESSAGE_FREQUENCY)
}

fn carrier_amplitude(s: &str) -> Result<f64, String> {
    bounded(s, params::CARRIER_AMPLITUDE)
}

fn carrier_frequency(s: &str) -> Result<f64, String> {
    bounded(s, params::CARRIER_FREQUENCY)
}
