//! Application state and event loop

use std::time::Duration;

use clap::ValueEnum;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::{debug, info};
use ratatui::DefaultTerminal;

use wavelab::{
    dsp::{DirectDft, PlannedFft, Transform},
    params::{self, Control},
    plot,
    series::{self, Transition},
    AmParams, AmSignals, FFT_SIZE, SAMPLE_RATE,
};

use crate::ui;

/// Points sampled across one period of the Fourier plot (plus the endpoint)
pub const FOURIER_SAMPLES: usize = 600;

/// Frame interval (~60fps), also the keyboard poll timeout
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Screen {
    Fourier,
    Modulation,
}

impl Screen {
    pub fn toggle(self) -> Self {
        match self {
            Screen::Fourier => Screen::Modulation,
            Screen::Modulation => Screen::Fourier,
        }
    }
}

/// Controls on the modulation screen, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmControl {
    MessageWaveform,
    MessageAmplitude,
    MessageFrequency,
    CarrierAmplitude,
    CarrierFrequency,
    Modulation,
    Sideband,
}

impl AmControl {
    pub const ALL: [AmControl; 7] = [
        AmControl::MessageWaveform,
        AmControl::MessageAmplitude,
        AmControl::MessageFrequency,
        AmControl::CarrierAmplitude,
        AmControl::CarrierFrequency,
        AmControl::Modulation,
        AmControl::Sideband,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AmControl::MessageWaveform => "Message waveform",
            AmControl::MessageAmplitude => "Message amplitude",
            AmControl::MessageFrequency => "Message frequency",
            AmControl::CarrierAmplitude => "Carrier amplitude",
            AmControl::CarrierFrequency => "Carrier frequency",
            AmControl::Modulation => "Modulation",
            AmControl::Sideband => "SSB sideband",
        }
    }

    /// Slider range for numeric controls; `None` for selectors
    pub fn range(self) -> Option<Control> {
        match self {
            AmControl::MessageAmplitude => Some(params::MESSAGE_AMPLITUDE),
            AmControl::MessageFrequency => Some(params::MESSAGE_FREQUENCY),
            AmControl::CarrierAmplitude => Some(params::CARRIER_AMPLITUDE),
            AmControl::CarrierFrequency => Some(params::CARRIER_FREQUENCY),
            _ => None,
        }
    }

    /// Current value as display text
    pub fn value_text(self, am: &AmParams) -> String {
        match self {
            AmControl::MessageWaveform => am.message.waveform.to_string(),
            AmControl::MessageAmplitude => format!("{:.1}", am.message.amplitude),
            AmControl::MessageFrequency => format!("{:.0} Hz", am.message.frequency),
            AmControl::CarrierAmplitude => format!("{:.1}", am.carrier.amplitude),
            AmControl::CarrierFrequency => format!("{:.0} Hz", am.carrier.frequency),
            AmControl::Modulation => am.kind.to_string(),
            AmControl::Sideband => am.sideband.to_string(),
        }
    }

    /// Numeric value for slider controls
    pub fn value(self, am: &AmParams) -> Option<f64> {
        match self {
            AmControl::MessageAmplitude => Some(am.message.amplitude),
            AmControl::MessageFrequency => Some(am.message.frequency),
            AmControl::CarrierAmplitude => Some(am.carrier.amplitude),
            AmControl::CarrierFrequency => Some(am.carrier.frequency),
            _ => None,
        }
    }

    /// Step the control up (`forward`) or down
    pub fn adjust(self, am: &mut AmParams, forward: bool) {
        let step = |control: Control, value: f64| {
            if forward {
                control.increment(value)
            } else {
                control.decrement(value)
            }
        };

        match self {
            AmControl::MessageWaveform => {
                let w = am.message.waveform;
                am.message.waveform = if forward { w.next() } else { w.prev() };
            }
            AmControl::MessageAmplitude => {
                am.message.amplitude = step(params::MESSAGE_AMPLITUDE, am.message.amplitude);
            }
            AmControl::MessageFrequency => {
                am.message.frequency = step(params::MESSAGE_FREQUENCY, am.message.frequency);
            }
            AmControl::CarrierAmplitude => {
                am.carrier.amplitude = step(params::CARRIER_AMPLITUDE, am.carrier.amplitude);
            }
            AmControl::CarrierFrequency => {
                am.carrier.frequency = step(params::CARRIER_FREQUENCY, am.carrier.frequency);
            }
            AmControl::Modulation => am.kind = am.kind.toggle(),
            AmControl::Sideband => am.sideband = am.sideband.toggle(),
        }
    }
}

/// Initial state, usually built from command-line arguments
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub screen: Screen,
    pub harmonics: u32,
    pub am: AmParams,
    pub use_fft: bool,
}

/// Everything the UI draws from
pub struct App {
    pub screen: Screen,

    // Fourier screen
    pub harmonics: u32,
    pub transition: Transition,
    pub fundamental: Vec<f64>,

    // Modulation screen
    pub am: AmParams,
    pub selected: usize,
    pub signals: AmSignals,
    pub spectrum: Vec<(f64, f64)>,
    transform: Box<dyn Transform>,

    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let mut transform: Box<dyn Transform> = if config.use_fft {
            Box::new(PlannedFft::new(FFT_SIZE))
        } else {
            Box::new(DirectDft::new(FFT_SIZE))
        };

        let harmonics = series::normalize_harmonics(config.harmonics);
        let signals = AmSignals::generate(&config.am, transform.as_mut());
        let spectrum = plot::spectrum_points(&transform.forward(&signals.modulated), SAMPLE_RATE);

        Self {
            screen: config.screen,
            harmonics,
            transition: Transition::settled(series::sample_partial_sum(harmonics, FOURIER_SAMPLES)),
            fundamental: series::fundamental(FOURIER_SAMPLES),
            am: config.am,
            selected: 0,
            signals,
            spectrum,
            transform,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        info!("starting on {:?} screen", self.screen);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, self))
                .wrap_err("failed to draw frame")?;

            // One animation frame per loop iteration
            self.transition.advance();

            if event::poll(FRAME_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    pub fn selected_control(&self) -> AmControl {
        AmControl::ALL[self.selected % AmControl::ALL.len()]
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.screen = self.screen.toggle();
            }
            _ => match self.screen {
                Screen::Fourier => self.handle_fourier_key(key),
                Screen::Modulation => self.handle_modulation_key(key),
            },
        }
    }

    fn handle_fourier_key(&mut self, key: KeyCode) {
        let current = self.harmonics as f64;
        let requested = match key {
            KeyCode::Right | KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => {
                params::HARMONICS.increment(current)
            }
            KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => {
                params::HARMONICS.decrement(current)
            }
            _ => return,
        };
        self.set_harmonics(requested as u32);
    }

    fn handle_modulation_key(&mut self, key: KeyCode) {
        let count = AmControl::ALL.len();
        match key {
            KeyCode::Up => self.selected = (self.selected + count - 1) % count,
            KeyCode::Down => self.selected = (self.selected + 1) % count,
            KeyCode::Left => self.adjust_selected(false),
            KeyCode::Right | KeyCode::Enter => self.adjust_selected(true),
            _ => {}
        }
    }

    /// Change the harmonic count and start animating towards the new sum
    pub fn set_harmonics(&mut self, requested: u32) {
        let harmonics = series::normalize_harmonics(requested);
        if harmonics == self.harmonics {
            return;
        }
        debug!("harmonics {} -> {}", self.harmonics, harmonics);
        self.harmonics = harmonics;
        self.transition
            .retarget(series::sample_partial_sum(harmonics, FOURIER_SAMPLES));
    }

    fn adjust_selected(&mut self, forward: bool) {
        let control = self.selected_control();
        let before = self.am;
        control.adjust(&mut self.am, forward);
        if self.am != before {
            self.regenerate();
        }
    }

    /// Recompute every modulation-screen signal from the current parameters
    pub fn regenerate(&mut self) {
        self.signals = AmSignals::generate(&self.am, self.transform.as_mut());
        let spectrum = self.transform.forward(&self.signals.modulated);
        self.spectrum = plot::spectrum_points(&spectrum, SAMPLE_RATE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavelab::dsp::modulate::{ModulationKind, Sideband};

    fn app() -> App {
        App::new(AppConfig {
            screen: Screen::Fourier,
            harmonics: 1,
            am: AmParams::default(),
            use_fft: true,
        })
    }

    #[test]
    fn harmonics_key_starts_transition() {
        let mut app = app();
        app.handle_key(KeyCode::Right);
        assert_eq!(app.harmonics, 3);
        assert!(!app.transition.is_settled());
    }

    #[test]
    fn harmonics_floor_is_one() {
        let mut app = app();
        app.handle_key(KeyCode::Left);
        assert_eq!(app.harmonics, 1);
        assert!(app.transition.is_settled());
    }

    #[test]
    fn tab_switches_screen() {
        let mut app = app();
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.screen, Screen::Modulation);
    }

    #[test]
    fn selection_wraps() {
        let mut app = app();
        app.screen = Screen::Modulation;
        app.handle_key(KeyCode::Up);
        assert_eq!(app.selected_control(), AmControl::Sideband);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.selected_control(), AmControl::MessageWaveform);
    }

    #[test]
    fn adjusting_a_control_regenerates_signals() {
        let mut app = app();
        app.screen = Screen::Modulation;
        let before = app.signals.message.clone();
        // Message amplitude
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Right);
        assert!((app.am.message.amplitude - 1.1).abs() < 1e-9);
        assert_ne!(before, app.signals.message);
    }

    #[test]
    fn sideband_survives_dsb() {
        let mut app = app();
        app.screen = Screen::Modulation;
        app.selected = 6;
        app.handle_key(KeyCode::Right);
        assert_eq!(app.am.sideband, Sideband::Lower);
        assert_eq!(app.am.kind, ModulationKind::Dsb);
        app.selected = 5;
        app.handle_key(KeyCode::Right);
        assert_eq!(app.am.kind, ModulationKind::Ssb);
        assert_eq!(app.am.sideband, Sideband::Lower);
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
