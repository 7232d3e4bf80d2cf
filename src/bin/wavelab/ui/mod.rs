//! TUI module for wavelab
//!
//! Lays out the two screens and delegates each panel to its widget module.

mod controls;
mod fourier;
mod scope;
mod spectrum;
mod waveform;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use wavelab::plot::{self, Rgb};

use crate::app::{App, Screen};

use controls::render_controls;
use fourier::render_fourier;
use scope::render_scope;
use spectrum::render_spectrum;
use waveform::render_waveform;

pub(crate) fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Render the whole UI for the current screen
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Screen tabs
            Constraint::Min(10),   // Active screen
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    render_tabs(frame, chunks[0], app.screen);

    match app.screen {
        Screen::Fourier => render_fourier(frame, chunks[1], app),
        Screen::Modulation => render_modulation(frame, chunks[1], app),
    }

    let help = match app.screen {
        Screen::Fourier => " [Q] Quit  [Tab] Screen  [←/→] Harmonics",
        Screen::Modulation => " [Q] Quit  [Tab] Screen  [↑/↓] Select  [←/→] Adjust",
    };
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}

fn render_tabs(frame: &mut Frame, area: Rect, screen: Screen) {
    let selected = match screen {
        Screen::Fourier => 0,
        Screen::Modulation => 1,
    };
    let tabs = Tabs::new(vec![
        Line::from(" Fourier Series "),
        Line::from(" Amplitude Modulation "),
    ])
    .select(selected)
    .block(Block::default().title(" wavelab ").borders(Borders::ALL))
    .style(Style::default().fg(Color::DarkGray))
    .highlight_style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(tabs, area);
}

fn render_modulation(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(36),     // Controls
            Constraint::Percentage(55), // Time-domain panels
            Constraint::Min(20),        // CRO and spectrum
        ])
        .split(area);

    render_controls(frame, columns[0], app);

    let traces = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(columns[1]);

    let signals = &app.signals;
    render_waveform(
        frame,
        traces[0],
        " Message ",
        &plot::trace_points(&signals.message),
        Color::Blue,
    );
    render_waveform(
        frame,
        traces[1],
        " Carrier ",
        &plot::trace_points(&signals.carrier),
        Color::Red,
    );
    render_waveform(
        frame,
        traces[2],
        &format!(" Modulated ({}) ", modulation_label(app)),
        &plot::trace_points(&signals.modulated),
        Color::Green,
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[2]);

    render_scope(
        frame,
        right[0],
        &plot::xy_points(&signals.message, &signals.modulated),
    );
    render_spectrum(frame, right[1], &app.spectrum);
}

fn modulation_label(app: &App) -> String {
    use wavelab::dsp::modulate::ModulationKind;
    match app.am.kind {
        ModulationKind::Dsb => app.am.kind.to_string(),
        ModulationKind::Ssb => format!("{} {}", app.am.kind, app.am.sideband),
    }
}
