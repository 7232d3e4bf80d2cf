//! Spectrum widget
//!
//! Normalized magnitude of the modulated signal's transform, 0 Hz to Nyquist.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use wavelab::SAMPLE_RATE;

/// Render the spectrum; `spectrum` holds `(frequency_hz, magnitude)` pairs
pub fn render_spectrum(frame: &mut Frame, area: Rect, spectrum: &[(f64, f64)]) {
    let peak_hz = spectrum
        .iter()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(f, _)| *f)
        .unwrap_or(0.0);

    let block = Block::default()
        .title(format!(" Spectrum (peak {:.1} Hz) ", peak_hz))
        .borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(spectrum);

    let nyquist = SAMPLE_RATE / 2.0;

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, nyquist])
                .labels(vec![
                    "0".to_string(),
                    format!("{:.0}", nyquist / 2.0),
                    format!("{:.0} Hz", nyquist),
                ])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, 1.0])
                .labels(vec!["0", "1"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
