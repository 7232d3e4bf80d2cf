//! Time-domain trace widget

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use wavelab::SAMPLE_COUNT;

/// Render a normalized trace (x in `[0, 1)`, y in `[-1, 1]`)
pub fn render_waveform(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    points: &[(f64, f64)],
    color: Color,
) {
    let block = Block::default().title(title.to_string()).borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(points);

    let end_ms = format!("{} ms", SAMPLE_COUNT);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, 1.0])
                .labels(vec!["0".to_string(), end_ms])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-1.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
