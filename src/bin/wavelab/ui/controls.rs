//! Control panel widget - the sliders and selectors of the modulation screen

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{AmControl, App};

/// Width of the slider track in cells
const TRACK_WIDTH: usize = 20;

/// Text slider: filled track, knob, empty track
fn slider(fraction: f64) -> String {
    let knob = (fraction.clamp(0.0, 1.0) * (TRACK_WIDTH - 1) as f64).round() as usize;
    let mut track = String::with_capacity(TRACK_WIDTH * 3);
    for i in 0..TRACK_WIDTH {
        track.push(match i.cmp(&knob) {
            std::cmp::Ordering::Less => '━',
            std::cmp::Ordering::Equal => '●',
            std::cmp::Ordering::Greater => '─',
        });
    }
    track
}

pub fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().title(" Controls ").borders(Borders::ALL);
    let selected = app.selected_control();

    let mut lines = Vec::with_capacity(AmControl::ALL.len() * 3);
    for control in AmControl::ALL {
        let is_selected = control == selected;
        let marker = if is_selected { "▶ " } else { "  " };
        let label_style = if is_selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(format!("{}: ", control.label()), label_style),
            Span::styled(control.value_text(&app.am), Style::default().fg(Color::Yellow)),
        ]));

        if let (Some(range), Some(value)) = (control.range(), control.value(&app.am)) {
            lines.push(Line::from(Span::styled(
                format!("  {}", slider(range.fraction(value))),
                Style::default().fg(if is_selected { Color::Cyan } else { Color::DarkGray }),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "  ◀ ▶",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_knob_positions() {
        assert!(slider(0.0).starts_with('●'));
        assert!(slider(1.0).ends_with('●'));
        assert_eq!(slider(0.5).chars().count(), TRACK_WIDTH);
    }
}
