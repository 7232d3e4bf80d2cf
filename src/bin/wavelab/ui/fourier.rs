//! Fourier screen: glowing harmonic-sum trace over a labelled grid

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as Segment},
        Block, Borders, Paragraph,
    },
    Frame,
};

use wavelab::{
    params,
    plot::{self, Gradient, Rgb},
    series::FUNDAMENTAL_HZ,
};

use super::color;
use crate::app::App;

/// Time axis span (ms): one period of the 1 Hz fundamental
const PERIOD_MS: f64 = 1000.0;
/// Amplitude axis half-span
const AMPLITUDE_SPAN: f64 = 2.0;

const BACKGROUND: Rgb = Rgb::from_hex(0x111a1f);
const GRID: Rgb = Rgb::from_hex(0x244e57);
const GRID_LABEL: Rgb = Rgb::from_hex(0x448899);
const AXIS: Rgb = Rgb::from_hex(0x23fff1);
const AXIS_LABEL: Rgb = Rgb::from_hex(0x2afff9);
const FUNDAMENTAL: Rgb = Rgb(97, 218, 251);
const LEGEND: Rgb = Rgb::from_hex(0x16d9e3);
const SUM_KEY: Rgb = Rgb::from_hex(0x00ffff);

fn sum_gradient() -> Gradient {
    Gradient::new(&[
        (0.0, Rgb::from_hex(0x00ffd5)),
        (0.5, Rgb::from_hex(0x00bfff)),
        (1.0, Rgb::from_hex(0x00f0ff)),
    ])
}

pub fn render_fourier(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(4)])
        .split(area);

    render_plot(frame, chunks[0], app);
    render_info(frame, chunks[1], app.harmonics);
}

fn render_plot(frame: &mut Frame, area: Rect, app: &App) {
    let sum = app.transition.current();
    let fundamental = &app.fundamental;
    let gradient = sum_gradient();

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(" Square wave from odd harmonics ")
                .borders(Borders::ALL),
        )
        .marker(symbols::Marker::Braille)
        .background_color(color(BACKGROUND))
        .x_bounds([-80.0, PERIOD_MS + 20.0])
        .y_bounds([-AMPLITUDE_SPAN - 0.4, AMPLITUDE_SPAN + 0.2])
        .paint(move |ctx| {
            draw_grid(ctx);
            ctx.layer();
            draw_curve(ctx, fundamental, |_| FUNDAMENTAL.dim(0.45));
            ctx.layer();
            draw_curve(ctx, &sum, |t| gradient.at(t));
            draw_legend(ctx);
        });

    frame.render_widget(canvas, area);
}

fn draw_grid(ctx: &mut Context) {
    let grid = color(GRID);

    for x in plot::ticks(0.0, PERIOD_MS, 100.0) {
        ctx.draw(&Segment::new(x, -AMPLITUDE_SPAN, x, AMPLITUDE_SPAN, grid));
        ctx.print(
            x - 15.0,
            -AMPLITUDE_SPAN - 0.25,
            Span::styled(format!("{x:.0} ms"), Style::default().fg(color(GRID_LABEL))),
        );
    }

    for y in plot::ticks(-AMPLITUDE_SPAN, AMPLITUDE_SPAN, 1.0) {
        ctx.draw(&Segment::new(0.0, y, PERIOD_MS, y, grid));
        ctx.print(
            -40.0,
            y,
            Span::styled(format!("{y:>2.0}"), Style::default().fg(color(GRID_LABEL))),
        );
    }

    // Axes
    let axis = color(AXIS);
    ctx.draw(&Segment::new(0.0, 0.0, PERIOD_MS, 0.0, axis));
    ctx.draw(&Segment::new(0.0, -AMPLITUDE_SPAN, 0.0, AMPLITUDE_SPAN, axis));

    let label = Style::default().fg(color(AXIS_LABEL));
    ctx.print(PERIOD_MS / 2.0 - 30.0, -AMPLITUDE_SPAN - 0.4, Span::styled("Time →", label));
    ctx.print(-80.0, AMPLITUDE_SPAN, Span::styled("Amp", label));
}

/// Draw `points` (one period, evenly spaced) as segments coloured by their
/// position along the time axis
fn draw_curve(ctx: &mut Context, points: &[f64], paint: impl Fn(f64) -> Rgb) {
    let last = points.len().saturating_sub(1).max(1) as f64;
    for (i, pair) in points.windows(2).enumerate() {
        let t0 = i as f64 / last;
        let t1 = (i + 1) as f64 / last;
        ctx.draw(&Segment::new(
            t0 * PERIOD_MS,
            pair[0].clamp(-AMPLITUDE_SPAN, AMPLITUDE_SPAN),
            t1 * PERIOD_MS,
            pair[1].clamp(-AMPLITUDE_SPAN, AMPLITUDE_SPAN),
            color(paint(t0)),
        ));
    }
}

fn draw_legend(ctx: &mut Context) {
    let x = PERIOD_MS - 420.0;
    let y = AMPLITUDE_SPAN - 0.1;
    let text = Style::default().fg(color(LEGEND));

    ctx.draw(&Segment::new(x - 80.0, y, x - 20.0, y, color(SUM_KEY)));
    ctx.print(x, y, Span::styled("Sum of odd harmonics", text));

    let y = y - 0.35;
    ctx.draw(&Segment::new(x - 80.0, y, x - 20.0, y, color(FUNDAMENTAL.dim(0.45))));
    ctx.print(x, y, Span::styled("Fundamental (n=1)", text));
}

fn render_info(frame: &mut Frame, area: Rect, harmonics: u32) {
    let fraction = params::HARMONICS.fraction(harmonics as f64);
    let filled = (fraction * 30.0).round() as usize;
    let bar: String = "━".repeat(filled) + "●" + &"─".repeat(30 - filled);

    let lines = vec![
        Line::from(vec![
            Span::styled(" Harmonics: ", Style::default().fg(Color::White)),
            Span::styled(format!("{harmonics:<3} "), Style::default().fg(Color::Yellow)),
            Span::styled(bar, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(Span::styled(
            format!(" Fundamental Frequency: {FUNDAMENTAL_HZ} Hz (fixed for demonstration)"),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            format!(" Displaying odd harmonics from n = 1 to {harmonics}"),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::TOP));
    frame.render_widget(paragraph, area);
}
