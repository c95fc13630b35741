//! Meter view rendering.
//!
//! Title, slider, scale labels, current rating, and a band-colored panel
//! with the status line and advice.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::assess::MAX_RATING;

pub const TITLE: &str = "How stressed are you right now?";
pub const MIN_LABEL: &str = "0 (No Stress)";
pub const MAX_LABEL: &str = "10 (Max Stress)";

/// Widest the slider track will grow.
const MAX_TRACK_WIDTH: u16 = 60;
/// Columns kept free on each side of the track.
const TRACK_MARGIN: u16 = 4;

const KNOB: &str = "●";
const TRACK_FILLED: &str = "━";
const TRACK_EMPTY: &str = "─";

/// Render the meter view.
///
/// Records the slider track position on `app` for mouse hit-testing.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(2), // Title
        Constraint::Length(1), // Slider
        Constraint::Length(1), // Min/max labels
        Constraint::Length(2), // Current rating
        Constraint::Min(5),    // Status panel
    ])
    .split(area);

    let title = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(app.theme.title);
    frame.render_widget(title, chunks[0]);

    let track = track_area(chunks[1]);
    render_slider(frame, app, track);
    app.slider_track = Some(track);

    let labels = Rect::new(track.x, chunks[2].y, track.width, chunks[2].height);
    let [min_area, max_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(labels);
    frame.render_widget(Paragraph::new(MIN_LABEL).alignment(Alignment::Left), min_area);
    frame.render_widget(Paragraph::new(MAX_LABEL).alignment(Alignment::Right), max_area);

    let rating = Paragraph::new(app.display().rating_text.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(rating, chunks[3]);

    render_status_panel(frame, app, chunks[4]);
}

/// Center the track horizontally inside the slider row.
fn track_area(row: Rect) -> Rect {
    let width = row
        .width
        .saturating_sub(TRACK_MARGIN * 2)
        .min(MAX_TRACK_WIDTH)
        .max(1);
    let x = row.x + row.width.saturating_sub(width) / 2;
    Rect::new(x, row.y, width, 1)
}

/// Column offset of the knob within a track of `width` cells.
pub fn knob_offset(slider: f64, width: u16) -> u16 {
    let span = f64::from(width.saturating_sub(1));
    ((slider / f64::from(MAX_RATING)) * span).round() as u16
}

fn render_slider(frame: &mut Frame, app: &App, track: Rect) {
    let knob = knob_offset(app.slider(), track.width);
    let after = track.width.saturating_sub(knob + 1);
    let band = app.display().result.band;

    let line = Line::from(vec![
        Span::styled(
            TRACK_FILLED.repeat(usize::from(knob)),
            Style::default().fg(app.theme.band_color(band)),
        ),
        Span::styled(
            KNOB,
            Style::default().fg(app.theme.highlight).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            TRACK_EMPTY.repeat(usize::from(after)),
            Style::default().fg(app.theme.track_empty),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), track);
}

fn render_status_panel(frame: &mut Frame, app: &App, area: Rect) {
    let result = &app.display().result;
    let style = app.theme.band_style(result.band);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(style.fg(app.theme.border))
        .padding(Padding::horizontal(1))
        .style(style);

    let text = vec![
        Line::from(Span::styled(
            result.status,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(result.advice),
    ];

    let panel = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let [panel_area] = Layout::horizontal([Constraint::Min(0)])
        .horizontal_margin(2)
        .areas(area);
    frame.render_widget(panel, panel_area);
}
