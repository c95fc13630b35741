//! Terminal UI rendering using ratatui.
//!
//! ## Submodules
//!
//! - [`meter`]: the slider, rating line and band-colored status panel
//! - [`common`]: status bar and help overlay
//! - [`theme`]: light/dark theme support with terminal auto-detection
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │   How stressed are you right now?    │
//! │    ━━━━━━━━━━━━━━━●───────────────    │
//! │    0 (No Stress)     10 (Max Stress)  │
//! │        Current Rating: 5/10          │
//! │  ╭────────────────────────────────╮  │
//! │  │ Moderate Stress: ...           │  │
//! │  │ Take a short break. ...        │  │
//! │  ╰────────────────────────────────╯  │
//! ├──────────────────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!    Help overlay rendered on top
//! ```

pub mod common;
pub mod meter;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Minimum terminal width for a usable display.
pub const MIN_WIDTH: u16 = 40;
/// Minimum terminal height for a usable display.
pub const MIN_HEIGHT: u16 = 14;

/// Draw one frame.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        app.slider_track = None;
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let centered = Rect::new(0, (area.height / 2).saturating_sub(2), area.width, 5)
            .intersection(area);
        frame.render_widget(paragraph, centered);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Min(MIN_HEIGHT - 1), // Meter
        Constraint::Length(1),           // Status bar
    ])
    .split(area);

    meter::render(frame, app, chunks[0]);
    common::render_status_bar(frame, app, chunks[1]);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}
