//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection. The
//! band colors are the same in both; only the chrome around them changes.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::assess::RatingBand;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for the slider knob and highlights.
    pub highlight: Color,
    /// Color of the unfilled part of the slider track.
    pub track_empty: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Text drawn on top of a band color.
    pub on_band: Color,
    /// Style for the title line.
    pub title: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            track_empty: Color::DarkGray,
            border: Color::Gray,
            on_band: Color::Black,
            title: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            track_empty: Color::Gray,
            border: Color::DarkGray,
            on_band: Color::Black,
            title: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Background color for a band.
    pub fn band_color(&self, band: RatingBand) -> Color {
        let (r, g, b) = band.rgb();
        Color::Rgb(r, g, b)
    }

    /// Style for text drawn on a band-colored background.
    pub fn band_style(&self, band: RatingBand) -> Style {
        Style::default().fg(self.on_band).bg(self.band_color(band))
    }
}
