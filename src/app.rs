//! Application state for the interactive meter.
//!
//! The slider position lives in [`App`]. Every change goes through
//! [`App::set_slider`], which reclassifies the rating and replaces the
//! current [`MeterDisplay`]. Rendering only ever reads the latest display.

use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::assess::{classify, RatingLevel, RatingResult, MAX_RATING, MIN_RATING};
use crate::settings::Settings;
use crate::ui::Theme;

const SLIDER_MIN: f64 = MIN_RATING as f64;
const SLIDER_MAX: f64 = MAX_RATING as f64;

/// Values shown in the meter's display regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterDisplay {
    /// "Current Rating: N/10".
    pub rating_text: String,
    pub result: RatingResult,
}

impl MeterDisplay {
    /// Compute the display for a rating.
    pub fn for_level(level: RatingLevel) -> Self {
        Self {
            rating_text: format!("Current Rating: {}", level),
            result: classify(level.value()),
        }
    }
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    slider: f64,
    step: f64,
    display: MeterDisplay,

    pub theme: Theme,

    /// Screen area of the slider track from the last draw, for mouse input.
    pub slider_track: Option<Rect>,
}

impl App {
    /// Create a new App with the slider at `initial` and the given key step.
    pub fn new(initial: f64, step: f64, theme: Theme) -> Self {
        let slider = clamp_slider(initial);
        Self {
            running: true,
            show_help: false,
            slider,
            step,
            display: MeterDisplay::for_level(RatingLevel::from_slider(slider)),
            theme,
            slider_track: None,
        }
    }

    /// Create an App from resolved settings.
    pub fn from_settings(settings: &Settings, theme: Theme) -> Self {
        Self::new(settings.initial_level, settings.step, theme)
    }

    /// Current slider position (0.0-10.0).
    pub fn slider(&self) -> f64 {
        self.slider
    }

    /// Current whole-number rating.
    pub fn level(&self) -> RatingLevel {
        self.display.result.level
    }

    /// The display values for the most recent slider position.
    pub fn display(&self) -> &MeterDisplay {
        &self.display
    }

    /// Move the slider and recompute the display.
    ///
    /// The previous display is discarded.
    pub fn set_slider(&mut self, value: f64) -> &MeterDisplay {
        let slider = clamp_slider(value);
        let level = RatingLevel::from_slider(slider);
        let previous_band = self.display.result.band;

        self.slider = slider;
        self.display = MeterDisplay::for_level(level);

        debug!(slider, level = level.value(), "slider moved");
        if self.display.result.band != previous_band {
            info!(
                from = previous_band.label(),
                to = self.display.result.band.label(),
                "stress band changed"
            );
        }
        &self.display
    }

    /// Move the slider by `delta`.
    pub fn nudge(&mut self, delta: f64) {
        self.set_slider(self.slider + delta);
    }

    /// Move the slider up by one key step.
    pub fn step_up(&mut self) {
        self.nudge(self.step);
    }

    /// Move the slider down by one key step.
    pub fn step_down(&mut self) {
        self.nudge(-self.step);
    }

    /// Jump to an exact rating.
    pub fn set_level(&mut self, level: u8) {
        self.set_slider(f64::from(level));
    }

    /// Set the slider from a screen column on the track.
    ///
    /// Returns false if there is no track yet or the column is outside it.
    pub fn set_from_column(&mut self, column: u16) -> bool {
        let Some(track) = self.slider_track else {
            return false;
        };
        if column < track.x || column >= track.x + track.width {
            return false;
        }
        let span = f64::from(track.width.saturating_sub(1).max(1));
        let offset = f64::from(column - track.x);
        self.set_slider(offset / span * SLIDER_MAX);
        true
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

fn clamp_slider(value: f64) -> f64 {
    if value.is_nan() {
        SLIDER_MIN
    } else {
        value.clamp(SLIDER_MIN, SLIDER_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assess::RatingBand;

    fn app() -> App {
        App::new(5.0, 0.5, Theme::dark())
    }

    #[test]
    fn test_initial_display() {
        let app = app();
        assert_eq!(app.display().rating_text, "Current Rating: 5/10");
        assert_eq!(app.display().result.band, RatingBand::Moderate);
    }

    #[test]
    fn test_set_slider_replaces_display() {
        let mut app = app();
        let display = app.set_slider(8.7).clone();
        assert_eq!(display.rating_text, "Current Rating: 8/10");
        assert_eq!(display.result.band, RatingBand::High);

        app.set_slider(1.2);
        assert_eq!(app.display().rating_text, "Current Rating: 1/10");
        assert_eq!(app.display().result.band, RatingBand::Low);
        assert_eq!(app.level().value(), 1);
    }

    #[test]
    fn test_set_slider_clamps() {
        let mut app = app();
        app.set_slider(14.0);
        assert_eq!(app.slider(), 10.0);
        app.set_slider(-3.0);
        assert_eq!(app.slider(), 0.0);
        app.set_slider(f64::NAN);
        assert_eq!(app.slider(), 0.0);
    }

    #[test]
    fn test_stepping() {
        let mut app = app();
        app.step_up();
        assert_eq!(app.slider(), 5.5);
        assert_eq!(app.level().value(), 5);
        app.step_up();
        assert_eq!(app.level().value(), 6);

        app.set_level(10);
        app.step_up();
        assert_eq!(app.slider(), 10.0);

        app.set_level(0);
        app.step_down();
        assert_eq!(app.slider(), 0.0);
    }

    #[test]
    fn test_initial_is_clamped() {
        let app = App::new(25.0, 0.5, Theme::dark());
        assert_eq!(app.level().value(), 10);
    }

    #[test]
    fn test_set_from_column() {
        let mut app = app();
        assert!(!app.set_from_column(10));

        app.slider_track = Some(Rect::new(10, 3, 11, 1));
        assert!(app.set_from_column(10));
        assert_eq!(app.slider(), 0.0);
        assert!(app.set_from_column(20));
        assert_eq!(app.slider(), 10.0);
        assert!(app.set_from_column(15));
        assert_eq!(app.level().value(), 5);

        assert!(!app.set_from_column(9));
        assert!(!app.set_from_column(21));
        assert_eq!(app.level().value(), 5);
    }

    #[test]
    fn test_quit_and_help() {
        let mut app = app();
        app.toggle_help();
        assert!(app.show_help);
        app.toggle_help();
        assert!(!app.show_help);
        app.quit();
        assert!(!app.running);
    }
}
