//! Rating classification for the interactive meter.
//!
//! A rating is a whole number on the 0-10 scale. Each rating falls into one
//! of three bands, and each band carries a fixed status line, color and
//! piece of advice.

use std::fmt;

use serde::Serialize;

/// Lowest selectable rating.
pub const MIN_RATING: u8 = 0;
/// Highest selectable rating.
pub const MAX_RATING: u8 = 10;

/// A rating on the 0-10 scale.
///
/// Construction always clamps into range, so a `RatingLevel` is valid by
/// the time it reaches [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RatingLevel(u8);

impl RatingLevel {
    /// Create a rating, clamping anything above [`MAX_RATING`].
    pub fn new(level: u8) -> Self {
        Self(level.min(MAX_RATING))
    }

    /// Convert a continuous slider position into a rating.
    ///
    /// The fractional part is dropped (2.9 becomes 2), values outside the
    /// slider domain are clamped, and NaN maps to the minimum.
    pub fn from_slider(value: f64) -> Self {
        if value.is_nan() {
            return Self(MIN_RATING);
        }
        let clamped = value.clamp(f64::from(MIN_RATING), f64::from(MAX_RATING));
        Self(clamped.trunc() as u8)
    }

    /// Returns the numeric rating.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for RatingLevel {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}

impl fmt::Display for RatingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_RATING)
    }
}

/// Stress band for a 0-10 rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingBand {
    /// Ratings 0 through 3.
    Low,
    /// Ratings 4 through 7.
    Moderate,
    /// Ratings 8 through 10.
    High,
}

impl RatingBand {
    /// Band for a rating. Upper bounds are inclusive: 3 is Low, 7 is Moderate.
    pub fn for_level(level: RatingLevel) -> Self {
        match level.value() {
            0..=3 => RatingBand::Low,
            4..=7 => RatingBand::Moderate,
            _ => RatingBand::High,
        }
    }

    /// Status line shown in the meter panel.
    pub fn status(&self) -> &'static str {
        match self {
            RatingBand::Low => "Low Stress: Relaxed and focused.",
            RatingBand::Moderate => "Moderate Stress: Manageable pressure.",
            RatingBand::High => "High Stress: Urgent need for rest/de-stressing.",
        }
    }

    /// Advice shown under the status line.
    pub fn advice(&self) -> &'static str {
        match self {
            RatingBand::Low => "Keep up the good work! Maybe enjoy a moment in nature.",
            RatingBand::Moderate => {
                "Take a short break. Try deep breathing or mindfulness exercises."
            }
            RatingBand::High => {
                "Stop and take 15 minutes for self-care. Focus on what truly matters: family, health, and rest."
            }
        }
    }

    /// Panel color as a `#rrggbb` string.
    pub fn color_hex(&self) -> &'static str {
        match self {
            RatingBand::Low => "#a8e063",
            RatingBand::Moderate => "#ffc371",
            RatingBand::High => "#ff4e50",
        }
    }

    /// Panel color as RGB components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            RatingBand::Low => (0xa8, 0xe0, 0x63),
            RatingBand::Moderate => (0xff, 0xc3, 0x71),
            RatingBand::High => (0xff, 0x4e, 0x50),
        }
    }

    /// Short label for logs and the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            RatingBand::Low => "Low",
            RatingBand::Moderate => "Moderate",
            RatingBand::High => "High",
        }
    }
}

/// Outcome of classifying a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingResult {
    pub level: RatingLevel,
    pub band: RatingBand,
    pub status: &'static str,
    pub color: &'static str,
    pub advice: &'static str,
}

/// Classify a rating into its band, status, color and advice.
///
/// Total over the whole 0-10 range; larger inputs are clamped to 10.
pub fn classify(level: u8) -> RatingResult {
    let level = RatingLevel::new(level);
    let band = RatingBand::for_level(level);
    RatingResult {
        level,
        band,
        status: band.status(),
        color: band.color_hex(),
        advice: band.advice(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_band_boundaries() {
        assert_eq!(classify(0).band, RatingBand::Low);
        assert_eq!(classify(3).band, RatingBand::Low);
        assert_eq!(classify(4).band, RatingBand::Moderate);
        assert_eq!(classify(7).band, RatingBand::Moderate);
        assert_eq!(classify(8).band, RatingBand::High);
        assert_eq!(classify(10).band, RatingBand::High);
    }

    #[test]
    fn test_classify_is_total() {
        for level in MIN_RATING..=MAX_RATING {
            let result = classify(level);
            assert_eq!(result.level.value(), level);
            assert!(!result.status.is_empty());
            assert!(!result.advice.is_empty());
            assert!(result.color.starts_with('#'));
        }
    }

    #[test]
    fn test_classify_texts() {
        let result = classify(5);
        assert_eq!(result.status, "Moderate Stress: Manageable pressure.");
        assert_eq!(result.color, "#ffc371");
        assert_eq!(
            result.advice,
            "Take a short break. Try deep breathing or mindfulness exercises."
        );
    }

    #[test]
    fn test_classify_clamps_large_input() {
        let result = classify(42);
        assert_eq!(result.level.value(), 10);
        assert_eq!(result.band, RatingBand::High);
    }

    #[test]
    fn test_from_slider_truncates() {
        assert_eq!(RatingLevel::from_slider(2.9).value(), 2);
        assert_eq!(RatingLevel::from_slider(3.999).value(), 3);
        assert_eq!(RatingLevel::from_slider(7.5).value(), 7);
        assert_eq!(RatingLevel::from_slider(10.0).value(), 10);
    }

    #[test]
    fn test_from_slider_clamps() {
        assert_eq!(RatingLevel::from_slider(-0.5).value(), 0);
        assert_eq!(RatingLevel::from_slider(12.3).value(), 10);
        assert_eq!(RatingLevel::from_slider(f64::NAN).value(), 0);
    }

    #[test]
    fn test_hex_matches_rgb() {
        for band in [RatingBand::Low, RatingBand::Moderate, RatingBand::High] {
            let (r, g, b) = band.rgb();
            assert_eq!(band.color_hex(), format!("#{:02x}{:02x}{:02x}", r, g, b));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(RatingLevel::new(5).to_string(), "5/10");
    }
}
