//! Percentage bands for questionnaire results.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Stress band for a 0-100 percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StressBand {
    Low,
    Moderate,
    High,
    Critical,
}

impl StressBand {
    /// Interpretation line printed under the meter.
    pub fn interpretation(&self) -> &'static str {
        match self {
            StressBand::Critical => {
                "CRITICAL: High stress detected. It's time to prioritize rest and relaxation."
            }
            StressBand::High => {
                "HIGH: Elevated stress level. Take a moment to breathe and manage your workload."
            }
            StressBand::Moderate => {
                "MODERATE: Stress is manageable. Keep an eye on your self-care."
            }
            StressBand::Low => "LOW: You seem relaxed and well-managed. Great job!",
        }
    }
}

/// Inclusive lower bounds of the upper three bands.
///
/// Anything below `moderate` is [`StressBand::Low`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandThresholds {
    pub moderate: u8,
    pub high: u8,
    pub critical: u8,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            moderate: 25,
            high: 50,
            critical: 75,
        }
    }
}

impl BandThresholds {
    /// Band for a percentage. Out-of-range values are clamped to 0-100 first.
    pub fn band_for(&self, percentage: i32) -> StressBand {
        let percentage = clamp_percentage(percentage);
        if percentage >= self.critical {
            StressBand::Critical
        } else if percentage >= self.high {
            StressBand::High
        } else if percentage >= self.moderate {
            StressBand::Moderate
        } else {
            StressBand::Low
        }
    }

    /// Check that the bounds are ascending and within 0-100.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.moderate < self.high && self.high < self.critical,
            "band thresholds must be strictly ascending (moderate {} < high {} < critical {})",
            self.moderate,
            self.high,
            self.critical
        );
        ensure!(
            self.critical <= 100,
            "critical threshold {} exceeds 100",
            self.critical
        );
        Ok(())
    }
}

/// Clamp an arbitrary integer into the 0-100 percentage range.
pub fn clamp_percentage(percentage: i32) -> u8 {
    percentage.clamp(0, 100) as u8
}

/// Classify a percentage with the standard 25/50/75 bounds.
///
/// Returns the interpretation string and the band.
pub fn classify_percentage(percentage: i32) -> (&'static str, StressBand) {
    let band = BandThresholds::default().band_for(percentage);
    (band.interpretation(), band)
}
