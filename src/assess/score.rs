//! Questionnaire scoring.
//!
//! Three 0-10 answers (higher is better) are summed into a relaxation
//! score. The stress percentage is the inverse of that sum, normalised to
//! 0-100.

use serde::Serialize;

use super::band::{BandThresholds, StressBand};

/// Highest value a single answer can take.
pub const MAX_ANSWER: u8 = 10;
/// Highest possible relaxation score (three answers at [`MAX_ANSWER`]).
pub const MAX_RELAXATION: u32 = 3 * MAX_ANSWER as u32;

/// Answers to the three questionnaire questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Answers {
    /// Sleep quality last night (0 = restless, 10 = deeply rested).
    pub sleep_quality: u8,
    /// How manageable the workload is (0 = overwhelmed, 10 = fully controlled).
    pub workload: u8,
    /// Current mood (0 = highly irritable, 10 = calm and happy).
    pub mood: u8,
}

impl Answers {
    /// Create a set of answers, clamping each into 0-10.
    pub fn new(sleep_quality: u8, workload: u8, mood: u8) -> Self {
        Self {
            sleep_quality: sleep_quality.min(MAX_ANSWER),
            workload: workload.min(MAX_ANSWER),
            mood: mood.min(MAX_ANSWER),
        }
    }

    /// Sum of the three answers (0-30).
    pub fn relaxation(&self) -> u32 {
        u32::from(self.sleep_quality) + u32::from(self.workload) + u32::from(self.mood)
    }

    /// Distance from a fully relaxed score (0-30).
    pub fn stress_points(&self) -> u32 {
        MAX_RELAXATION.saturating_sub(self.relaxation())
    }

    /// Stress percentage for these answers.
    pub fn stress_percentage(&self) -> u8 {
        percentage_of(self.stress_points())
    }
}

/// Compute the stress percentage for three 0-10 answers.
///
/// `round((30 - (a + b + c)) / 30 * 100)`, clamped to 0-100. Rounding is
/// half-to-even. With a denominator of 30 the fraction is always a multiple
/// of 1/3, so no exact .5 case exists and half-away-from-zero gives
/// identical results.
pub fn score(sleep_quality: u8, workload: u8, mood: u8) -> u8 {
    Answers::new(sleep_quality, workload, mood).stress_percentage()
}

fn percentage_of(stress_points: u32) -> u8 {
    let ratio = f64::from(stress_points) / f64::from(MAX_RELAXATION);
    (ratio * 100.0).round_ties_even().clamp(0.0, 100.0) as u8
}

/// A scored questionnaire, ready for display or export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub answers: Answers,
    pub relaxation: u32,
    pub stress_points: u32,
    pub percentage: u8,
    pub band: StressBand,
    pub interpretation: &'static str,
}

impl Assessment {
    /// Score the answers and classify the result.
    pub fn from_answers(answers: Answers, bands: &BandThresholds) -> Self {
        let percentage = answers.stress_percentage();
        let band = bands.band_for(i32::from(percentage));
        Self {
            answers,
            relaxation: answers.relaxation(),
            stress_points: answers.stress_points(),
            percentage,
            band,
            interpretation: band.interpretation(),
        }
    }
}
