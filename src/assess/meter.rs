//! Text rendering of the stress meter bar and report.

use crossterm::style::{Color, Stylize};

use super::band::{clamp_percentage, BandThresholds, StressBand};
use super::score::Assessment;

/// Default bar width in characters.
pub const DEFAULT_METER_WIDTH: usize = 50;
/// Width of the rule lines framing the report.
pub const REPORT_WIDTH: usize = 55;

const FILL_CHAR: char = '█';
const EMPTY_CHAR: char = '-';

/// A rendered percentage bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meter {
    pub percentage: u8,
    pub filled: usize,
    pub empty: usize,
    pub band: StressBand,
}

impl Meter {
    /// Total bar width.
    pub fn width(&self) -> usize {
        self.filled + self.empty
    }

    /// Bar without any escape codes.
    pub fn plain(&self) -> String {
        let mut bar = String::with_capacity(self.width() * FILL_CHAR.len_utf8());
        bar.extend(std::iter::repeat_n(FILL_CHAR, self.filled));
        bar.extend(std::iter::repeat_n(EMPTY_CHAR, self.empty));
        bar
    }

    /// Bar with the filled segment colored by band when `color` is set.
    pub fn styled(&self, color: bool) -> String {
        if !color {
            return self.plain();
        }
        let filled: String = std::iter::repeat_n(FILL_CHAR, self.filled).collect();
        let empty: String = std::iter::repeat_n(EMPTY_CHAR, self.empty).collect();
        format!("{}{}", filled.with(band_color(self.band)), empty)
    }
}

/// Terminal color for a band's filled segment.
pub fn band_color(band: StressBand) -> Color {
    match band {
        StressBand::Critical => Color::Red,
        StressBand::High => Color::Yellow,
        StressBand::Moderate | StressBand::Low => Color::Green,
    }
}

/// Render a bar of `width` characters using the standard band bounds.
///
/// `filled = floor(percentage * width / 100)`. Out-of-range percentages
/// are clamped.
pub fn render_meter(percentage: i32, width: usize) -> Meter {
    render_meter_with(percentage, width, &BandThresholds::default())
}

/// Render a bar using custom band bounds for the color.
pub fn render_meter_with(percentage: i32, width: usize, bands: &BandThresholds) -> Meter {
    let percentage = clamp_percentage(percentage);
    let filled = usize::from(percentage) * width / 100;
    Meter {
        percentage,
        filled,
        empty: width - filled,
        band: bands.band_for(i32::from(percentage)),
    }
}

/// Build the full text report for an assessment.
pub fn render_report(assessment: &Assessment, meter: &Meter, color: bool) -> String {
    let rule = "=".repeat(REPORT_WIDTH);
    let title = if color {
        format!("{}", "STRESS METER".with(band_color(meter.band)))
    } else {
        "STRESS METER".to_string()
    };

    let mut out = String::new();
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "| {}: [{}] {:>3}% |\n",
        title,
        meter.styled(color),
        assessment.percentage
    ));
    out.push_str(&rule);
    out.push_str("\n\n");
    out.push_str(&format!("Interpretation: {}\n", assessment.interpretation));
    out.push_str(&"-".repeat(REPORT_WIDTH));
    out.push('\n');
    out
}
