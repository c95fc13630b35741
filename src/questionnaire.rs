//! The three-question console questionnaire.

use std::io::{BufRead, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::assess::meter::{render_meter_with, render_report};
use crate::assess::{Answers, Assessment, BandThresholds, MAX_ANSWER};
use crate::input::prompt_in_range;
use crate::settings::Settings;

/// Questions in the order they are asked.
pub const QUESTIONS: [&str; 3] = [
    "1. How would you rate your sleep quality last night (0=Restless, 10=Deeply Rested)? ",
    "2. How manageable is your current workload/to-do list (0=Overwhelmed, 10=Fully Controlled)? ",
    "3. How would you describe your current mood (0=Highly Irritable, 10=Calm and Happy)? ",
];

const BANNER: &str = "--- Mental Wellness Stress Meter ---";
const INSTRUCTIONS: &str =
    "Please rate the following aspects of your life on a scale of 0 (Worst) to 10 (Best).";

/// Runs the questionnaire against a reader/writer pair.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    delay: Duration,
    meter_width: usize,
    color: bool,
    bands: BandThresholds,
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::from_settings(&Settings::default(), false)
    }
}

impl Questionnaire {
    /// Build from resolved settings. `color` is the already-resolved
    /// color decision for the output stream.
    pub fn from_settings(settings: &Settings, color: bool) -> Self {
        Self {
            delay: Duration::from_millis(settings.delay_ms),
            meter_width: settings.meter_width,
            color,
            bands: settings.bands,
        }
    }

    /// Set the pause before the report is shown.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Ask all three questions and print the report.
    pub fn run<R, W>(&self, reader: &mut R, writer: &mut W) -> Result<Assessment>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(writer, "{}", BANNER)?;
        writeln!(writer, "{}\n", INSTRUCTIONS)?;

        let answers = self.collect_answers(reader, writer)?;

        writeln!(writer, "\nCalculating your stress level...")?;
        writer.flush()?;
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        let assessment = self.assess(answers);
        write!(writer, "{}", self.report(&assessment))?;
        writer.flush()?;
        Ok(assessment)
    }

    /// Prompt for the three answers in order.
    pub fn collect_answers<R, W>(&self, reader: &mut R, writer: &mut W) -> Result<Answers>
    where
        R: BufRead,
        W: Write,
    {
        let mut values = [0u8; 3];
        for (value, question) in values.iter_mut().zip(QUESTIONS) {
            let answer = prompt_in_range(reader, writer, question, 0, i64::from(MAX_ANSWER))?;
            *value = u8::try_from(answer)?;
        }
        let [sleep_quality, workload, mood] = values;
        Ok(Answers::new(sleep_quality, workload, mood))
    }

    /// Score a set of answers with this questionnaire's bands.
    pub fn assess(&self, answers: Answers) -> Assessment {
        let assessment = Assessment::from_answers(answers, &self.bands);
        info!(
            relaxation = assessment.relaxation,
            percentage = assessment.percentage,
            band = ?assessment.band,
            "questionnaire scored"
        );
        assessment
    }

    /// Render the report block for an assessment.
    pub fn report(&self, assessment: &Assessment) -> String {
        let meter = render_meter_with(
            i32::from(assessment.percentage),
            self.meter_width,
            &self.bands,
        );
        render_report(assessment, &meter, self.color)
    }
}

/// Write an assessment to `path` as pretty JSON.
pub fn export_assessment(assessment: &Assessment, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(assessment)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write export to {}", path.display()))?;
    info!(path = %path.display(), "exported assessment");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assess::StressBand;
    use std::io::Cursor;

    fn quiet() -> Questionnaire {
        Questionnaire::default().with_delay(Duration::ZERO)
    }

    fn run(input: &str) -> (Result<Assessment>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = quiet().run(&mut reader, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_full_run() {
        let (result, output) = run("5\n5\n5\n");
        let assessment = result.unwrap();

        assert_eq!(assessment.percentage, 50);
        assert_eq!(assessment.band, StressBand::High);
        assert!(output.starts_with(BANNER));
        for question in QUESTIONS {
            assert!(output.contains(question));
        }
        assert!(output.contains("Calculating your stress level..."));
        assert!(output.contains(" 50% |"));
        assert!(output.contains("Interpretation: HIGH:"));
    }

    #[test]
    fn test_answers_map_to_questions() {
        let mut reader = Cursor::new(b"1\n2\n3\n".to_vec());
        let mut output = Vec::new();
        let answers = quiet().collect_answers(&mut reader, &mut output).unwrap();
        assert_eq!(answers, Answers::new(1, 2, 3));
    }

    #[test]
    fn test_retries_inside_run() {
        let (result, output) = run("ten\n10\n99\n10\n10\n");
        let assessment = result.unwrap();
        assert_eq!(assessment.percentage, 0);
        assert_eq!(assessment.band, StressBand::Low);
        assert_eq!(
            output.matches("Invalid input. Please enter a whole number.").count(),
            1
        );
        assert_eq!(
            output.matches("Input must be between 0 and 10. Please try again.").count(),
            1
        );
    }

    #[test]
    fn test_eof_aborts() {
        let (result, output) = run("4\n");
        assert!(result.is_err());
        assert!(!output.contains("Calculating"));
    }

    #[test]
    fn test_custom_width() {
        let settings = Settings {
            meter_width: 10,
            ..Settings::default()
        };
        let questionnaire = Questionnaire::from_settings(&settings, false);
        let assessment = questionnaire.assess(Answers::new(0, 0, 0));
        let report = questionnaire.report(&assessment);
        assert!(report.contains(&format!("[{}] 100%", "█".repeat(10))));
    }

    #[test]
    fn test_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assessment.json");
        let assessment = quiet().assess(Answers::new(7, 7, 7));

        export_assessment(&assessment, &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["percentage"], 30);
        assert_eq!(value["band"], "moderate");
        assert_eq!(value["relaxation"], 21);
    }
}
