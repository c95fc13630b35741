//! Layered configuration.
//!
//! Settings resolve in order: built-in defaults, an optional TOML file, then
//! `STRESS_METER_*` environment variables. Command line flags are applied on
//! top by the binary.
//!
//! ```toml
//! initial_level = 5.0
//! step = 0.5
//! meter_width = 50
//! delay_ms = 1000
//! color = "auto"
//!
//! [bands]
//! moderate = 25
//! high = 50
//! critical = 75
//! ```

use std::io::IsTerminal;
use std::path::Path;

use anyhow::{ensure, Result};
use config::{Config, Environment, File, FileFormat};
use crossterm::style::force_color_output;
use serde::Deserialize;

use crate::assess::{BandThresholds, DEFAULT_METER_WIDTH, MAX_RATING};

/// Prefix for environment overrides, e.g. `STRESS_METER_DELAY_MS=0`.
pub const ENV_PREFIX: &str = "STRESS_METER";

/// When to emit ANSI colors in the questionnaire report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Decide whether to color output written to stdout.
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }

    /// Resolve the choice and configure crossterm's styling to match.
    ///
    /// `Always` forces escape codes even when `NO_COLOR` is set.
    pub fn apply(self) -> bool {
        if self == ColorChoice::Always {
            force_color_output(true);
        }
        self.enabled()
    }
}

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Slider position when the meter opens.
    pub initial_level: f64,
    /// Slider movement per arrow key press.
    pub step: f64,
    /// Width of the questionnaire bar in characters.
    pub meter_width: usize,
    /// Pause before the questionnaire report, in milliseconds.
    pub delay_ms: u64,
    pub color: ColorChoice,
    pub bands: BandThresholds,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_level: 5.0,
            step: 0.5,
            meter_width: DEFAULT_METER_WIDTH,
            delay_ms: 1000,
            color: ColorChoice::Auto,
            bands: BandThresholds::default(),
        }
    }
}

impl Settings {
    /// Load settings from an optional file and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Load settings with an explicit environment source.
    pub fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        let config = builder
            .add_source(env.prefix_separator("_").separator("__").try_parsing(true))
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.initial_level.is_finite()
                && (0.0..=f64::from(MAX_RATING)).contains(&self.initial_level),
            "initial_level must be between 0 and {}, got {}",
            MAX_RATING,
            self.initial_level
        );
        ensure!(
            self.step.is_finite() && self.step > 0.0,
            "step must be a positive number, got {}",
            self.step
        );
        ensure!(self.meter_width > 0, "meter_width must be at least 1");
        self.bands.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn empty_env() -> Environment {
        Environment::with_prefix(ENV_PREFIX).source(Some(config::Map::new()))
    }

    fn env_with(pairs: &[(&str, &str)]) -> Environment {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<config::Map<String, String>>();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::load_with_env(None, empty_env()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.meter_width, 50);
        assert_eq!(settings.delay_ms, 1000);
    }

    #[test]
    fn test_file_overrides() {
        let file = write_config(
            r#"
            delay_ms = 0
            color = "never"

            [bands]
            critical = 80
            "#,
        );
        let settings = Settings::load_with_env(Some(file.path()), empty_env()).unwrap();
        assert_eq!(settings.delay_ms, 0);
        assert_eq!(settings.color, ColorChoice::Never);
        assert_eq!(settings.bands.critical, 80);
        assert_eq!(settings.bands.high, 50);
        assert_eq!(settings.initial_level, 5.0);
    }

    #[test]
    fn test_env_overrides_file() {
        let file = write_config("meter_width = 30\n");
        let env = env_with(&[
            ("STRESS_METER_METER_WIDTH", "20"),
            ("STRESS_METER_INITIAL_LEVEL", "8.5"),
        ]);
        let settings = Settings::load_with_env(Some(file.path()), env).unwrap();
        assert_eq!(settings.meter_width, 20);
        assert_eq!(settings.initial_level, 8.5);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(Settings::load_with_env(Some(&missing), empty_env()).is_err());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = write_config("initial_level = 11.0\n");
        assert!(Settings::load_with_env(Some(file.path()), empty_env()).is_err());

        let file = write_config("step = 0.0\n");
        assert!(Settings::load_with_env(Some(file.path()), empty_env()).is_err());

        let file = write_config("[bands]\nmoderate = 60\n");
        assert!(Settings::load_with_env(Some(file.path()), empty_env()).is_err());
    }

    #[test]
    fn test_color_choice_fixed() {
        assert!(ColorChoice::Always.enabled());
        assert!(!ColorChoice::Never.enabled());
    }

    #[test]
    fn test_color_always_overrides_no_color() {
        std::env::set_var("NO_COLOR", "1");
        assert!(ColorChoice::Always.apply());

        let bar = crate::assess::render_meter(90, 10).styled(true);
        assert!(bar.contains("\u{1b}[38;"), "no color code in {:?}", bar);
    }
}
