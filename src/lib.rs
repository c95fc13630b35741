//! # stress-meter
//!
//! Two small stress-assessment tools for the terminal.
//!
//! - **Rating meter**: a slider over the 0-10 scale. Every movement maps the
//!   rating to a stress band with a status line, a color, and advice.
//! - **Questionnaire**: three 0-10 questions (sleep quality, workload, mood)
//!   scored into a 0-100 stress percentage, shown as a colored bar with an
//!   interpretation.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐  │
//! │  │ events  │───▶│   app    │───▶│   ui    │───▶│ Terminal│  │
//! │  │ (input) │    │ (state)  │    │(ratatui)│    │         │  │
//! │  └─────────┘    └────┬─────┘    └─────────┘    └─────────┘  │
//! │                      ▼                                      │
//! │                 ┌──────────┐                                │
//! │                 │  assess  │◀── questionnaire ◀── input     │
//! │                 │ (rules)  │                                │
//! │                 └──────────┘                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`assess`]**: pure scoring and classification rules
//! - **[`app`]** / **[`events`]** / **[`ui`]**: the interactive meter
//! - **[`questionnaire`]** / **[`input`]**: the console questionnaire
//! - **[`settings`]**: layered configuration
//! - **[`logging`]**: tracing setup
//!
//! ## Usage
//!
//! ```bash
//! # Interactive slider
//! stress-meter meter
//!
//! # Console questionnaire
//! stress-meter quiz
//!
//! # Score known answers
//! stress-meter score --sleep 6 --workload 4 --mood 7
//! ```
//!
//! ### As a library
//!
//! ```
//! use stress_meter::assess::{classify, classify_percentage, render_meter, score, RatingBand, StressBand};
//!
//! assert_eq!(classify(7).band, RatingBand::Moderate);
//!
//! let percentage = score(5, 5, 5);
//! assert_eq!(percentage, 50);
//! assert_eq!(classify_percentage(i32::from(percentage)).1, StressBand::High);
//! assert_eq!(render_meter(50, 50).filled, 25);
//! ```

pub mod app;
pub mod assess;
pub mod events;
pub mod input;
pub mod logging;
pub mod questionnaire;
pub mod settings;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, MeterDisplay};
pub use assess::{Answers, Assessment, RatingBand, RatingLevel, RatingResult, StressBand};
pub use input::InputError;
pub use questionnaire::Questionnaire;
pub use settings::{ColorChoice, Settings};
