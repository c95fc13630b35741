//! Scoring and classification rules.
//!
//! Everything in this module is pure: values go in, labels and numbers come
//! out. The TUI and the questionnaire are thin layers on top.
//!
//! ## Submodules
//!
//! - [`rating`]: 0-10 rating classification for the interactive meter
//! - [`score`]: questionnaire answers to a 0-100 stress percentage
//! - [`band`]: percentage bands and their interpretations
//! - [`meter`]: text bar and report rendering
//!
//! ## Data Flow
//!
//! ```text
//! slider position ──▶ RatingLevel::from_slider() ──▶ classify() ──▶ RatingResult
//!
//! Answers ──▶ Assessment::from_answers()
//!                  │
//!                  ├──▶ score (percentage)
//!                  ├──▶ BandThresholds::band_for()
//!                  └──▶ render_meter() / render_report()
//! ```

pub mod band;
pub mod meter;
pub mod rating;
pub mod score;

pub use band::{classify_percentage, BandThresholds, StressBand};
pub use meter::{render_meter, render_report, Meter, DEFAULT_METER_WIDTH};
pub use rating::{classify, RatingBand, RatingLevel, RatingResult, MAX_RATING, MIN_RATING};
pub use score::{score, Answers, Assessment, MAX_ANSWER};
