//! Core module for transcript assembly, GPA aggregation and export

pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod transcript;

pub use error::{ParseError, TranscriptError};
pub use transcript::Transcript;

/// Returns the current version of the `GpaTranscript` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
