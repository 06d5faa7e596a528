//! Library for `GpaTranscript`
//! Contains the transcript model, GPA aggregation, CSV persistence and reporting

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::get_version;
