//! CLI command handlers for `GpaTranscript`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod config;
pub mod demo;
pub mod gpa;
pub mod report;
