//! Error types for transcript parsing and persistence

use std::path::PathBuf;
use thiserror::Error;

/// Failure while decoding a single record of the transcript CSV format
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A course record had fewer than the four `code,name,credits,grade` fields
    #[error("expected 4 comma-separated course fields, found {found} in '{line}'")]
    FieldCount {
        /// The offending record
        line: String,
        /// Number of fields present
        found: usize,
    },

    /// The credits field was non-empty but not a number
    #[error("invalid credits value '{value}'")]
    InvalidCredits {
        /// The raw credits text
        value: String,
    },

    /// A line started with a tag other than `SEMESTER` or `COURSE`
    #[error("unknown record tag '{tag}'")]
    UnknownRecord {
        /// The unrecognized tag
        tag: String,
    },

    /// A `COURSE` line appeared before any `SEMESTER` line
    #[error("course record appears before any semester record")]
    CourseOutsideSemester,

    /// A `SEMESTER` line had no code field
    #[error("semester record has no code")]
    MissingSemesterCode,
}

/// Errors surfaced by transcript import and export
#[derive(Error, Debug)]
pub enum TranscriptError {
    /// The transcript file could not be opened or read
    #[error("could not access file {}: {source}", .path.display())]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The transcript file was opened but writing to it failed
    #[error("could not write file {}: {source}", .path.display())]
    Write {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A line of a saved transcript could not be decoded
    #[error("line {line_no}: {source}")]
    Parse {
        /// 1-based line number within the input
        line_no: usize,
        /// What went wrong on that line
        #[source]
        source: ParseError,
    },
}

/// Result alias for transcript operations
pub type Result<T> = std::result::Result<T, TranscriptError>;
