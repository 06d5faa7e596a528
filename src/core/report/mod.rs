//! Report generation module for transcripts
//!
//! This module renders a student's transcript as a fixed-column text report
//! (the console layout) or as Markdown, and can write either to a file.

pub mod formats;

use crate::core::error::{Result, TranscriptError};
use crate::core::models::{Semester, Student};
use std::fs;
use std::path::Path;

pub use formats::{MarkdownReporter, ReportFormat, TextReporter};

/// Data context for report generation
///
/// Borrowed view over the student being reported, with the aggregate values
/// every format needs.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Student whose record is rendered
    pub student: &'a Student,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(student: &'a Student) -> Self {
        Self { student }
    }

    /// Semesters in transcript order
    #[must_use]
    pub fn semesters(&self) -> &'a [Semester] {
        self.student.semesters()
    }

    /// Cumulative GPA across all semesters
    #[must_use]
    pub fn cumulative_gpa(&self) -> f64 {
        self.student.calculate_cumulative_gpa()
    }

    /// Total credit hours attempted
    #[must_use]
    pub fn total_credits(&self) -> f64 {
        self.student.total_credits()
    }

    /// Number of courses on the transcript
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.student.courses().count()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    fn render(&self, ctx: &ReportContext) -> String;

    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<()> {
        fs::write(output_path, self.render(ctx)).map_err(|source| TranscriptError::Io {
            path: output_path.to_path_buf(),
            source,
        })
    }
}
