//! Plain-text report generator
//!
//! Renders the console layout: one fixed-column course table per semester with
//! its GPA, followed by the cumulative GPA.

use crate::core::models::Semester;
use crate::core::report::{ReportContext, ReportGenerator};
use std::fmt::Write;

/// Column widths for code, name, credits and grade
const CODE_WIDTH: usize = 10;
const NAME_WIDTH: usize = 28;
const CREDITS_WIDTH: usize = 10;
const GRADE_WIDTH: usize = 8;

/// Fixed-width text reporter
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_semester(out: &mut String, semester: &Semester) {
        let _ = writeln!(out, "Semester: {}", semester.code());
        let _ = writeln!(
            out,
            "{:<CODE_WIDTH$}{:<NAME_WIDTH$}{:<CREDITS_WIDTH$}{:<GRADE_WIDTH$}",
            "Code", "Name", "Credits", "Grade"
        );

        for course in semester.courses() {
            let _ = writeln!(
                out,
                "{:<CODE_WIDTH$}{:<NAME_WIDTH$}{:<CREDITS_WIDTH$}{:<GRADE_WIDTH$}",
                course.code(),
                course.name(),
                course.credits(),
                course.grade()
            );
        }

        let _ = writeln!(
            out,
            "Semester GPA: {:.2}\n",
            semester.calculate_semester_gpa()
        );
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, ctx: &ReportContext) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Transcript for: {} ({})\n",
            ctx.student.name(),
            ctx.student.id()
        );

        for semester in ctx.semesters() {
            Self::write_semester(&mut out, semester);
        }

        let _ = writeln!(out, "Cumulative GPA: {:.2}", ctx.cumulative_gpa());
        out
    }
}
