//! Markdown report generator
//!
//! Generates transcript reports in Markdown with one table per semester. These
//! render well in GitHub, GitLab, and VS Code.

use crate::core::models::Semester;
use crate::core::report::{ReportContext, ReportGenerator};
use std::fmt::Write;

/// Markdown report generator
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generate the course table for one semester
    fn generate_semester_table(semester: &Semester) -> String {
        let mut table = String::new();

        table.push_str("| Code | Name | Credits | Grade | Points |\n");
        table.push_str("|---|---|---:|---|---:|\n");

        for course in semester.courses() {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} | {:.2} |",
                escape_cell(course.code()),
                escape_cell(course.name()),
                course.credits(),
                escape_cell(course.grade()),
                course.grade_points()
            );
        }

        table
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> String {
        let mut output = String::new();
        let _ = writeln!(
            output,
            "# Transcript: {} ({})\n",
            ctx.student.name(),
            ctx.student.id()
        );

        for semester in ctx.semesters() {
            let _ = writeln!(output, "## Semester {}\n", semester.code());
            if semester.courses().is_empty() {
                output.push_str("_No courses recorded._\n\n");
            } else {
                output.push_str(&Self::generate_semester_table(semester));
                output.push('\n');
            }
            let _ = writeln!(
                output,
                "**Semester GPA:** {:.2}\n",
                semester.calculate_semester_gpa()
            );
        }

        let _ = writeln!(
            output,
            "**Cumulative GPA:** {:.2} ({} credits, {} courses)",
            ctx.cumulative_gpa(),
            ctx.total_credits(),
            ctx.course_count()
        );

        output
    }
}

/// Pipes would split a table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
