//! GPA command handler

use super::report::load;
use gpa_transcript::verbose;
use std::path::Path;

/// Print each semester's GPA and the cumulative GPA of a saved transcript.
///
/// # Errors
/// Returns a printable message if the transcript cannot be loaded
pub fn run(input_file: &Path) -> Result<(), String> {
    let transcript = load(input_file, "", "")?;
    let student = transcript.student();

    for semester in student.semesters() {
        println!(
            "{}",
            gpa_line(
                semester.code(),
                semester.calculate_semester_gpa(),
                semester.total_credits()
            )
        );
        verbose!(
            "  {} courses, {:.2} quality points",
            semester.courses().len(),
            semester.total_grade_points()
        );
    }

    println!(
        "{}",
        gpa_line(
            "Cumulative",
            student.calculate_cumulative_gpa(),
            student.total_credits()
        )
    );
    Ok(())
}

fn gpa_line(label: &str, gpa: f64, credits: f64) -> String {
    format!("{label:<12}{gpa:>6.2}  ({credits} credits)")
}
