//! Semester model

use super::Course;
use serde::{Deserialize, Serialize};

/// Tag that opens a semester block in the transcript CSV format
pub const SEMESTER_TAG: &str = "SEMESTER";

/// Tag that prefixes each course line in the transcript CSV format
pub const COURSE_TAG: &str = "COURSE";

/// Credit-weighted GPA over a set of courses; `0.0` when total credits are zero
#[allow(clippy::float_cmp)]
pub(crate) fn weighted_gpa<'a, I>(courses: I) -> f64
where
    I: IntoIterator<Item = &'a Course>,
{
    let (total_points, total_credits) = courses
        .into_iter()
        .fold((0.0, 0.0), |(points, credits), course| {
            (points + course.grade_points(), credits + course.credits())
        });

    if total_credits == 0.0 {
        0.0
    } else {
        total_points / total_credits
    }
}

/// A named group of courses taken together
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Semester {
    /// Semester identifier (e.g., "2025A0")
    code: String,

    /// Courses in insertion order; duplicates by code are allowed
    courses: Vec<Course>,
}

impl Semester {
    /// Create an empty semester
    #[must_use]
    pub const fn new(code: String) -> Self {
        Self {
            code,
            courses: Vec::new(),
        }
    }

    /// Semester identifier
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Courses in the order they were added
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Append a course. No duplicate check is made.
    pub fn add_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Sum of credit hours across all courses
    #[must_use]
    pub fn total_credits(&self) -> f64 {
        self.courses.iter().map(Course::credits).sum()
    }

    /// Sum of quality points across all courses
    #[must_use]
    pub fn total_grade_points(&self) -> f64 {
        self.courses.iter().map(Course::grade_points).sum()
    }

    /// Semester GPA
    ///
    /// # Returns
    /// Total quality points divided by total credits, or `0.0` when the
    /// semester carries no credits.
    #[must_use]
    pub fn calculate_semester_gpa(&self) -> f64 {
        weighted_gpa(&self.courses)
    }

    /// Encode as a `SEMESTER,<code>` header followed by one `COURSE,...` line
    /// per course. Every line is newline-terminated.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut out = format!("{SEMESTER_TAG},{}\n", self.code);
        for course in &self.courses {
            out.push_str(COURSE_TAG);
            out.push(',');
            out.push_str(&course.serialize());
            out.push('\n');
        }
        out
    }
}
