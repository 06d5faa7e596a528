//! Letter-grade to grade-point lookup table

/// Recognized letter grades and their point values, highest first.
const GRADE_POINTS: [(&str, f64); 12] = [
    ("A+", 4.0),
    ("A", 4.0),
    ("A-", 3.7),
    ("B+", 3.3),
    ("B", 3.0),
    ("B-", 2.7),
    ("C+", 2.3),
    ("C", 2.0),
    ("C-", 1.7),
    ("D+", 1.3),
    ("D", 1.0),
    ("F", 0.0),
];

/// Fixed mapping from letter grade to grade points on a 4.0 scale.
///
/// The table is compiled in and never changes at runtime. Unknown grades are
/// not an error: [`GradeScale::lookup`] returns `None` and callers substitute
/// zero points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GradeScale;

impl GradeScale {
    /// Look up the point value of a letter grade (exact, case-sensitive match)
    #[must_use]
    pub fn lookup(grade: &str) -> Option<f64> {
        GRADE_POINTS
            .iter()
            .find(|(symbol, _)| *symbol == grade)
            .map(|&(_, points)| points)
    }

    /// Point value of a grade, or `0.0` when the grade is not on the scale
    #[must_use]
    pub fn points_or_zero(grade: &str) -> f64 {
        Self::lookup(grade).unwrap_or(0.0)
    }

    /// All `(grade, points)` pairs in descending order
    #[must_use]
    pub const fn entries() -> &'static [(&'static str, f64)] {
        &GRADE_POINTS
    }
}
