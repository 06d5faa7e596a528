//! Course model

use super::GradeScale;
use crate::core::error::ParseError;
use serde::{Deserialize, Serialize};

/// Number of comma-separated fields in a serialized course record
const COURSE_FIELDS: usize = 4;

/// A completed course on a transcript.
///
/// Courses are immutable once constructed; a semester owns its courses by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course code (e.g., "CSC319")
    code: String,

    /// Course title (e.g., "Object-Oriented Design")
    name: String,

    /// Credit hours (can be fractional)
    credits: f64,

    /// Letter grade as recorded (e.g., "B+")
    grade: String,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `code` - Course code
    /// * `name` - Course title
    /// * `credits` - Credit hours; not validated, negative values propagate arithmetically
    /// * `grade` - Letter grade; grades missing from [`GradeScale`] earn zero points
    #[must_use]
    pub const fn new(code: String, name: String, credits: f64, grade: String) -> Self {
        Self {
            code,
            name,
            credits,
            grade,
        }
    }

    /// Course code
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Course title
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Credit hours
    #[must_use]
    pub const fn credits(&self) -> f64 {
        self.credits
    }

    /// Letter grade
    #[must_use]
    pub fn grade(&self) -> &str {
        &self.grade
    }

    /// Quality points earned: grade points times credit hours.
    ///
    /// An unrecognized grade contributes `0.0` while its credits still count
    /// toward GPA denominators.
    #[must_use]
    pub fn grade_points(&self) -> f64 {
        GradeScale::points_or_zero(&self.grade) * self.credits
    }

    /// Encode as `code,name,credits,grade`.
    ///
    /// No quoting is applied, so a comma inside `code` or `name` will not
    /// survive [`Course::deserialize`].
    #[must_use]
    pub fn serialize(&self) -> String {
        format!("{},{},{},{}", self.code, self.name, self.credits, self.grade)
    }

    /// Decode a `code,name,credits,grade` record.
    ///
    /// An empty credits field reads as `0.0`. Fields past the fourth are ignored.
    ///
    /// # Errors
    /// Returns [`ParseError::FieldCount`] when fewer than four fields are present
    /// and [`ParseError::InvalidCredits`] when the credits field is non-empty but
    /// not a number.
    pub fn deserialize(line: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = line.split(',').take(COURSE_FIELDS).collect();
        let [code, name, credits_text, grade] = fields[..] else {
            return Err(ParseError::FieldCount {
                line: line.to_string(),
                found: fields.len(),
            });
        };

        let credits = parse_credits(credits_text)?;

        Ok(Self::new(
            code.to_string(),
            name.to_string(),
            credits,
            grade.to_string(),
        ))
    }
}

fn parse_credits(text: &str) -> Result<f64, ParseError> {
    if text.is_empty() {
        return Ok(0.0);
    }
    text.trim()
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidCredits {
            value: text.to_string(),
        })
}
