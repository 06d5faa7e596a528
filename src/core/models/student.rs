//! Student model

use super::semester::weighted_gpa;
use super::{Course, Semester};
use serde::{Deserialize, Serialize};

/// A student and the semesters on their record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Student {
    /// Full name (e.g., "George Lordkipanidze")
    name: String,

    /// Student identifier (e.g., "S12345")
    id: String,

    /// Semesters in insertion order
    semesters: Vec<Semester>,
}

impl Student {
    /// Create a student with no semesters
    #[must_use]
    pub const fn new(name: String, id: String) -> Self {
        Self {
            name,
            id,
            semesters: Vec::new(),
        }
    }

    /// Student name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Student identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Semesters in the order they were added
    #[must_use]
    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    /// Append a semester
    pub fn add_semester(&mut self, semester: Semester) {
        self.semesters.push(semester);
    }

    /// Every course across every semester, in transcript order
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.semesters.iter().flat_map(|s| s.courses().iter())
    }

    /// Credit hours attempted across all semesters
    #[must_use]
    pub fn total_credits(&self) -> f64 {
        self.courses().map(Course::credits).sum()
    }

    /// Cumulative GPA.
    ///
    /// Credit-weighted over the flattened set of all courses, so semester
    /// boundaries have no effect and an empty semester never changes the result.
    /// Returns `0.0` when no credits have been attempted.
    #[must_use]
    pub fn calculate_cumulative_gpa(&self) -> f64 {
        weighted_gpa(self.courses())
    }
}
