//! Data models for `GpaTranscript`

pub mod course;
pub mod grade_scale;
pub mod semester;
pub mod student;

pub use course::Course;
pub use grade_scale::GradeScale;
pub use semester::Semester;
pub use student::Student;
