//! Line-tagged CSV format for saved transcripts
//!
//! ```text
//! SEMESTER,<semester code>
//! COURSE,<code>,<name>,<credits>,<grade>
//! COURSE,...
//! SEMESTER,...
//! ```
//!
//! Fields are written verbatim with no quoting or escaping. Student identity is
//! not part of the format.

use crate::core::error::{ParseError, Result, TranscriptError};
use crate::core::models::semester::{COURSE_TAG, SEMESTER_TAG};
use crate::core::models::{Course, Semester, Student};
use crate::debug;

/// Encode every semester of `student`, in order, as transcript CSV
#[must_use]
pub fn serialize_transcript(student: &Student) -> String {
    student.semesters().iter().map(Semester::serialize).collect()
}

/// Decode transcript CSV into the semesters of `student`.
///
/// Semesters are appended after any the student already has. Blank lines are
/// skipped.
///
/// # Errors
/// Returns [`TranscriptError::Parse`] with the 1-based line number when a line
/// has an unknown tag, a course appears before any semester, a `SEMESTER` tag
/// has no code field, or a course record cannot be decoded.
pub fn parse_transcript(mut student: Student, text: &str) -> Result<Student> {
    let mut current: Option<Semester> = None;

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let line_no = idx + 1;
        let at_line = |source: ParseError| TranscriptError::Parse { line_no, source };

        let (tag, rest) = line
            .split_once(',')
            .map_or((line, None), |(tag, rest)| (tag, Some(rest)));
        match tag {
            SEMESTER_TAG => {
                let code = rest.ok_or_else(|| at_line(ParseError::MissingSemesterCode))?;
                if let Some(done) = current.take() {
                    student.add_semester(done);
                }
                debug!("Reading semester {code} at line {line_no}");
                current = Some(Semester::new(code.to_string()));
            }
            COURSE_TAG => {
                let semester = current
                    .as_mut()
                    .ok_or_else(|| at_line(ParseError::CourseOutsideSemester))?;
                let course = Course::deserialize(rest.unwrap_or_default()).map_err(at_line)?;
                semester.add_course(course);
            }
            other => {
                return Err(at_line(ParseError::UnknownRecord {
                    tag: other.to_string(),
                }));
            }
        }
    }

    if let Some(done) = current {
        student.add_semester(done);
    }

    Ok(student)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "SEMESTER,2025A0\n\
                          COURSE,CSC319,Object-Oriented Design,3,A\n\
                          COURSE,ENG101,English Composition,3,B+\n\
                          SEMESTER,2025B0\n\
                          COURSE,CSC223,Data Structures,3,A-\n\
                          COURSE,MAT223,Discrete Math,3,B\n";

    fn student() -> Student {
        Student::new("George Lordkipanidze".to_string(), "S12345".to_string())
    }

    #[test]
    fn test_parse_sample() {
        let parsed = parse_transcript(student(), SAMPLE).unwrap();

        assert_eq!(parsed.semesters().len(), 2);
        assert_eq!(parsed.semesters()[0].code(), "2025A0");
        assert_eq!(parsed.semesters()[1].code(), "2025B0");
        assert_eq!(parsed.semesters()[1].courses()[1].name(), "Discrete Math");
        assert!((parsed.semesters()[0].calculate_semester_gpa() - 3.65).abs() < 1e-9);
    }

    #[test]
    fn test_serialize_matches_parse_input() {
        let parsed = parse_transcript(student(), SAMPLE).unwrap();
        assert_eq!(serialize_transcript(&parsed), SAMPLE);
    }

    #[test]
    fn test_empty_semester_survives() {
        let parsed = parse_transcript(student(), "SEMESTER,2025A0\nSEMESTER,2025B0\n").unwrap();
        assert_eq!(parsed.semesters().len(), 2);
        assert!(parsed.semesters()[0].courses().is_empty());
    }

    #[test]
    fn test_empty_semester_code_round_trips() {
        let mut original = student();
        original.add_semester(Semester::new(String::new()));

        let parsed = parse_transcript(student(), &serialize_transcript(&original)).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_bare_course_tag_is_field_count_error() {
        let err = parse_transcript(student(), "SEMESTER,2025A0\nCOURSE\n").unwrap_err();
        assert!(matches!(
            err,
            TranscriptError::Parse {
                line_no: 2,
                source: ParseError::FieldCount { found: 1, .. }
            }
        ));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let parsed =
            parse_transcript(student(), "\nSEMESTER,2025A0\n\nCOURSE,CSC100,Intro,,\n").unwrap();
        assert_eq!(parsed.semesters()[0].courses().len(), 1);
    }

    #[test]
    fn test_course_before_semester() {
        let err = parse_transcript(student(), "COURSE,CSC100,Intro,3,A\n").unwrap_err();
        assert!(matches!(
            err,
            TranscriptError::Parse {
                line_no: 1,
                source: ParseError::CourseOutsideSemester
            }
        ));
    }

    #[test]
    fn test_unknown_tag() {
        let err = parse_transcript(student(), "SEMESTER,2025A0\nSTUDENT,Ada\n").unwrap_err();
        assert!(matches!(
            err,
            TranscriptError::Parse {
                line_no: 2,
                source: ParseError::UnknownRecord { .. }
            }
        ));
    }

    #[test]
    fn test_missing_semester_code() {
        let err = parse_transcript(student(), "SEMESTER\n").unwrap_err();
        assert!(matches!(
            err,
            TranscriptError::Parse {
                line_no: 1,
                source: ParseError::MissingSemesterCode
            }
        ));
    }

    #[test]
    fn test_bad_credits_reports_line() {
        let text = "SEMESTER,2025A0\nCOURSE,CSC100,Intro,3,A\nCOURSE,CSC101,Intro II,x,B\n";
        let err = parse_transcript(student(), text).unwrap_err();
        assert!(matches!(
            err,
            TranscriptError::Parse {
                line_no: 3,
                source: ParseError::InvalidCredits { .. }
            }
        ));
        assert!(err.to_string().starts_with("line 3:"));
    }
}
