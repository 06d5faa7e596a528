//! Integration tests for transcript assembly, GPA aggregation and CSV persistence

use gpa_transcript::core::models::{Course, GradeScale, Semester, Student};
use gpa_transcript::core::report::{ReportContext, ReportFormat};
use gpa_transcript::core::{ParseError, Transcript, TranscriptError};
use std::fs;
use std::path::PathBuf;

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples/transcript.csv")
}

fn course(code: &str, name: &str, credits: f64, grade: &str) -> Course {
    Course::new(
        code.to_string(),
        name.to_string(),
        credits,
        grade.to_string(),
    )
}

fn george() -> Transcript {
    let mut transcript = Transcript::new(Student::new(
        "George Lordkipanidze".to_string(),
        "S12345".to_string(),
    ));

    let mut fall = Semester::new("2025A0".to_string());
    fall.add_course(course("CSC319", "Object-Oriented Design", 3.0, "A"));
    fall.add_course(course("ENG101", "English Composition", 3.0, "B+"));
    transcript.add_semester(fall);

    let mut spring = Semester::new("2025B0".to_string());
    spring.add_course(course("CSC223", "Data Structures", 3.0, "A-"));
    spring.add_course(course("MAT223", "Discrete Math", 3.0, "B"));
    transcript.add_semester(spring);

    transcript
}

#[test]
fn test_quality_points_follow_scale() {
    let c = course("CSC319", "Object-Oriented Design", 3.0, "A");
    assert!((c.grade_points() - 12.0).abs() < 1e-9);

    let expected = GradeScale::lookup("B-").unwrap_or(0.0) * 4.0;
    assert!((course("X", "Y", 4.0, "B-").grade_points() - expected).abs() < 1e-9);
}

#[test]
fn test_cumulative_is_credit_weighted_not_semester_averaged() {
    let mut transcript = Transcript::new(Student::new("Ada".to_string(), "S1".to_string()));

    let mut first = Semester::new("2025A0".to_string());
    first.add_course(course("CSC319", "OOD", 3.0, "A"));
    first.add_course(course("ENG101", "Composition", 3.0, "B+"));
    transcript.add_semester(first);

    // 3.0 GPA over 6 credits, split unevenly
    let mut second = Semester::new("2025B0".to_string());
    second.add_course(course("HIS100", "History", 2.0, "B"));
    second.add_course(course("BIO100", "Biology", 4.0, "B"));
    transcript.add_semester(second);

    let student = transcript.student();
    assert!((student.semesters()[0].calculate_semester_gpa() - 3.65).abs() < 1e-9);
    assert!((student.semesters()[1].calculate_semester_gpa() - 3.0).abs() < 1e-9);

    let total_points = 12.0 + 9.9 + 6.0 + 12.0;
    let expected = total_points / 12.0;
    assert!((student.calculate_cumulative_gpa() - expected).abs() < 1e-9);
}

#[test]
fn test_cumulative_weights_unequal_semesters() {
    let mut transcript = Transcript::new(Student::new("Ada".to_string(), "S1".to_string()));

    let mut heavy = Semester::new("2025A0".to_string());
    for code in ["A1", "A2", "A3", "A4"] {
        heavy.add_course(course(code, "Heavy", 4.0, "A"));
    }
    transcript.add_semester(heavy);

    let mut light = Semester::new("2025B0".to_string());
    light.add_course(course("B1", "Light", 1.0, "F"));
    transcript.add_semester(light);

    // 64 points over 17 credits, not (4.0 + 0.0) / 2
    let gpa = transcript.student().calculate_cumulative_gpa();
    assert!((gpa - 64.0 / 17.0).abs() < 1e-9);
    assert!((gpa - 2.0).abs() > 1.0);
}

#[test]
fn test_save_writes_line_tagged_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transcript.csv");

    assert!(george().save_to_file(&path));

    let written = fs::read_to_string(&path).unwrap();
    let expected = fs::read_to_string(sample_path()).unwrap();
    assert_eq!(written, expected);
}

#[test]
fn test_save_truncates_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transcript.csv");
    fs::write(&path, "stale content that is much longer than anything else\n".repeat(50)).unwrap();

    let mut transcript = Transcript::new(Student::new("Ada".to_string(), "S1".to_string()));
    transcript.add_semester(Semester::new("2026A0".to_string()));
    assert!(transcript.save_to_file(&path));

    assert_eq!(fs::read_to_string(&path).unwrap(), "SEMESTER,2026A0\n");
}

#[test]
fn test_save_to_unwritable_path_returns_normally() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("transcript.csv");

    assert!(!george().save_to_file(&path));
    assert!(!path.exists());

    let err = george().export_csv(&path).unwrap_err();
    assert!(matches!(err, TranscriptError::Io { .. }));
    assert!(err.to_string().contains("no_such_dir"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_save_reports_write_failure_after_open() {
    // Opening /dev/full succeeds but every write fails with ENOSPC
    let full = std::path::Path::new("/dev/full");
    if !full.exists() {
        return;
    }

    assert!(!george().save_to_file(full));

    let err = george().export_csv(full).unwrap_err();
    assert!(matches!(err, TranscriptError::Write { .. }));
    assert!(err.to_string().starts_with("could not write file /dev/full"));
    assert!(full.exists());
}

#[test]
fn test_load_sample_file() {
    let transcript = Transcript::load_from_file(
        &sample_path(),
        "George Lordkipanidze".to_string(),
        "S12345".to_string(),
    )
    .unwrap();

    assert_eq!(transcript, george());
    assert!((transcript.student().calculate_cumulative_gpa() - 3.5).abs() < 1e-9);
}

#[test]
fn test_load_reports_bad_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.csv");
    fs::write(&path, "SEMESTER,2025A0\nCOURSE,CSC100,Intro,lots,A\n").unwrap();

    let err = Transcript::load_from_file(&path, String::new(), String::new()).unwrap_err();
    match err {
        TranscriptError::Parse { line_no, source } => {
            assert_eq!(line_no, 2);
            assert_eq!(
                source,
                ParseError::InvalidCredits {
                    value: "lots".to_string()
                }
            );
        }
        other => panic!("expected a parse error, got {other}"),
    }
}

#[test]
fn test_course_round_trip_without_commas() {
    let courses = [
        course("CSC319", "Object-Oriented Design", 3.0, "A"),
        course("LAB101", "Lab Section", 1.5, "C+"),
        course("IND999", "Independent Study", 0.0, "P"),
        course("", "", 2.25, ""),
    ];

    for original in courses {
        let parsed = Course::deserialize(&original.serialize()).unwrap();
        assert_eq!(parsed, original);
    }
}

#[test]
fn test_empty_credits_and_grade_deserialize_to_zero() {
    let c = Course::deserialize("CSC100,Intro,,").unwrap();
    assert!(c.credits().abs() < f64::EPSILON);
    assert!(c.grade_points().abs() < f64::EPSILON);
}

#[test]
fn test_render_both_formats() {
    let transcript = george();

    let text = transcript.render_report(ReportFormat::Text);
    assert!(text.contains("Semester: 2025B0\n"));
    assert!(text.contains("Semester GPA: 3.35\n"));
    assert!(text.ends_with("Cumulative GPA: 3.50\n"));

    let markdown = transcript.render_report(ReportFormat::Markdown);
    assert!(markdown.contains("## Semester 2025B0"));
    assert!(markdown.contains("**Cumulative GPA:** 3.50"));
}

#[test]
fn test_generate_markdown_report_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.md");
    let transcript = george();

    ReportFormat::Markdown
        .reporter()
        .generate(
            &ReportContext::new(transcript.student()),
            &path,
        )
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Transcript: George Lordkipanidze (S12345)"));
}
