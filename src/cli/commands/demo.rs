//! Demo command handler
//!
//! Assembles a two-semester sample transcript, prints its report and saves it.

use gpa_transcript::config::Config;
use gpa_transcript::core::models::{Course, Semester, Student};
use gpa_transcript::core::Transcript;
use gpa_transcript::info;
use std::path::{Path, PathBuf};

/// Default file name for the saved sample transcript
const DEMO_FILE_NAME: &str = "transcript.csv";

fn course(code: &str, name: &str, credits: f64, grade: &str) -> Course {
    Course::new(
        code.to_string(),
        name.to_string(),
        credits,
        grade.to_string(),
    )
}

/// Build the sample transcript
#[must_use]
pub fn sample_transcript() -> Transcript {
    let student = Student::new("George Lordkipanidze".to_string(), "S12345".to_string());
    let mut transcript = Transcript::new(student);

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

/// Run the demo command.
///
/// # Errors
/// Returns a printable message if the default output directory cannot be created
pub fn run(output: Option<&Path>, config: &Config) -> Result<(), String> {
    let output_path: PathBuf = if let Some(path) = output {
        path.to_path_buf()
    } else {
        let dir = PathBuf::from(&config.paths.transcripts_dir);
        std::fs::create_dir_all(&dir).map_err(|e| {
            format!(
                "✗ Failed to create transcripts directory {}: {e}",
                dir.display()
            )
        })?;
        dir.join(DEMO_FILE_NAME)
    };

    let transcript = sample_transcript();
    transcript.generate_report();

    if transcript.save_to_file(&output_path) {
        info!("Sample transcript saved to {}", output_path.display());
        println!(
            "\nDemonstration complete. Check {} for saved data.",
            output_path.display()
        );
    }
    Ok(())
}
