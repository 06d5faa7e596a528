//! Transcript: the entry point for assembling, reporting and persisting a
//! student's academic record

pub mod csv_format;

use crate::core::error::{Result, TranscriptError};
use crate::core::models::{Semester, Student};
use crate::core::report::{ReportContext, ReportFormat};
use crate::{debug, info};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

pub use csv_format::{parse_transcript, serialize_transcript};

/// A student's transcript.
///
/// Owns exactly one [`Student`]; all mutation goes through
/// [`Transcript::add_semester`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transcript {
    student: Student,
}

impl Transcript {
    /// Wrap a student
    #[must_use]
    pub const fn new(student: Student) -> Self {
        Self { student }
    }

    /// The student this transcript belongs to
    #[must_use]
    pub const fn student(&self) -> &Student {
        &self.student
    }

    /// Append a semester to the student's record
    pub fn add_semester(&mut self, semester: Semester) {
        debug!(
            "Adding semester {} ({} courses) for {}",
            semester.code(),
            semester.courses().len(),
            self.student.id()
        );
        self.student.add_semester(semester);
    }

    /// Render the transcript report in the given format
    #[must_use]
    pub fn render_report(&self, format: ReportFormat) -> String {
        format.reporter().render(&ReportContext::new(&self.student))
    }

    /// Write the plain-text report to `out`
    ///
    /// # Errors
    /// Returns any error raised by the writer
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.render_report(ReportFormat::Text).as_bytes())
    }

    /// Print the plain-text report to standard output
    pub fn generate_report(&self) {
        print!("{}", self.render_report(ReportFormat::Text));
    }

    /// Write the transcript CSV to `path`, truncating any existing file.
    ///
    /// The whole document is encoded before the file is opened. If writing fails
    /// after the file was created, the partial file is removed.
    ///
    /// # Errors
    /// Returns [`TranscriptError::Io`] if the file cannot be created, or
    /// [`TranscriptError::Write`] if writing to it fails
    pub fn export_csv(&self, path: &Path) -> Result<()> {
        let content = serialize_transcript(&self.student);

        let file = File::create(path).map_err(|source| TranscriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        write_or_discard(path, file, content.as_bytes()).map_err(|source| {
            TranscriptError::Write {
                path: path.to_path_buf(),
                source,
            }
        })?;

        info!(
            "Saved {} semesters for {} to {}",
            self.student.semesters().len(),
            self.student.id(),
            path.display()
        );
        Ok(())
    }

    /// Save the transcript CSV to `path`.
    ///
    /// Failure is not fatal: a message naming the path goes to standard error
    /// and the call returns normally.
    ///
    /// # Returns
    /// `true` if the file was written
    #[must_use]
    pub fn save_to_file(&self, path: &Path) -> bool {
        match self.export_csv(path) {
            Ok(()) => true,
            Err(e) => {
                if matches!(e, TranscriptError::Write { .. }) {
                    eprintln!("Error: Could not write file {}", path.display());
                } else {
                    eprintln!("Error: Could not open file {}", path.display());
                }
                debug!("Transcript save failed: {e}");
                false
            }
        }
    }

    /// Load a transcript previously written by [`Transcript::save_to_file`].
    ///
    /// # Arguments
    /// * `path` - Transcript CSV file
    /// * `name` - Student name (not stored in the file)
    /// * `id` - Student identifier (not stored in the file)
    ///
    /// # Errors
    /// Returns [`TranscriptError::Io`] if the file cannot be read, or
    /// [`TranscriptError::Parse`] for the first malformed line
    pub fn load_from_file(path: &Path, name: String, id: String) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| TranscriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let student = parse_transcript(Student::new(name, id), &text)?;
        info!(
            "Loaded {} semesters from {}",
            student.semesters().len(),
            path.display()
        );
        Ok(Self::new(student))
    }
}

/// Write `content` to `out`. On failure, `path` is removed if it is a regular
/// file so no truncated transcript is left behind.
fn write_or_discard<W: Write>(path: &Path, mut out: W, content: &[u8]) -> io::Result<()> {
    let written = out.write_all(content).and_then(|()| out.flush());
    if written.is_err() {
        drop(out);
        if fs::metadata(path).is_ok_and(|meta| meta.is_file()) {
            let _ = fs::remove_file(path);
        }
    }
    written
}
