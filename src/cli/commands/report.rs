//! Report command handler
//!
//! Loads a saved transcript CSV and renders it as text or Markdown, either to
//! standard output or to a file.

use gpa_transcript::config::Config;
use gpa_transcript::core::report::{ReportContext, ReportFormat};
use gpa_transcript::core::Transcript;
use gpa_transcript::{debug, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Options for a single report run
pub struct ReportRequest<'a> {
    /// Saved transcript CSV
    pub input_file: &'a Path,
    /// Student name for the header
    pub name: &'a str,
    /// Student identifier for the header
    pub id: &'a str,
    /// Requested format; falls back to config `report.format`
    pub format: Option<&'a str>,
    /// Optional output file
    pub output: Option<&'a Path>,
    /// Write to config `reports_dir` when no output file is given
    pub save: bool,
}

/// Run the report command.
///
/// # Errors
/// Returns a printable message if the format is unknown or the transcript
/// cannot be loaded or written
pub fn run(request: &ReportRequest, config: &Config) -> Result<(), String> {
    let format = resolve_format(request.format, config)?;
    let transcript = load(request.input_file, request.name, request.id)?;

    let output_path = match request.output {
        Some(path) => Some(path.to_path_buf()),
        None if request.save => Some(default_output_path(
            request.input_file,
            format,
            config,
        )?),
        None => None,
    };

    match output_path {
        Some(output_path) => {
            format
                .reporter()
                .generate(&ReportContext::new(transcript.student()), &output_path)
                .map_err(|e| format!("✗ Failed to write {format} report: {e}"))?;
            println!("✓ Report generated: {}", output_path.display());
            info!("Report exported to: {}", output_path.display());
        }
        None => print!("{}", transcript.render_report(format)),
    }

    Ok(())
}

/// Pick the requested format, else config `report.format`, else text
fn resolve_format(requested: Option<&str>, config: &Config) -> Result<ReportFormat, String> {
    match requested.unwrap_or(config.report.format.as_str()) {
        "" => Ok(ReportFormat::default()),
        name => ReportFormat::from_str(name).map_err(|e| format!("✗ {e}. Use: text or markdown")),
    }
}

/// `<reports_dir>/<input stem>_report.<ext>`, creating `reports_dir` if needed
fn default_output_path(
    input_file: &Path,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;

    let stem = input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("transcript");
    Ok(reports_dir.join(format!("{stem}_report.{}", format.extension())))
}

/// Load a transcript, mapping failures to the CLI's message style
///
/// # Errors
/// Returns a printable message if the file cannot be read or parsed
pub fn load(input_file: &Path, name: &str, id: &str) -> Result<Transcript, String> {
    debug!("Loading transcript from {}", input_file.display());
    Transcript::load_from_file(input_file, name.to_string(), id.to_string())
        .map_err(|e| format!("✗ Failed to load {}: {e}", input_file.display()))
}
