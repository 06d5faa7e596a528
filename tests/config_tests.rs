//! Integration tests for configuration management

use gpa_transcript::config::{Config, ConfigOverrides};

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.transcripts_dir.is_empty(),
        "Default transcripts_dir should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert_eq!(config.report.format, "text");
}

#[test]
fn test_defaults_expand_app_dir() {
    let config = Config::from_defaults();
    let app_dir = Config::get_app_dir();

    assert!(!config.paths.transcripts_dir.contains("$GPA_TRANSCRIPT"));
    assert!(config
        .paths
        .transcripts_dir
        .starts_with(app_dir.to_str().unwrap()));
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
transcripts_dir = "./transcripts"
reports_dir = "./reports"

[report]
format = "markdown"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.transcripts_dir, "./transcripts");
    assert_eq!(config.paths.reports_dir, "./reports");
    assert_eq!(config.report.format, "markdown");
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.paths.transcripts_dir, "");
    assert_eq!(config.report.format, "");
}

#[test]
fn test_config_from_toml_invalid() {
    assert!(Config::from_toml("[logging\nlevel = ").is_err());
}

#[test]
fn test_merge_defaults_fills_only_empty_fields() {
    let mut config = Config::from_toml(
        r#"
[logging]
level = "error"

[paths]
reports_dir = "/custom/reports"
"#,
    )
    .unwrap();
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.paths.reports_dir, "/custom/reports");
    assert_eq!(config.paths.transcripts_dir, defaults.paths.transcripts_dir);
    assert_eq!(config.report.format, defaults.report.format);

    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_get_set_unset() {
    let defaults = Config::from_defaults();
    let mut config = defaults.clone();

    config.set("level", "error").unwrap();
    config.set("verbose", "true").unwrap();
    config.set("transcripts-dir", "/srv/transcripts").unwrap();
    config.set("report_format", "markdown").unwrap();

    assert_eq!(config.get("level"), Some("error".to_string()));
    assert_eq!(config.get("verbose"), Some("true".to_string()));
    assert_eq!(
        config.get("transcripts_dir"),
        Some("/srv/transcripts".to_string())
    );
    assert_eq!(config.get("report-format"), Some("markdown".to_string()));

    config.unset("transcripts_dir", &defaults).unwrap();
    assert_eq!(config.paths.transcripts_dir, defaults.paths.transcripts_dir);
    config.unset("verbose", &defaults).unwrap();
    assert_eq!(config.logging.verbose, defaults.logging.verbose);
}

#[test]
fn test_set_rejects_bad_input() {
    let mut config = Config::from_defaults();

    let err = config.set("verbose", "maybe").unwrap_err();
    assert!(err.contains("verbose"));

    let err = config.set("token", "abc").unwrap_err();
    assert!(err.contains("Unknown config key"));
    assert!(config.get("token").is_none());
    assert!(config.unset("token", &Config::from_defaults()).is_err());
}

#[test]
fn test_apply_overrides() {
    let mut config = Config::from_defaults();
    let original_reports = config.paths.reports_dir.clone();

    config.apply_overrides(&ConfigOverrides {
        level: Some("debug".to_string()),
        verbose: Some(false),
        transcripts_dir: Some("/tmp/transcripts".to_string()),
        ..Default::default()
    });

    assert_eq!(config.logging.level, "debug");
    assert!(!config.logging.verbose);
    assert_eq!(config.paths.transcripts_dir, "/tmp/transcripts");
    assert_eq!(config.paths.reports_dir, original_reports);
}

#[test]
fn test_display_lists_all_sections() {
    let rendered = Config::from_defaults().to_string();

    assert!(rendered.contains("[logging]"));
    assert!(rendered.contains("[paths]"));
    assert!(rendered.contains("transcripts_dir = "));
    assert!(rendered.contains("[report]"));
}
