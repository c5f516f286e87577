//! Tests for config functionality.

use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::TransdiffError;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.base_ref, "release");
    assert_eq!(config.target_ref, "release-candidate");
    assert_eq!(config.locales_dir, "public/locales");
    assert_eq!(config.context_lines, 200_000);
    assert_eq!(config.baseline_language, "en");
    assert!(config.languages.is_empty());
    assert_eq!(config.output_dir, ".temp-translations");
    assert_eq!(config.file_pattern, "translations.{lang}.csv");
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
base_ref: v1.2.0
locales_dir: app/i18n
"#;
    let config = Config::from_yaml(yaml).unwrap();

    // Specified values should be used
    assert_eq!(config.base_ref, "v1.2.0");
    assert_eq!(config.locales_dir, "app/i18n");

    // Unspecified values should use defaults
    assert_eq!(config.target_ref, "release-candidate");
    assert_eq!(config.baseline_language, "en");
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
base_ref: main
target_ref: develop
locales_dir: locales
context_lines: 5000
baseline_language: de
languages:
  - fr
  - es
output_dir: out/reports
file_pattern: "{lang}-review.csv"
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.base_ref, "main");
    assert_eq!(config.target_ref, "develop");
    assert_eq!(config.locales_dir, "locales");
    assert_eq!(config.context_lines, 5000);
    assert_eq!(config.baseline_language, "de");
    assert_eq!(config.languages, vec!["fr", "es"]);
    assert_eq!(config.output_dir, "out/reports");
    assert_eq!(config.report_file_name("fr"), "fr-review.csv");
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
base_ref: main
future_option: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.base_ref, "main");
}

#[test]
fn test_invalid_yaml_is_user_error() {
    let err = Config::from_yaml("base_ref: [unclosed").unwrap_err();
    assert!(matches!(err, TransdiffError::UserError(_)));
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_validate_rejects_zero_context_lines() {
    let err = Config::from_yaml("context_lines: 0").unwrap_err();
    assert!(err.to_string().contains("context_lines must be greater than 0"));
}

#[test]
fn test_validate_rejects_empty_ref() {
    let err = Config::from_yaml("target_ref: \"\"").unwrap_err();
    assert!(err.to_string().contains("target_ref must not be empty"));
}

#[test]
fn test_validate_rejects_pattern_without_placeholder() {
    let err = Config::from_yaml("file_pattern: report.csv").unwrap_err();
    assert!(err.to_string().contains("must contain '{lang}'"));
}

#[test]
fn test_validate_rejects_pattern_with_directory() {
    let err = Config::from_yaml("file_pattern: \"out/{lang}.csv\"").unwrap_err();
    assert!(err.to_string().contains("not a path"));
}

#[test]
fn test_validate_rejects_language_path() {
    let err = Config::from_yaml("baseline_language: en/US").unwrap_err();
    assert!(err.to_string().contains("baseline_language"));

    let err = Config::from_yaml("languages: [\"\"]").unwrap_err();
    assert!(err.to_string().contains("languages entries must be non-empty"));
}

#[test]
fn test_yaml_round_trip() {
    let mut config = Config::default();
    config.languages = vec!["fr".to_string()];

    let yaml = config.to_yaml().unwrap();
    assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_report_file_name_default_pattern() {
    let config = Config::default();
    assert_eq!(config.report_file_name("pt-BR"), "translations.pt-BR.csv");
}

#[test]
fn test_report_options_follow_config() {
    let config = Config::from_yaml("baseline_language: de\nlanguages: [fr]").unwrap();
    let options = config.report_options();

    assert_eq!(options.baseline, "de");
    assert_eq!(options.languages, vec!["fr"]);
}

#[test]
fn test_discover_uses_defaults_without_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::discover(None, temp_dir.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_discover_reads_config_in_cwd() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "base_ref: v2\n").unwrap();

    let config = Config::discover(None, temp_dir.path()).unwrap();
    assert_eq!(config.base_ref, "v2");
}

#[test]
fn test_discover_explicit_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.yaml");

    let err = Config::discover(Some(&missing), Path::new(".")).unwrap_err();
    assert!(matches!(err, TransdiffError::UserError(_)));
    assert!(err.to_string().contains("failed to read config file"));
}
