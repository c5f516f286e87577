//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::{CONFIG_FILE_NAME, LANGUAGE_PLACEHOLDER};
use crate::error::{Result, TransdiffError};
use crate::report::ReportOptions;
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(TransdiffError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            TransdiffError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must exist. Otherwise `.transdiff.yaml` in `cwd` is
    /// used when present, and the defaults when it is not.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        let default_path = cwd.join(CONFIG_FILE_NAME);
        if default_path.is_file() {
            tracing::debug!(path = %default_path.display(), "loading config");
            Self::load(&default_path)
        } else {
            tracing::debug!("no config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            TransdiffError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            TransdiffError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - refs, `locales_dir` and `output_dir` must be non-empty
    /// - `context_lines` must be positive
    /// - `baseline_language` and `languages` entries must be non-empty directory names
    /// - `file_pattern` must contain `{lang}` and must not contain a path separator
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("base_ref", &self.base_ref),
            ("target_ref", &self.target_ref),
            ("locales_dir", &self.locales_dir),
            ("output_dir", &self.output_dir),
        ] {
            if value.trim().is_empty() {
                return Err(invalid(format!("{} must not be empty", name)));
            }
        }

        if self.context_lines == 0 {
            return Err(invalid("context_lines must be greater than 0".to_string()));
        }

        validate_language("baseline_language", &self.baseline_language)?;
        for language in &self.languages {
            validate_language("languages", language)?;
        }

        if !self.file_pattern.contains(LANGUAGE_PLACEHOLDER) {
            return Err(invalid(format!(
                "file_pattern must contain '{}' (found '{}')",
                LANGUAGE_PLACEHOLDER, self.file_pattern
            )));
        }
        if self.file_pattern.contains(['/', '\\']) {
            return Err(invalid(format!(
                "file_pattern must be a file name, not a path (found '{}'). \
                 Use output_dir for the directory.",
                self.file_pattern
            )));
        }

        Ok(())
    }

    /// Report file name for `language`.
    pub fn report_file_name(&self, language: &str) -> String {
        self.file_pattern.replace(LANGUAGE_PLACEHOLDER, language)
    }

    /// Output directory resolved against `cwd`.
    pub fn output_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.output_dir)
    }

    /// Report options derived from this config.
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions::with_baseline(self.baseline_language.clone()).only(self.languages.clone())
    }
}

fn validate_language(field: &str, language: &str) -> Result<()> {
    if language.trim().is_empty() {
        return Err(invalid(format!("{} entries must be non-empty", field)));
    }
    if language.contains(['/', '\\']) {
        return Err(invalid(format!(
            "{} must be a language directory name, not a path (found '{}')",
            field, language
        )));
    }
    Ok(())
}

fn invalid(message: String) -> TransdiffError {
    TransdiffError::UserError(format!("config validation failed: {}", message))
}
