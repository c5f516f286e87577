//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for translation reports.
///
/// This struct represents the contents of `.transdiff.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Diff settings
    // =========================================================================
    /// Ref holding the currently released translations.
    #[serde(default = "default_base_ref")]
    pub base_ref: String,

    /// Ref holding the translations about to be released.
    #[serde(default = "default_target_ref")]
    pub target_ref: String,

    /// Directory holding `<language>/<file>.json`, relative to the repo root.
    #[serde(default = "default_locales_dir")]
    pub locales_dir: String,

    /// Lines of context passed to `git diff -U`.
    #[serde(default = "default_context_lines")]
    pub context_lines: u32,

    // =========================================================================
    // Report settings
    // =========================================================================
    /// Language shown next to every other language for context.
    #[serde(default = "default_baseline_language")]
    pub baseline_language: String,

    /// Languages to write reports for (empty writes all).
    #[serde(default)]
    pub languages: Vec<String>,

    /// Directory reports are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Report file name; `{lang}` is replaced by the language code.
    #[serde(default = "default_file_pattern")]
    pub file_pattern: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_ref: default_base_ref(),
            target_ref: default_target_ref(),
            locales_dir: default_locales_dir(),
            context_lines: default_context_lines(),
            baseline_language: default_baseline_language(),
            languages: Vec::new(),
            output_dir: default_output_dir(),
            file_pattern: default_file_pattern(),
        }
    }
}
