//! Configuration constants and default value functions.

use crate::report::DEFAULT_BASELINE;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".transdiff.yaml";

/// Placeholder replaced by the language code in `file_pattern`.
pub const LANGUAGE_PLACEHOLDER: &str = "{lang}";

// Default value functions for serde
pub(crate) fn default_base_ref() -> String {
    "release".to_string()
}
pub(crate) fn default_target_ref() -> String {
    "release-candidate".to_string()
}
pub(crate) fn default_locales_dir() -> String {
    "public/locales".to_string()
}
/// Large enough that whole locale files become context, so that nesting
/// can be rebuilt from unchanged lines.
pub(crate) fn default_context_lines() -> u32 {
    200_000
}
pub(crate) fn default_baseline_language() -> String {
    DEFAULT_BASELINE.to_string()
}
pub(crate) fn default_output_dir() -> String {
    ".temp-translations".to_string()
}
pub(crate) fn default_file_pattern() -> String {
    "translations.{lang}.csv".to_string()
}
