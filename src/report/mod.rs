//! Per-language CSV review reports.
//!
//! A report lists every changed key of one language that a translator has to
//! look at. A row is included when the baseline language added a value for
//! the key, or when the language itself did. Keys that were only removed
//! everywhere are left out.

mod render;

#[cfg(test)]
mod tests;

use crate::changes::{ChangeSet, aggregate};
use crate::diff::parse_events;
use indexmap::IndexMap;
use render::{data_row, header_row};

/// Language whose changes are shown next to every other language's rows.
pub const DEFAULT_BASELINE: &str = "en";

/// Options controlling which reports are built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Baseline language code.
    pub baseline: String,
    /// Languages to render. Empty renders every language.
    pub languages: Vec<String>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            baseline: DEFAULT_BASELINE.to_string(),
            languages: Vec::new(),
        }
    }
}

impl ReportOptions {
    /// Options for a custom baseline language.
    pub fn with_baseline(baseline: impl Into<String>) -> Self {
        Self {
            baseline: baseline.into(),
            ..Self::default()
        }
    }

    /// Restrict rendering to `languages`.
    pub fn only(mut self, languages: Vec<String>) -> Self {
        self.languages = languages;
        self
    }

    fn renders(&self, language: &str) -> bool {
        self.languages.is_empty() || self.languages.iter().any(|l| l == language)
    }
}

/// CSV rows for one language, header first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageReport {
    language: String,
    rows: Vec<String>,
}

impl LanguageReport {
    fn new(language: &str, baseline: &str) -> Self {
        Self {
            language: language.to_string(),
            rows: vec![header_row(language, baseline)],
        }
    }

    /// Language code of this report.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// All rows including the header.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Header row.
    pub fn header(&self) -> &str {
        &self.rows[0]
    }

    /// Number of keys in the report, excluding the header.
    pub fn row_count(&self) -> usize {
        self.rows.len() - 1
    }

    /// Rows joined with newlines, without a trailing newline.
    pub fn to_csv(&self) -> String {
        self.rows.join("\n")
    }
}

/// Reports by language, in order of each language's first included row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSet {
    reports: IndexMap<String, LanguageReport>,
}

impl ReportSet {
    /// Report for `language`, if any of its rows were included.
    pub fn get(&self, language: &str) -> Option<&LanguageReport> {
        self.reports.get(language)
    }

    /// Iterate reports in order.
    pub fn iter(&self) -> impl Iterator<Item = &LanguageReport> {
        self.reports.values()
    }

    /// Languages that have a report.
    pub fn languages(&self) -> Vec<&str> {
        self.reports.keys().map(String::as_str).collect()
    }

    /// Number of reports.
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Returns true when no language had an included row.
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

/// Build one report per language from a change set.
///
/// Walks the change set once. For each `(file, key)` and each language with
/// a record, the row is included when the baseline record has a new value
/// or the language's own record does. A missing baseline record counts as
/// "no baseline new value".
pub fn build_reports(changes: &ChangeSet, options: &ReportOptions) -> ReportSet {
    let baseline = options.baseline.as_str();
    let mut reports: IndexMap<String, LanguageReport> = IndexMap::new();

    for (file, key, languages) in changes.entries() {
        let baseline_record = languages.get(baseline);
        let baseline_has_new = baseline_record.is_some_and(|r| r.new_value.is_some());

        for (language, record) in languages {
            if !options.renders(language) {
                continue;
            }
            if !baseline_has_new && record.new_value.is_none() {
                tracing::trace!(file, key, language = %language, "dropping removal-only row");
                continue;
            }

            let old_value = record.old_value.as_deref().unwrap_or("");
            let new_value = record.new_value.as_deref().unwrap_or("");

            let row = if language == baseline {
                data_row(&[file, key, old_value, new_value])
            } else {
                let baseline_old = baseline_record
                    .and_then(|r| r.old_value.as_deref())
                    .unwrap_or("");
                let baseline_new = baseline_record
                    .and_then(|r| r.new_value.as_deref())
                    .unwrap_or("");
                data_row(&[file, key, baseline_old, baseline_new, old_value, new_value])
            };

            reports
                .entry(language.clone())
                .or_insert_with(|| LanguageReport::new(language, baseline))
                .rows
                .push(row);
        }
    }

    ReportSet { reports }
}

/// Parse, aggregate and report in one call.
///
/// This is the whole pipeline from raw diff text to rendered reports. It is
/// a pure function of its inputs and never fails; an empty or unrecognized
/// diff yields an empty [`ReportSet`].
pub fn reports_from_diff(diff_text: &str, options: &ReportOptions) -> ReportSet {
    let changes = aggregate(parse_events(diff_text));
    if changes.is_empty() {
        tracing::info!("no translation changes found in diff");
    }
    build_reports(&changes, options)
}
