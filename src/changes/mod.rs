//! Aggregation of changed translation entries.
//!
//! The [`Aggregator`] folds parser events into a [`ChangeSet`]: a map of
//! file -> key -> language -> [`ChangeRecord`]. Every level keeps
//! first-insertion order so reports follow the order of the diff.

use crate::diff::{DiffEvent, Sign};
use indexmap::IndexMap;
use serde::Serialize;


/// Old and new value of one key in one language file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRecord {
    /// Value on the removal side, if a `-` line was seen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    /// Value on the addition side, if a `+` line was seen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
}

impl ChangeRecord {
    fn set(&mut self, sign: Sign, value: Option<String>) {
        match sign {
            Sign::Old => self.old_value = value,
            Sign::New => self.new_value = value,
        }
    }
}

/// Records for one key, by language.
pub type LanguageChanges = IndexMap<String, ChangeRecord>;

/// All detected changes of one diff, keyed by file, key and language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChangeSet {
    files: IndexMap<String, IndexMap<String, LanguageChanges>>,
}

impl ChangeSet {
    /// Create an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the record for `(file, key, language)`.
    pub fn upsert(&mut self, file: &str, key: &str, language: &str) -> &mut ChangeRecord {
        self.files
            .entry(file.to_string())
            .or_default()
            .entry(key.to_string())
            .or_default()
            .entry(language.to_string())
            .or_default()
    }

    /// Look up a single record.
    pub fn record(&self, file: &str, key: &str, language: &str) -> Option<&ChangeRecord> {
        self.files.get(file)?.get(key)?.get(language)
    }

    /// Iterate `(file, key, records by language)` in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &LanguageChanges)> {
        self.files.iter().flat_map(|(file, keys)| {
            keys.iter()
                .map(move |(key, languages)| (file.as_str(), key.as_str(), languages))
        })
    }

    /// Languages in order of first appearance.
    pub fn languages(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for (_, _, languages) in self.entries() {
            for language in languages.keys() {
                if !seen.contains(&language.as_str()) {
                    seen.push(language);
                }
            }
        }
        seen
    }

    /// Number of `(file, key, language)` records.
    pub fn len(&self) -> usize {
        self.entries().map(|(_, _, languages)| languages.len()).sum()
    }

    /// Returns true when no changed entry was found.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Serialize as pretty-printed JSON (file -> key -> language -> values).
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Folds [`DiffEvent`]s into a [`ChangeSet`].
///
/// Tracks the current `(file, language)` from the latest file boundary and
/// applies it to every following entry. A second value for the same side of
/// a record replaces the first.
#[derive(Debug, Default)]
pub struct Aggregator {
    current: Option<(String, String)>,
    changes: ChangeSet,
}

impl Aggregator {
    /// Create an aggregator with no file context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event.
    pub fn apply(&mut self, event: DiffEvent) {
        match event {
            DiffEvent::FileBoundary { filename, language } => {
                self.current = Some((filename, language));
            }
            DiffEvent::EntryChanged {
                key, sign, value, ..
            } => {
                let Some((file, language)) = &self.current else {
                    tracing::trace!(key = %key, "entry without file context");
                    return;
                };
                self.changes.upsert(file, &key, language).set(sign, value);
            }
            DiffEvent::ObjectEnter(_) | DiffEvent::ObjectExit => {}
        }
    }

    /// The change set built so far.
    pub fn changes(&self) -> &ChangeSet {
        &self.changes
    }

    /// Consume the aggregator and return its change set.
    pub fn finish(self) -> ChangeSet {
        self.changes
    }
}

/// Aggregate a full event stream.
pub fn aggregate(events: impl IntoIterator<Item = DiffEvent>) -> ChangeSet {
    let mut aggregator = Aggregator::new();
    for event in events {
        aggregator.apply(event);
    }

    let changes = aggregator.finish();
    tracing::debug!(records = changes.len(), "aggregated translation changes");
    changes
}
