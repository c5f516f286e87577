//! Nesting reconstruction and event emission.

use super::classify::{LineKind, Sign, classify_line};

/// Ordered key segments of the currently open JSON objects.
///
/// Popping an empty stack is a no-op, so unbalanced closing braces clamp
/// the depth at zero instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathStack {
    segments: Vec<String>,
}

impl PathStack {
    /// Create an empty stack (top level of a file).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter an object named `segment`.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Leave the innermost object. Returns false when the stack was already empty.
    pub fn pop(&mut self) -> bool {
        self.segments.pop().is_some()
    }

    /// Return to the top level.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Current nesting depth.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true at the top level.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Open segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Dotted key for a leaf at the current depth.
    pub fn key_for(&self, leaf: &str) -> String {
        if self.segments.is_empty() {
            return leaf.to_string();
        }

        let mut key = self.segments.join(".");
        key.push('.');
        key.push_str(leaf);
        key
    }
}

/// File and language a run of diff lines belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContext {
    /// Base name of the locale file, e.g. `common.json`.
    pub filename: String,
    /// Name of the file's parent directory, e.g. `fr`.
    pub language: String,
}

/// Structured event emitted for a classified line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffEvent {
    /// A new file's section of the diff begins.
    FileBoundary { filename: String, language: String },
    /// An unchanged object opener was entered.
    ObjectEnter(String),
    /// An unchanged closing brace was seen.
    ObjectExit,
    /// A leaf entry was added (`New`) or removed (`Old`).
    EntryChanged {
        key: String,
        language: String,
        sign: Sign,
        value: Option<String>,
    },
}

/// Mutable state of a single parse run.
///
/// Owns the nesting stack and the current file context. One context is
/// created per diff and discarded after the last line.
#[derive(Debug, Default)]
pub struct ParseContext {
    path: PathStack,
    file: Option<FileContext>,
}

impl ParseContext {
    /// Create a context positioned before the first file marker.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current nesting stack.
    pub fn path(&self) -> &PathStack {
        &self.path
    }

    /// The file currently being parsed, if a well-formed marker was seen.
    pub fn file(&self) -> Option<&FileContext> {
        self.file.as_ref()
    }

    /// Classify one trimmed line, update state, and return its event.
    pub fn handle_line(&mut self, line: &str) -> Option<DiffEvent> {
        match classify_line(line) {
            LineKind::FileMarker { filename, language } => {
                self.path.clear();
                self.file = Some(FileContext {
                    filename: filename.clone(),
                    language: language.clone(),
                });
                Some(DiffEvent::FileBoundary { filename, language })
            }
            LineKind::MalformedMarker => {
                tracing::debug!(line, "file marker has no language directory, skipping file");
                self.path.clear();
                self.file = None;
                None
            }
            LineKind::ObjectOpen(segment) => {
                self.path.push(segment.clone());
                Some(DiffEvent::ObjectEnter(segment))
            }
            LineKind::ObjectClose => {
                if !self.path.pop() {
                    tracing::debug!("unbalanced closing brace at top level");
                }
                Some(DiffEvent::ObjectExit)
            }
            LineKind::Entry { sign, leaf, value } => {
                let Some(file) = &self.file else {
                    tracing::trace!(line, "changed line outside of a locale file");
                    return None;
                };
                if value.is_none() {
                    tracing::debug!(line, "changed line has no string value");
                }
                Some(DiffEvent::EntryChanged {
                    key: self.path.key_for(&leaf),
                    language: file.language.clone(),
                    sign,
                    value,
                })
            }
            LineKind::SignedStructure => {
                tracing::trace!(line, "ignoring added or removed structure line");
                None
            }
            LineKind::RangeBanner | LineKind::Other => None,
        }
    }
}

/// Parse raw diff text into events in line order.
///
/// Lines are trimmed and empty lines dropped before classification.
pub fn parse_events(diff_text: &str) -> Vec<DiffEvent> {
    let mut ctx = ParseContext::new();

    diff_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| ctx.handle_line(line))
        .collect()
}
