//! Line classification for translation diffs.

use super::helpers::{
    is_object_close, is_structural_body, object_open_key, split_entry, split_locale_path,
};

/// Which side of the diff a changed line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Removal line (`-`): the value before the change.
    Old,
    /// Addition line (`+`): the value after the change.
    New,
}

/// The category of a single trimmed diff line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `diff --git` marker for a `.../<language>/<filename>` path.
    FileMarker { filename: String, language: String },
    /// `diff --git` marker whose path has no language directory.
    MalformedMarker,
    /// Unchanged `"key": {` line.
    ObjectOpen(String),
    /// Unchanged `}` or `},` line.
    ObjectClose,
    /// `--- a/...` or `+++ b/...` banner.
    RangeBanner,
    /// Added or removed leaf entry.
    Entry {
        sign: Sign,
        leaf: String,
        value: Option<String>,
    },
    /// Added or removed brace, bracket or object opener.
    SignedStructure,
    /// Context lines, `index`, hunk headers and anything unrecognized.
    Other,
}

/// Classify a trimmed diff line.
///
/// Rules are applied in priority order: file marker, object open, object
/// close, range banner, changed entry, everything else. Object open and
/// close only match unchanged lines; a signed line is never structural
/// for nesting purposes.
pub fn classify_line(line: &str) -> LineKind {
    if let Some(rest) = line.strip_prefix("diff --git") {
        return match split_locale_path(rest) {
            Some((filename, language)) => LineKind::FileMarker { filename, language },
            None => LineKind::MalformedMarker,
        };
    }

    if let Some(key) = object_open_key(line) {
        return LineKind::ObjectOpen(key);
    }

    if is_object_close(line) {
        return LineKind::ObjectClose;
    }

    if line.starts_with("---") || line.starts_with("+++") {
        return LineKind::RangeBanner;
    }

    let (sign, body) = if let Some(body) = line.strip_prefix('+') {
        (Sign::New, body)
    } else if let Some(body) = line.strip_prefix('-') {
        (Sign::Old, body)
    } else {
        return LineKind::Other;
    };

    if is_structural_body(body.trim()) {
        return LineKind::SignedStructure;
    }

    let (leaf, value) = split_entry(body);
    LineKind::Entry { sign, leaf, value }
}
