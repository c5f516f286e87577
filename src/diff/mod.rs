//! Diff parsing primitives for translation files.
//!
//! This module turns unified diff text over pretty-printed JSON locale files
//! into a stream of structured events. It never parses JSON: nesting is
//! reconstructed line by line from object-opening and closing-brace lines,
//! which only works for one-key-per-line files such as those written by
//! i18next tooling.
//!
//! The parsing is deterministic and total:
//! - File boundaries from `diff --git` markers (`.../<language>/<file>`)
//! - Object nesting from unchanged `"key": {` and `}` lines
//! - Changed leaf entries from `+`/`-` lines, keyed by their dotted path
//! - Malformed or unbalanced lines are skipped, never fatal

mod classify;
mod helpers;
mod tracker;


// Re-export public API
pub use classify::{LineKind, Sign, classify_line};
pub use tracker::{DiffEvent, FileContext, ParseContext, PathStack, parse_events};
