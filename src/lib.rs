//! Transdiff: translation review reports from git diffs of JSON locale files.
//!
//! The pipeline is three passes over plain data:
//! - [`diff`] classifies diff lines and rebuilds dotted key paths
//! - [`changes`] folds the resulting events into a [`changes::ChangeSet`]
//! - [`report`] renders one CSV report per language
//!
//! [`report::reports_from_diff`] runs all three. Everything around it
//! (git, diff files, output files, config, CLI) lives in the other modules.

pub mod changes;
pub mod cli;
pub mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod git;
pub mod provider;
pub mod report;

#[cfg(test)]
mod test_support;
