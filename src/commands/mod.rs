//! Command implementations for transdiff.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, and the shared step that turns input flags and config
//! into diff text.

mod changes;
mod report;

pub use report::write_reports;

use crate::cli::{Cli, Command, ConfigAction, InputArgs};
use crate::config::Config;
use crate::error::{Result, TransdiffError};
use crate::provider::{DiffProvider, FileDiffProvider, GitDiffProvider};
use std::env;
use std::path::Path;

/// Dispatch a command to its implementation.
///
/// Resolves the effective config from `--config` or the working directory
/// first, so every command sees the same settings.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = env::current_dir().map_err(|e| {
        TransdiffError::UserError(format!("failed to get current working directory: {}", e))
    })?;
    let config = Config::discover(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Command::Report(args) => report::cmd_report(&cwd, config, args),
        Command::Changes(args) => changes::cmd_changes(&cwd, config, args),
        Command::Config(cmd) => match cmd.action {
            ConfigAction::Show => cmd_config_show(&config),
        },
    }
}

/// Print the effective config as YAML.
fn cmd_config_show(config: &Config) -> Result<()> {
    print!("{}", config.to_yaml()?);
    Ok(())
}

/// Apply input flags on top of the config.
fn apply_input_overrides(config: &mut Config, input: &InputArgs) {
    if let Some(from) = &input.from {
        config.base_ref = from.clone();
    }
    if let Some(to) = &input.to {
        config.target_ref = to.clone();
    }
    if let Some(locales) = &input.locales {
        config.locales_dir = locales.clone();
    }
    if let Some(context_lines) = input.context_lines {
        config.context_lines = context_lines;
    }
}

/// Pick the diff provider for this run: a saved diff when given, git otherwise.
fn diff_provider(cwd: &Path, config: &Config, input: &InputArgs) -> Box<dyn DiffProvider> {
    match &input.diff_file {
        Some(path) => Box::new(FileDiffProvider::from_arg(path)),
        None => Box::new(GitDiffProvider::from_config(cwd, config)),
    }
}

/// Fetch the diff text for this run.
fn read_diff(cwd: &Path, config: &Config, input: &InputArgs) -> Result<String> {
    diff_provider(cwd, config, input).diff_text()
}
