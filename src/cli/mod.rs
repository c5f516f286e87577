//! CLI argument parsing for transdiff.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Transdiff: translation review reports from git diffs of JSON locale files.
///
/// Compares the locale files of two refs and writes one CSV per language
/// listing the keys translators need to review, with the baseline
/// language's old and new text next to each translation.
#[derive(Parser, Debug)]
#[command(name = "transdiff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: ./.transdiff.yaml when present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for transdiff.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write per-language review reports.
    ///
    /// Diffs the locales directory between two refs (or reads a saved diff)
    /// and writes `translations.<lang>.csv` for every language with changes.
    Report(ReportArgs),

    /// Print the detected changes as JSON.
    ///
    /// Shows every changed key with its old and new value per language,
    /// before the report inclusion filter is applied.
    Changes(ChangesArgs),

    /// Configuration commands.
    Config(ConfigCommand),
}

/// Where the diff comes from. Flags override the config file.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Ref with the released translations.
    #[arg(long, value_name = "REF")]
    pub from: Option<String>,

    /// Ref with the translations to review.
    #[arg(long, value_name = "REF")]
    pub to: Option<String>,

    /// Locales directory relative to the repository root.
    #[arg(long, value_name = "DIR")]
    pub locales: Option<String>,

    /// Lines of diff context passed to git.
    #[arg(long, value_name = "N")]
    pub context_lines: Option<u32>,

    /// Read a saved diff instead of running git (`-` reads stdin).
    #[arg(
        long,
        value_name = "PATH",
        conflicts_with_all = ["from", "to", "locales", "context_lines"]
    )]
    pub diff_file: Option<PathBuf>,
}

/// Arguments for the `report` command.
#[derive(Parser, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output directory for the CSV files.
    #[arg(long, value_name = "DIR")]
    pub out: Option<String>,

    /// Baseline language shown next to every translation.
    #[arg(long, value_name = "LANG")]
    pub baseline: Option<String>,

    /// Only write reports for these languages.
    #[arg(long = "lang", value_name = "LANG", value_delimiter = ',')]
    pub languages: Vec<String>,

    /// Print reports to stdout instead of writing files.
    #[arg(long)]
    pub stdout: bool,
}

/// Arguments for the `changes` command.
#[derive(Parser, Debug)]
pub struct ChangesArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Config management commands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration as YAML.
    Show,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
