//! Sources of translation diff text.
//!
//! The report pipeline takes the whole diff as one string. A [`DiffProvider`]
//! produces that string: from git for normal runs, or from a saved diff file
//! (or stdin) when reviewing a diff produced elsewhere.

use crate::config::Config;
use crate::error::{Result, TransdiffError};
use crate::git;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Produces the unified diff text to report on.
pub trait DiffProvider {
    /// Return the complete diff text.
    fn diff_text(&self) -> Result<String>;
}

/// Diff of the locales directory between two git refs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitDiffProvider {
    repo_dir: PathBuf,
    from: String,
    to: String,
    locales_dir: String,
    context_lines: u32,
}

impl GitDiffProvider {
    /// Provider for `from..to` over `locales_dir` in the repository at `repo_dir`.
    pub fn new(
        repo_dir: impl Into<PathBuf>,
        from: impl Into<String>,
        to: impl Into<String>,
        locales_dir: impl Into<String>,
    ) -> Self {
        Self {
            repo_dir: repo_dir.into(),
            from: from.into(),
            to: to.into(),
            locales_dir: locales_dir.into(),
            context_lines: crate::config::types::default_context_lines(),
        }
    }

    /// Provider configured from `config`, rooted at `repo_dir`.
    pub fn from_config(repo_dir: impl Into<PathBuf>, config: &Config) -> Self {
        Self::new(
            repo_dir,
            config.base_ref.clone(),
            config.target_ref.clone(),
            config.locales_dir.clone(),
        )
        .with_context_lines(config.context_lines)
    }

    /// Override the number of context lines.
    pub fn with_context_lines(mut self, context_lines: u32) -> Self {
        self.context_lines = context_lines;
        self
    }
}

impl DiffProvider for GitDiffProvider {
    fn diff_text(&self) -> Result<String> {
        let repo_root = git::get_repo_root(&self.repo_dir)?;
        git::verify_ref(&repo_root, &self.from)?;
        git::verify_ref(&repo_root, &self.to)?;

        let diff = git::diff_between(
            &repo_root,
            &self.from,
            &self.to,
            &self.locales_dir,
            self.context_lines,
        )?;

        tracing::info!(
            from = %self.from,
            to = %self.to,
            locales = %self.locales_dir,
            lines = diff.lines().count(),
            "collected translation diff"
        );
        Ok(diff)
    }
}

/// Where a saved diff is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffSource {
    /// A diff file on disk.
    Path(PathBuf),
    /// Standard input.
    Stdin,
}

/// Diff text read from a file or stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiffProvider {
    source: DiffSource,
}

impl FileDiffProvider {
    /// Provider for a command-line argument: `-` means stdin.
    pub fn from_arg(arg: &Path) -> Self {
        let source = if arg == Path::new("-") {
            DiffSource::Stdin
        } else {
            DiffSource::Path(arg.to_path_buf())
        };
        Self { source }
    }

    /// The configured source.
    pub fn source(&self) -> &DiffSource {
        &self.source
    }
}

impl DiffProvider for FileDiffProvider {
    fn diff_text(&self) -> Result<String> {
        match &self.source {
            DiffSource::Path(path) => std::fs::read_to_string(path).map_err(|e| {
                TransdiffError::IoError(format!(
                    "failed to read diff file '{}': {}",
                    path.display(),
                    e
                ))
            }),
            DiffSource::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|e| {
                        TransdiffError::IoError(format!("failed to read diff from stdin: {}", e))
                    })?;
                Ok(text)
            }
        }
    }
}
