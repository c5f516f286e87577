//! Git command runner for transdiff.
//!
//! Provides a safe wrapper around git commands with captured stdout/stderr
//! and structured error handling. All git operations should go through this module.

use crate::error::{Result, TransdiffError};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    /// Create a new GitOutput from raw output bytes.
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(TransdiffError::GitError)` - On non-zero exit code or spawn failure
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();
    tracing::debug!(cwd = %cwd.display(), args = ?args, "running git");

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            TransdiffError::GitError(format!(
                "failed to execute git {}: {} (is git installed?)",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.clone()
        } else {
            git_output.stderr.clone()
        };

        Err(TransdiffError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the repository root
/// * `Err(TransdiffError::UserError)` - If not inside a git repository (exit code 1)
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    match run_git(cwd, &["rev-parse", "--show-toplevel"]) {
        Ok(output) => Ok(PathBuf::from(&output.stdout)),
        Err(TransdiffError::GitError(msg)) if msg.contains("not a git repository") => {
            Err(TransdiffError::UserError(
                "not inside a git repository. Run this command from within a git repository, \
                 or pass --diff-file with a saved diff."
                    .to_string(),
            ))
        }
        Err(e) => Err(e),
    }
}

/// Check that `reference` names a commit.
///
/// # Returns
///
/// * `Ok(())` - The ref resolves to a commit
/// * `Err(TransdiffError::GitError)` - Unknown ref, with a hint to fetch it
pub fn verify_ref<P: AsRef<Path>>(cwd: P, reference: &str) -> Result<()> {
    let rev = format!("{}^{{commit}}", reference);
    run_git(cwd, &["rev-parse", "--verify", "--quiet", &rev])
        .map(|_| ())
        .map_err(|_| {
            TransdiffError::GitError(format!(
                "unknown ref '{}'. Check the name or fetch it first (git fetch origin {}).",
                reference, reference
            ))
        })
}

/// Unified diff of `pathspec` between two refs.
///
/// Runs `git diff -U{context_lines} --no-prefix {from}..{to} -- {pathspec}`.
pub fn diff_between<P: AsRef<Path>>(
    cwd: P,
    from: &str,
    to: &str,
    pathspec: &str,
    context_lines: u32,
) -> Result<String> {
    let context = format!("-U{}", context_lines);
    let range = format!("{}..{}", from, to);
    let output = run_git(
        cwd,
        &["diff", &context, "--no-prefix", &range, "--", pathspec],
    )?;

    Ok(output.stdout)
}
