//! Error types for the transdiff CLI.
//!
//! Only the collaborators (git, diff files, report sink, config) can fail.
//! The diff parser and report builder are total and never return errors.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for transdiff operations.
#[derive(Error, Debug)]
pub enum TransdiffError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// Git could not produce the translation diff.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// Reading diff input or producing output (report files, stdout, JSON) failed.
    #[error("I/O failed: {0}")]
    IoError(String),
}

impl TransdiffError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TransdiffError::UserError(_) => exit_codes::USER_ERROR,
            TransdiffError::GitError(_) => exit_codes::GIT_FAILURE,
            TransdiffError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for transdiff operations.
pub type Result<T> = std::result::Result<T, TransdiffError>;
