//! Exit code constants for the transdiff CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config)
//! - 2: Git operation failure (diff could not be produced)
//! - 3: I/O failure (diff file unreadable, report not written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Git operation failure: unknown refs, not a repository, git missing.
pub const GIT_FAILURE: i32 = 2;

/// I/O failure: reading the diff input or writing a report failed.
pub const IO_FAILURE: i32 = 3;
