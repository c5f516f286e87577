//! Filesystem utilities for transdiff.
//!
//! Report files are written atomically so an interrupted run never leaves
//! a half-written CSV behind, and handed to callers through the
//! [`TextSink`] seam.

pub mod atomic;
mod sink;

pub use atomic::atomic_write_file;
pub use sink::{DirectorySink, StdoutSink, TextSink, WriterSink};
