//! Destinations for rendered reports.

use super::atomic::atomic_write_file;
use crate::error::{Result, TransdiffError};
use std::io::{Stdout, Write};
use std::path::{Path, PathBuf};

/// Persists a named text blob.
pub trait TextSink {
    /// Store `content` under `name`.
    fn write_text(&mut self, name: &str, content: &str) -> Result<()>;

    /// Human-readable location of `name`, for log messages.
    fn location(&self, name: &str) -> String;
}

/// Writes each blob as a file in one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Sink writing into `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path a blob named `name` is written to.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl TextSink for DirectorySink {
    fn write_text(&mut self, name: &str, content: &str) -> Result<()> {
        atomic_write_file(self.path_for(name), content)
    }

    fn location(&self, name: &str) -> String {
        self.path_for(name).display().to_string()
    }
}

/// Writes each blob to `W` under a `==> name <==` banner.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    label: String,
}

/// Sink used by `report --stdout`.
pub type StdoutSink = WriterSink<Stdout>;

impl WriterSink<Stdout> {
    /// Sink printing to the process's stdout.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout(), "stdout")
    }
}

impl<W: Write> WriterSink<W> {
    /// Sink writing to `writer`; `label` is reported as every blob's location.
    pub fn new(writer: W, label: impl Into<String>) -> Self {
        Self {
            writer,
            label: label.into(),
        }
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TextSink for WriterSink<W> {
    fn write_text(&mut self, name: &str, content: &str) -> Result<()> {
        writeln!(self.writer, "==> {} <==\n{}\n", name, content)
            .and_then(|()| self.writer.flush())
            .map_err(|e| {
                TransdiffError::IoError(format!("failed to write to {}: {}", self.label, e))
            })
    }

    fn location(&self, _name: &str) -> String {
        self.label.clone()
    }
}
