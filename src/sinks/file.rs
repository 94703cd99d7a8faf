//! File sink

use super::Sink;
use crate::core::{LoggerError, Result};
use std::fs::OpenOptions;
use std::io::BufWriter;
use std::path::Path;

impl Sink {
    /// Open `path` for appending, creating it if needed. Output is buffered;
    /// call [`Sink::flush`] (or let the logger flush) to push it to disk.
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Self::from_writer(
            path.display().to_string(),
            BufWriter::new(file),
        ))
    }
}
