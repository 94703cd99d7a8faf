//! Output sinks
//!
//! A [`Sink`] is a shared handle to a byte stream. Cloning a sink clones the
//! handle, not the stream, so several handlers may write to one file or
//! terminal and the caller decides how long the stream lives.

pub mod console;
pub mod file;
pub mod memory;

pub use memory::MemorySink;

use crate::core::Result;
use parking_lot::Mutex;
use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

#[derive(Clone)]
pub struct Sink {
    name: Cow<'static, str>,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Sink {
    /// Wrap any writer. `name` only shows up in diagnostics.
    pub fn from_writer<W>(name: impl Into<Cow<'static, str>>, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            name: name.into(),
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Write one rendered record.
    pub fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        self.writer.lock().write_all(bytes)
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    /// Whether both handles refer to the same stream.
    pub fn same_stream(&self, other: &Sink) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("name", &self.name).finish_non_exhaustive()
    }
}
