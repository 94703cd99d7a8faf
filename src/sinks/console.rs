//! Standard stream sinks

use super::Sink;
use std::io;

impl Sink {
    /// Process standard output. Every call returns a handle to the same
    /// underlying stream, which does its own locking.
    pub fn stdout() -> Self {
        Self::from_writer("stdout", io::stdout())
    }

    pub fn stderr() -> Self {
        Self::from_writer("stderr", io::stderr())
    }
}
