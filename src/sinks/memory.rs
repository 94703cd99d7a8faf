//! In-memory sink for capturing output

use super::Sink;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Collects everything written to it. Clones share one buffer, so keep a
/// clone around to inspect what handlers wrote.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured output, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.buffer.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl From<MemorySink> for Sink {
    fn from(memory: MemorySink) -> Self {
        Sink::from_writer("memory", memory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_and_clear() {
        let memory = MemorySink::new();
        let sink: Sink = memory.clone().into();
        assert!(memory.is_empty());

        sink.write_all("héllo".as_bytes()).unwrap();
        assert_eq!(memory.contents(), "héllo");
        assert_eq!(memory.bytes(), "héllo".as_bytes());

        memory.clear();
        assert!(memory.is_empty());
    }
}
