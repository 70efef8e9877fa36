use crate::sink::LogSink;
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

/// Collects rendered blocks in memory.
///
/// Clones share the same buffer, so one clone can be handed to a
/// [`ConfigStore`](crate::store::ConfigStore) and another kept to read the
/// output back.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    buf: Arc<Mutex<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.buf.lock().clone()
    }

    /// Everything written so far with terminal styling removed.
    pub fn plain_contents(&self) -> String {
        strip_ansi_escapes::strip_str(&*self.buf.lock())
    }

    /// Returns everything written so far and clears the buffer.
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.buf.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.buf.lock().is_empty()
    }
}

impl LogSink for MemorySink {
    fn write_block(&self, block: &str) -> io::Result<()> {
        self.buf.lock().push_str(block);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_buffer() {
        let sink = MemorySink::new();
        let writer = sink.clone();
        writer.write_block("first\n").unwrap();
        writer.write_block("second\n").unwrap();
        assert_eq!(sink.contents(), "first\nsecond\n");
        assert_eq!(sink.plain_contents(), "first\nsecond\n");
        assert_eq!(sink.take(), "first\nsecond\n");
        assert!(sink.is_empty());
    }
}
