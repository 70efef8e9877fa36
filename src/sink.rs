use std::io::{self, Write};

/// Destination for rendered log blocks.
///
/// Implementations receive one complete, newline-terminated block per
/// accepted record, ANSI style sequences included. They are called
/// synchronously on the thread that emitted the event, so they should not
/// hold locks for longer than a single write.
pub trait LogSink: Send + Sync {
    /// Write a single rendered block.
    ///
    /// **Returns**
    /// - `Ok(())` if the block was accepted.
    /// - `Err(..)` if the underlying stream failed. The dispatcher passes
    ///   the error on and does not retry.
    fn write_block(&self, block: &str) -> io::Result<()>;

    /// Flush anything the sink buffers. Default implementation is a no-op.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes blocks to the process standard output.
///
/// Stdout is locked for the whole block so lines from concurrent events
/// never interleave inside a tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write_block(&self, block: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(block.as_bytes())
    }

    fn flush(&self) -> io::Result<()> {
        io::stdout().lock().flush()
    }
}
