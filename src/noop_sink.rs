use crate::sink::LogSink;
use std::io;

/// A sink that simply drops all blocks.
///
/// Useful for measuring the rendering overhead without any terminal I/O.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn write_block(&self, _block: &str) -> io::Result<()> {
        Ok(())
    }
}
