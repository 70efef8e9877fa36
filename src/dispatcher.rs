use crate::config::Config;
use crate::format::format_record;
use crate::level::Level;
use crate::record::LogRecord;
use crate::sink::{LogSink, StdoutSink};
use std::fmt;
use std::io;
use std::sync::Arc;

/// Error returned by [`Dispatcher::handle`].
#[derive(thiserror::Error, Debug)]
pub enum HandleError {
    #[error("failed to write log block: {0}")]
    Write(#[from] io::Error),
}

/// Immutable pairing of a normalized [`Config`] and an output sink.
///
/// A dispatcher is never changed after construction; reconfiguring means
/// building a new one. That makes it safe to share across threads and call
/// [`handle`](Dispatcher::handle) without any locking.
pub struct Dispatcher {
    config: Config,
    sink: Arc<dyn LogSink>,
}

impl Dispatcher {
    /// Build a dispatcher. `config` is normalized here.
    pub fn new(config: Config, sink: Arc<dyn LogSink>) -> Self {
        Self {
            config: config.normalize(),
            sink,
        }
    }

    /// Dispatcher writing to stdout.
    pub fn stdout(config: Config) -> Self {
        Self::new(config, Arc::new(StdoutSink))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sink(&self) -> &Arc<dyn LogSink> {
        &self.sink
    }

    /// Reports whether records at `level` pass the minimum level.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.config.level
    }

    /// Render `record` without writing it.
    pub fn format(&self, record: &LogRecord) -> String {
        format_record(&self.config, record)
    }

    /// Render `record` and write it to the sink.
    ///
    /// Records below the minimum level are dropped and `Ok(())` is
    /// returned. The only error is a failed sink write.
    pub fn handle(&self, record: &LogRecord) -> Result<(), HandleError> {
        if !self.enabled(record.level) {
            return Ok(());
        }
        self.sink.write_block(&self.format(record))?;
        Ok(())
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
