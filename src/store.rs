use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::level::Level;
use crate::sink::{LogSink, StdoutSink};
use parking_lot::Mutex;
use std::sync::{Arc, OnceLock};

/// Owner of the live [`Config`] and the [`Dispatcher`] built from it.
///
/// Every operation takes the same lock for its whole duration. Mutations
/// always finish by installing a freshly built dispatcher; dispatchers
/// handed out earlier keep working with the settings they were built with.
pub struct ConfigStore {
    inner: Mutex<Inner>,
    sink: Arc<dyn LogSink>,
}

struct Inner {
    config: Config,
    dispatcher: Option<Arc<Dispatcher>>,
}

impl Inner {
    fn rebuild(&mut self, sink: &Arc<dyn LogSink>) -> Arc<Dispatcher> {
        let dispatcher = Arc::new(Dispatcher::new(self.config.clone(), Arc::clone(sink)));
        self.dispatcher = Some(Arc::clone(&dispatcher));
        dispatcher
    }
}

impl ConfigStore {
    /// Store writing to stdout.
    pub fn new(config: Config) -> Self {
        Self::with_sink(config, Arc::new(StdoutSink))
    }

    pub fn with_sink(config: Config, sink: Arc<dyn LogSink>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                config: config.normalize(),
                dispatcher: None,
            }),
            sink,
        }
    }

    /// Replace the whole configuration.
    pub fn configure(&self, config: Config) -> &Self {
        let mut inner = self.inner.lock();
        inner.config = config.normalize();
        inner.rebuild(&self.sink);
        self
    }

    /// Change only the minimum enabled level.
    pub fn set_level(&self, level: Level) -> &Self {
        let mut inner = self.inner.lock();
        inner.config.level = level;
        inner.rebuild(&self.sink);
        self
    }

    /// Show the caller line for `levels`.
    pub fn enable_caller_for(&self, levels: &[Level]) -> &Self {
        self.set_caller(levels, true)
    }

    /// Hide the caller line for `levels`.
    pub fn disable_caller_for(&self, levels: &[Level]) -> &Self {
        self.set_caller(levels, false)
    }

    fn set_caller(&self, levels: &[Level], on: bool) -> &Self {
        let mut inner = self.inner.lock();
        inner.config.set_caller(levels, on);
        inner.rebuild(&self.sink);
        self
    }

    /// The installed dispatcher, built on first use.
    pub fn current(&self) -> Arc<Dispatcher> {
        let mut inner = self.inner.lock();
        if let Some(dispatcher) = &inner.dispatcher {
            return Arc::clone(dispatcher);
        }
        inner.rebuild(&self.sink)
    }

    /// Snapshot of the live configuration.
    pub fn config(&self) -> Config {
        self.inner.lock().config.clone()
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

static GLOBAL: OnceLock<ConfigStore> = OnceLock::new();

/// Process-wide store with default settings, created on first call.
///
/// Always returns the same instance. It is the same synchronized
/// [`ConfigStore`] as any other; for the lock-free setup-time variant
/// see [`crate::shared`].
pub fn global() -> &'static ConfigStore {
    GLOBAL.get_or_init(ConfigStore::default)
}
