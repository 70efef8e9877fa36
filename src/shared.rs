//! Process-wide configuration without a lock.
//!
//! The free functions here act on one instance shared by the whole process,
//! created with default settings on first use. Reads are lock-free
//! `ArcSwap` loads. Writers do an unsynchronized load, modify, store, so
//! this is meant for setup on one thread at process start, before logging
//! from other threads begins:
//!
//! - two writers racing may lose one of the changes (last store wins);
//! - a reader between a writer's two stores may get a dispatcher that lags
//!   behind [`config`].
//!
//! Every individual swap is atomic, so a reader never sees a half-written
//! [`Config`]. When settings change while other threads are logging, use
//! [`ConfigStore`](crate::store::ConfigStore) instead.

use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::level::Level;
use crate::sink::LogSink;
use arc_swap::ArcSwap;
use std::sync::{Arc, OnceLock};

struct Shared {
    config: ArcSwap<Config>,
    dispatcher: ArcSwap<Dispatcher>,
}

static SHARED: OnceLock<Shared> = OnceLock::new();

fn shared() -> &'static Shared {
    SHARED.get_or_init(|| {
        let config = Config::default();
        Shared {
            dispatcher: ArcSwap::from_pointee(Dispatcher::stdout(config.clone())),
            config: ArcSwap::from_pointee(config),
        }
    })
}

fn install(config: Config, sink: Option<Arc<dyn LogSink>>) {
    let s = shared();
    let sink = sink.unwrap_or_else(|| Arc::clone(s.dispatcher.load().sink()));
    let dispatcher = Dispatcher::new(config, sink);
    s.config.store(Arc::new(dispatcher.config().clone()));
    s.dispatcher.store(Arc::new(dispatcher));
}

fn update(f: impl FnOnce(&mut Config)) {
    let mut config = Config::clone(&shared().config.load());
    f(&mut config);
    install(config, None);
}

/// Replace the whole configuration.
pub fn configure(config: Config) {
    install(config, None);
}

/// Change only the minimum enabled level.
pub fn set_level(level: Level) {
    update(|cfg| cfg.level = level);
}

pub fn enable_caller_for(levels: &[Level]) {
    update(|cfg| cfg.set_caller(levels, true));
}

pub fn disable_caller_for(levels: &[Level]) {
    update(|cfg| cfg.set_caller(levels, false));
}

/// Route output to `sink` instead of stdout, keeping the configuration.
pub fn set_sink(sink: Arc<dyn LogSink>) {
    let config = Config::clone(&shared().config.load());
    install(config, Some(sink));
}

/// The installed dispatcher.
pub fn current() -> Arc<Dispatcher> {
    shared().dispatcher.load_full()
}

/// Snapshot of the live configuration.
pub fn config() -> Config {
    Config::clone(&shared().config.load())
}
