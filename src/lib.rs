//! Tree-shaped, colored console output for `tracing` events.
//!
//! Each accepted event becomes one block: a header line with timestamp,
//! level and message, followed by one `├`/`└` node per field and an
//! optional caller node. Settings live in a [`ConfigStore`] and can be
//! changed while the program runs.
//!
//! ```no_run
//! use std::sync::Arc;
//! use tracing_tree_sink::{init::init_tracing, Config, ConfigStore, Level};
//!
//! let store = init_tracing(Arc::new(ConfigStore::new(Config::default()))).unwrap();
//! tracing::info!(port = 8080, "http server started");
//!
//! store.set_level(Level::Warn).disable_caller_for(&[Level::Warn]);
//! tracing::warn!(endpoint = "/v1/legacy", "deprecated API usage");
//! ```

pub mod config;
pub mod dispatcher;
pub mod env;
pub mod format;
pub mod layer;
pub mod level;
pub mod record;
pub mod shared;
pub mod sink;
pub mod store;
pub mod style;

pub mod init;
pub mod memory_sink;
pub mod noop_sink;

pub use config::Config;
pub use dispatcher::{Dispatcher, HandleError};
pub use layer::TreeLayer;
pub use level::Level;
pub use record::{CallSite, FieldValue, LogRecord};
pub use sink::LogSink;
pub use store::ConfigStore;
