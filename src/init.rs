use crate::config::Config;
use crate::layer::TreeLayer;
use crate::store::ConfigStore;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

/// Error returned when the global subscriber cannot be installed.
#[derive(thiserror::Error, Debug)]
pub enum InitError {
    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install `Registry + TreeLayer` as the global default subscriber.
///
/// **Parameters**
/// - `store`: the [`ConfigStore`] the layer reads its dispatcher from.
///   Keep a clone to reconfigure output at runtime.
///
/// **Returns**
/// - The same store, for chaining.
/// - `Err(InitError::AlreadyInstalled)` if another subscriber was set
///   first.
pub fn init_tracing(store: Arc<ConfigStore>) -> Result<Arc<ConfigStore>, InitError> {
    let subscriber = Registry::default().with(TreeLayer::new(Arc::clone(&store)));
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(store)
}

/// Initialize tracing with a new stdout-backed store built from `config`.
pub fn init_tracing_with_config(config: Config) -> Result<Arc<ConfigStore>, InitError> {
    init_tracing(Arc::new(ConfigStore::new(config)))
}
