use std::sync::Arc;

use tracing::{debug, error, info, warn};
use tracing_tree_sink::{init::init_tracing, Config, ConfigStore, Level};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store = init_tracing(Arc::new(ConfigStore::new(Config {
        level: Level::Debug,
        ..Config::default()
    })))?;

    debug!(cache = "redis", host = "localhost", port = 6379, "initializing cache subsystem");
    info!("cache connected");
    warn!(
        duration_ms = 1823,
        query = "SELECT * FROM users WHERE active=1",
        user = "analytics-worker",
        "slow query detected"
    );
    error!(
        error = "disk full",
        path = "/var/log/audit.json",
        component = "audit",
        retry_in_sec = 30,
        "failed to write audit event"
    );

    // Quieter from here on: no caller lines below errors, no debug output.
    store
        .set_level(Level::Info)
        .disable_caller_for(&[Level::Info, Level::Warn]);

    debug!(file = "/etc/app/config.yaml", changes = 5, "config reloaded");
    info!(addr = ":8080", threads = 8, "http server started");
    warn!(endpoint = "/v1/legacy", client = "mobile-android", version = "1.2.0", "deprecated API usage");
    error!(user = "john", ip = "192.168.1.42", reason = "invalid token", "user authentication failed");
    info!(uptime_min = 238, "graceful shutdown complete");

    Ok(())
}
