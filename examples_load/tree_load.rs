use std::sync::Arc;
use std::time::Instant;

use tracing::error;
use tracing_tree_sink::env::{config_from_env, env_or};
use tracing_tree_sink::init::init_tracing;
use tracing_tree_sink::noop_sink::NoopSink;
use tracing_tree_sink::ConfigStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config_from_env()?;
    let store = Arc::new(ConfigStore::with_sink(config, Arc::new(NoopSink)));
    init_tracing(store)?;

    let n: u64 = env_or("TREE_LOAD_EVENTS", "100000").parse()?;
    let start = Instant::now();

    for i in 0..n {
        error!(iteration = i, component = "load", "tree load test error");
    }

    let elapsed = start.elapsed();
    println!("rendered {} events in {:?} (~{:.0} ev/s)",
        n,
        elapsed,
        n as f64 / elapsed.as_secs_f64()
    );
    Ok(())
}
