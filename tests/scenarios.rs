use chrono::{DateTime, Local, TimeZone};
use std::collections::HashMap;
use std::path::MAIN_SEPARATOR;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

use tracing_tree_sink::format::{BRANCH, LAST_BRANCH};
use tracing_tree_sink::memory_sink::MemorySink;
use tracing_tree_sink::{CallSite, Config, ConfigStore, Level, LogRecord, TreeLayer};

const MARGIN: usize = 19 + 3;

fn stamp() -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 11, 5, 14, 2, 11).unwrap()
}

fn store(config: Config) -> (ConfigStore, MemorySink) {
    let sink = MemorySink::new();
    (ConfigStore::with_sink(config, Arc::new(sink.clone())), sink)
}

fn caller_for_all(on: bool) -> Config {
    Config {
        level: Level::Debug,
        caller_enabled: Some(Level::STANDARD.iter().map(|l| (*l, on)).collect()),
        time_format: "%Y/%m/%d %H:%M:%S".to_string(),
        padding: 3,
        full_level_labels: false,
    }
}

fn node(glyph: &str, text: &str) -> String {
    format!("{}{} {}", " ".repeat(MARGIN), glyph, text)
}

fn slow_query() -> LogRecord {
    LogRecord::new(Level::Warn, "slow query detected")
        .at(stamp())
        .with_field("duration_ms", "1823")
        .with_field("query", "SELECT 1")
}

#[test]
fn message_only_record_renders_single_line() {
    let (store, sink) = store(Config {
        caller_enabled: Some(HashMap::from([(Level::Info, false)])),
        ..Config::default()
    });

    let record = LogRecord::new(Level::Info, "cache connected").at(stamp());
    store.current().handle(&record).unwrap();

    assert_eq!(sink.plain_contents(), "2025/11/05 14:02:11 INFO cache connected\n");
}

#[test]
fn attributes_without_caller_end_with_last_glyph() {
    let (store, sink) = store(caller_for_all(false));

    store.current().handle(&slow_query()).unwrap();

    let want = [
        "2025/11/05 14:02:11 WARN slow query detected".to_string(),
        node(BRANCH, "duration_ms: 1823"),
        node(LAST_BRANCH, "query: SELECT 1"),
    ]
    .join("\n")
        + "\n";
    assert_eq!(sink.plain_contents(), want);
}

#[test]
fn caller_line_receives_last_glyph() {
    let (store, sink) = store(caller_for_all(true));

    let record = slow_query().with_call_site(CallSite::new("pkg/file.go", 42));
    store.current().handle(&record).unwrap();

    let want = [
        "2025/11/05 14:02:11 WARN slow query detected".to_string(),
        node(BRANCH, "duration_ms: 1823"),
        node(BRANCH, "query: SELECT 1"),
        node(LAST_BRANCH, &format!("caller: pkg{MAIN_SEPARATOR}file.go:42")),
    ]
    .join("\n")
        + "\n";
    assert_eq!(sink.plain_contents(), want);
}

#[test]
fn raised_level_drops_lower_records() {
    let (store, sink) = store(caller_for_all(true));

    store.set_level(Level::Error);
    store
        .current()
        .handle(&LogRecord::new(Level::Warn, "slow query detected"))
        .unwrap();

    assert!(sink.is_empty());
}

#[test]
fn re_enabling_caller_restores_it() {
    let (store, _) = store(Config::default());

    store.disable_caller_for(&[Level::Warn]);
    assert!(!store.current().config().caller_enabled(Level::Warn));
    store.enable_caller_for(&[Level::Warn]);
    assert!(store.current().config().caller_enabled(Level::Warn));
}

#[test]
fn debug_label_is_cut_to_four_characters() {
    let (store, sink) = store(caller_for_all(false));

    store
        .current()
        .handle(&LogRecord::new(Level::Debug, "config reloaded").at(stamp()))
        .unwrap();

    assert_eq!(sink.plain_contents(), "2025/11/05 14:02:11 DEBU config reloaded\n");
}

#[test]
fn reconfiguration_applies_to_live_subscriber() {
    let sink = MemorySink::new();
    let store = Arc::new(ConfigStore::with_sink(
        Config::default(),
        Arc::new(sink.clone()),
    ));
    let subscriber = Registry::default().with(TreeLayer::new(Arc::clone(&store)));

    tracing::subscriber::with_default(subscriber, || {
        tracing::debug!("before: hidden");
        store.set_level(Level::Debug).disable_caller_for(&[Level::Debug]);
        tracing::debug!(job_id = "import-2025-11-05", rows = 152_000u64, "background job finished");
    });

    let out = sink.plain_contents();
    assert!(!out.contains("before: hidden"));
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 3, "{out}");
    assert!(lines[0].ends_with("DEBU background job finished"));
    assert_eq!(lines[1], node(BRANCH, "job_id: import-2025-11-05"));
    assert_eq!(lines[2], node(LAST_BRANCH, "rows: 152000"));
}

#[test]
fn live_subscriber_reports_caller_of_macro() {
    let sink = MemorySink::new();
    let store = Arc::new(ConfigStore::with_sink(
        Config::default(),
        Arc::new(sink.clone()),
    ));
    let subscriber = Registry::default().with(TreeLayer::new(store));

    let line = line!() + 2;
    tracing::subscriber::with_default(subscriber, || {
        tracing::error!(user = "john", "user authentication failed");
    });

    let out = sink.plain_contents();
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 3, "{out}");
    assert_eq!(lines[1], node(BRANCH, "user: john"));
    assert_eq!(
        lines[2],
        node(LAST_BRANCH, &format!("caller: tests{MAIN_SEPARATOR}scenarios.rs:{line}"))
    );
}
