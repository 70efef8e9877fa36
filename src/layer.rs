use crate::level::Level;
use crate::record::{CallSite, FieldValue, LogRecord};
use crate::store::ConfigStore;
use chrono::Local;
use std::fmt;
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// `tracing_subscriber` layer that renders every enabled event as a tree
/// block through the dispatcher currently installed in a [`ConfigStore`].
///
/// The store is consulted once per event, so reconfiguring it takes effect
/// on the next event without rebuilding the subscriber.
#[derive(Clone)]
pub struct TreeLayer {
    store: Arc<ConfigStore>,
}

impl TreeLayer {
    pub fn new(store: Arc<ConfigStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<ConfigStore> {
        &self.store
    }
}

impl<S> Layer<S> for TreeLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let level = Level::from(meta.level());

        let dispatcher = self.store.current();
        if !dispatcher.enabled(level) {
            return;
        }

        let mut record = LogRecord {
            timestamp: Local::now(),
            level,
            message: String::new(),
            fields: Vec::new(),
            call_site: Some(CallSite {
                file: meta.file().map(|s| s.to_string()),
                line: meta.line(),
            }),
        };

        let mut visitor = FieldVisitor {
            fields: &mut record.fields,
            message: &mut record.message,
        };
        event.record(&mut visitor);

        if let Err(e) = dispatcher.handle(&record) {
            eprintln!("tree log sink: {}", e);
        }
    }
}

/// Collects event fields in declaration order. The `message` field becomes
/// the record message instead of an attribute.
pub struct FieldVisitor<'a> {
    pub fields: &'a mut Vec<(String, FieldValue)>,
    pub message: &'a mut String,
}

impl FieldVisitor<'_> {
    fn push(&mut self, field: &Field, value: FieldValue) {
        self.fields.push((field.name().to_string(), value));
    }
}

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            *self.message = value.to_string();
        } else {
            self.push(field, FieldValue::Str(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.push(field, FieldValue::I64(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.push(field, FieldValue::U64(value));
    }

    fn record_i128(&mut self, field: &Field, value: i128) {
        self.push(field, FieldValue::I128(value));
    }

    fn record_u128(&mut self, field: &Field, value: u128) {
        self.push(field, FieldValue::U128(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.push(field, FieldValue::F64(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.push(field, FieldValue::Bool(value));
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.push(field, FieldValue::Str(value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            *self.message = format!("{:?}", value);
        } else {
            self.push(field, FieldValue::Debug(format!("{:?}", value)));
        }
    }
}
