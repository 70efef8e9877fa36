//! Tree-shaped rendering of a single [`LogRecord`].
//!
//! ```text
//! 2025/11/05 14:02:11 WARN slow query detected
//!                        ├ duration_ms: 1823
//!                        ├ query: SELECT 1
//!                        └ caller: pkg/file.go:42
//! ```
//!
//! The tree lines start `len(formatted timestamp) + padding` columns in,
//! computed from a fixed reference time so the margin never depends on
//! the record itself.

use crate::config::Config;
use crate::record::LogRecord;
use crate::style::{self, LevelStyle};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::fmt::{self, Write};

/// Glyph in front of every node except the last one.
pub const BRANCH: &str = "├";
/// Glyph in front of the last node.
pub const LAST_BRANCH: &str = "└";

const LABEL_WIDTH: usize = 4;

/// Builds the text block for one record. Single use: create, call the
/// `write_*` steps, then [`finish`](RecordFormatter::finish).
pub struct RecordFormatter<'a> {
    config: &'a Config,
    record: &'a LogRecord,
    buf: String,
    margin: String,
    node_count: usize,
    show_caller: bool,
    style: LevelStyle,
}

impl<'a> RecordFormatter<'a> {
    pub fn new(config: &'a Config, record: &'a LogRecord) -> Self {
        let show_caller = config.caller_enabled(record.level);
        let node_count = record.fields.len() + usize::from(show_caller);

        RecordFormatter {
            config,
            record,
            buf: String::with_capacity(64 + record.message.len() + node_count * 32),
            margin: " ".repeat(margin_width(config)),
            node_count,
            show_caller,
            style: style::style_for(record.level),
        }
    }

    pub fn write_time(&mut self) {
        let stamp = render_time(&self.record.timestamp, &self.config.time_format);
        let _ = write!(self.buf, "{}", style::gray(&stamp));
        self.buf.push(' ');
    }

    pub fn write_level(&mut self) {
        let name = self.record.level.as_str();
        let label = if self.config.full_level_labels {
            name
        } else {
            truncate(name, LABEL_WIDTH)
        };
        let _ = write!(self.buf, "{}", self.style.paint(label));
        self.buf.push(' ');
    }

    pub fn write_message(&mut self) {
        self.buf.push_str(&self.record.message);
    }

    /// One node per attribute. The final attribute only gets
    /// [`LAST_BRANCH`] when no caller node follows it.
    pub fn write_fields(&mut self) {
        for (i, (key, value)) in self.record.fields.iter().enumerate() {
            let glyph = if i + 1 < self.node_count {
                BRANCH
            } else {
                LAST_BRANCH
            };
            self.start_node(glyph);
            let _ = write!(self.buf, "{}{}", self.style.paint(&format!("{key}: ")), value);
        }
    }

    /// Appends the caller node. Skipped when caller display is off for
    /// this level or the call site cannot be resolved.
    pub fn write_caller(&mut self) {
        if !self.show_caller {
            return;
        }
        let Some((short, line)) = self.record.call_site.as_ref().and_then(|c| c.resolve()) else {
            return;
        };
        self.start_node(LAST_BRANCH);
        let _ = write!(self.buf, "{}", style::faint(&format!("caller: {short}:{line}")));
    }

    pub fn finish(mut self) -> String {
        self.buf.push('\n');
        self.buf
    }

    fn start_node(&mut self, glyph: &str) {
        self.buf.push('\n');
        self.buf.push_str(&self.margin);
        self.buf.push_str(glyph);
        self.buf.push(' ');
    }
}

/// Renders `record` under `config` into a newline-terminated block.
pub fn format_record(config: &Config, record: &LogRecord) -> String {
    let mut f = RecordFormatter::new(config, record);
    f.write_time();
    f.write_level();
    f.write_message();
    f.write_fields();
    f.write_caller();
    f.finish()
}

/// Column at which tree glyphs start.
///
/// Measured on 0001-01-01 00:00:00 UTC, so the width is the same on every
/// host regardless of its time zone.
pub fn margin_width(config: &Config) -> usize {
    let reference = NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    render_time(&reference, &config.time_format).chars().count() + config.padding
}

fn render_time<Tz>(ts: &DateTime<Tz>, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    // An invalid pattern leaves a partial stamp rather than panicking.
    let _ = write!(out, "{}", ts.format(pattern));
    out
}

fn truncate(s: &str, width: usize) -> &str {
    match s.char_indices().nth(width) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
