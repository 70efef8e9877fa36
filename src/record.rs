use crate::level::Level;
use chrono::{DateTime, Local};
use std::fmt;
use std::path::{Path, MAIN_SEPARATOR};

/// A single attribute value attached to a [`LogRecord`].
///
/// `Display` is the human-readable form printed after `key: `. Nothing is
/// quoted or escaped, so embedded newlines end up in the output as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    I64(i64),
    U64(u64),
    I128(i128),
    U128(u128),
    F64(f64),
    Bool(bool),
    /// Already rendered with `{:?}` by the producer.
    Debug(String),
    Group(Vec<(String, FieldValue)>),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(s) | FieldValue::Debug(s) => f.write_str(s),
            FieldValue::I64(v) => write!(f, "{v}"),
            FieldValue::U64(v) => write!(f, "{v}"),
            FieldValue::I128(v) => write!(f, "{v}"),
            FieldValue::U128(v) => write!(f, "{v}"),
            FieldValue::F64(v) => write!(f, "{v}"),
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Group(items) => {
                f.write_str("[")?;
                for (i, (key, value)) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{key}={value}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Str(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Str(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::I64(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::I64(v.into())
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        FieldValue::U64(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::F64(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

/// Where a record was emitted. Captured at the call site, resolved at
/// format time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub file: Option<String>,
    pub line: Option<u32>,
}

impl CallSite {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        CallSite {
            file: Some(file.into()),
            line: Some(line),
        }
    }

    /// Returns `("<parent dir>/<file name>", line)`, or `None` when the
    /// file or line is unknown.
    pub fn resolve(&self) -> Option<(String, u32)> {
        let file = self.file.as_deref()?;
        let line = self.line?;
        let path = Path::new(file);
        let base = path.file_name()?.to_string_lossy();
        let short = match path.parent().and_then(Path::file_name) {
            Some(dir) => format!("{}{}{}", dir.to_string_lossy(), MAIN_SEPARATOR, base),
            None => base.into_owned(),
        };
        Some((short, line))
    }
}

/// One structured log event as seen by the formatter.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub message: String,
    /// Attributes in insertion order.
    pub fields: Vec<(String, FieldValue)>,
    pub call_site: Option<CallSite>,
}

impl LogRecord {
    /// A record stamped with the current local time and no attributes.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        LogRecord {
            timestamp: Local::now(),
            level,
            message: message.into(),
            fields: Vec::new(),
            call_site: None,
        }
    }

    pub fn at(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    pub fn with_call_site(mut self, call_site: CallSite) -> Self {
        self.call_site = Some(call_site);
        self
    }
}
