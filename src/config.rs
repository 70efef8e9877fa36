use crate::level::Level;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default timestamp pattern, `YYYY/MM/DD hh:mm:ss`.
pub const DEFAULT_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Default gap between the end of the timestamp column and the tree glyphs.
pub const DEFAULT_PADDING: usize = 3;

/// Rendering and filtering settings for the tree formatter.
///
/// Deserializes with every field optional, so a host can embed it in its
/// own config file and only spell out what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum enabled level.
    pub level: Level,
    /// Whether the caller line is shown, per level. `None` means "use the
    /// defaults"; a level missing from a present map is treated as enabled.
    pub caller_enabled: Option<HashMap<Level, bool>>,
    /// chrono strftime pattern for the timestamp column.
    pub time_format: String,
    pub padding: usize,
    /// Print level names in full instead of cutting them to 4 characters.
    pub full_level_labels: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Level::Info,
            caller_enabled: Some(default_caller_map()),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            padding: DEFAULT_PADDING,
            full_level_labels: false,
        }
    }
}

/// Caller display enabled for every standard level.
pub fn default_caller_map() -> HashMap<Level, bool> {
    Level::STANDARD.iter().map(|level| (*level, true)).collect()
}

impl Config {
    /// Fills configuration gaps so the result can be rendered as-is.
    ///
    /// A missing caller map is replaced by [`default_caller_map`]. An empty
    /// or unparsable time format falls back to [`DEFAULT_TIME_FORMAT`].
    pub fn normalize(mut self) -> Self {
        if self.caller_enabled.is_none() {
            self.caller_enabled = Some(default_caller_map());
        }
        if !is_valid_time_format(&self.time_format) {
            self.time_format = DEFAULT_TIME_FORMAT.to_string();
        }
        self
    }

    /// Whether the caller line is shown for `level`. Missing entries
    /// are enabled.
    pub fn caller_enabled(&self, level: Level) -> bool {
        self.caller_enabled
            .as_ref()
            .and_then(|map| map.get(&level).copied())
            .unwrap_or(true)
    }

    /// Returns the caller map, creating the default one first if absent.
    pub(crate) fn caller_map_mut(&mut self) -> &mut HashMap<Level, bool> {
        self.caller_enabled.get_or_insert_with(default_caller_map)
    }

    pub(crate) fn set_caller(&mut self, levels: &[Level], on: bool) {
        let map = self.caller_map_mut();
        for level in levels {
            map.insert(*level, on);
        }
    }
}

fn is_valid_time_format(pattern: &str) -> bool {
    !pattern.is_empty() && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_true() -> HashMap<Level, bool> {
        HashMap::from([
            (Level::Debug, true),
            (Level::Info, true),
            (Level::Warn, true),
            (Level::Error, true),
        ])
    }

    #[test]
    fn default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.level, Level::Info);
        assert_eq!(cfg.caller_enabled, Some(all_true()));
        assert_eq!(cfg.time_format, "%Y/%m/%d %H:%M:%S");
        assert_eq!(cfg.padding, 3);
        assert!(!cfg.full_level_labels);
    }

    #[test]
    fn normalize_fills_missing_caller_map() {
        let cfg = Config {
            level: Level::Warn,
            caller_enabled: None,
            ..Config::default()
        }
        .normalize();
        assert_eq!(cfg.level, Level::Warn);
        assert_eq!(cfg.caller_enabled, Some(all_true()));
    }

    #[test]
    fn normalize_keeps_custom_caller_map() {
        let custom = HashMap::from([
            (Level::Debug, true),
            (Level::Info, false),
            (Level::Warn, true),
            (Level::Error, false),
        ]);
        let cfg = Config {
            caller_enabled: Some(custom.clone()),
            ..Config::default()
        }
        .normalize();
        assert_eq!(cfg.caller_enabled, Some(custom));
    }

    #[test]
    fn normalize_replaces_bad_time_format() {
        for bad in ["", "%Y/%Q", "%"] {
            let cfg = Config {
                time_format: bad.to_string(),
                ..Config::default()
            }
            .normalize();
            assert_eq!(cfg.time_format, DEFAULT_TIME_FORMAT, "pattern {bad:?}");
        }

        let kitchen = Config {
            time_format: "%I:%M%p".to_string(),
            ..Config::default()
        }
        .normalize();
        assert_eq!(kitchen.time_format, "%I:%M%p");
    }

    #[test]
    fn missing_level_key_fails_open() {
        let cfg = Config {
            caller_enabled: Some(HashMap::from([(Level::Info, false)])),
            ..Config::default()
        };
        assert!(!cfg.caller_enabled(Level::Info));
        assert!(cfg.caller_enabled(Level::Warn));
        assert!(cfg.caller_enabled(Level::Trace));
    }

    #[test]
    fn set_caller_creates_default_map() {
        let mut cfg = Config {
            caller_enabled: None,
            ..Config::default()
        };
        cfg.set_caller(&[Level::Debug], false);
        let mut want = all_true();
        want.insert(Level::Debug, false);
        assert_eq!(cfg.caller_enabled, Some(want));
    }

    #[test]
    fn deserializes_partial_config() {
        let cfg: Config = serde_json::from_str(
            r#"{"level": "WARN", "caller_enabled": {"debug": false}, "padding": 5}"#,
        )
        .unwrap();
        assert_eq!(cfg.level, Level::Warn);
        assert_eq!(cfg.padding, 5);
        assert_eq!(cfg.time_format, DEFAULT_TIME_FORMAT);
        assert!(!cfg.caller_enabled(Level::Debug));
        assert!(cfg.caller_enabled(Level::Error));
    }

    #[test]
    fn rejects_unknown_level_name() {
        let res: Result<Config, _> = serde_json::from_str(r#"{"level": "loud"}"#);
        assert!(res.is_err());
    }
}
