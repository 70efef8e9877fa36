//! Environment variable names used by this crate for configuring the tree
//! output without code changes.
//!
//! These are purely helpers; [`Config`] itself never reads the environment.

use crate::config::Config;
use crate::level::{Level, ParseLevelError};
use std::collections::HashMap;

/// Minimum enabled level, e.g. `debug`.
pub const TREE_LOG_LEVEL_ENV: &str = "TREE_LOG_LEVEL";

/// chrono strftime pattern for the timestamp column.
pub const TREE_LOG_TIME_FORMAT_ENV: &str = "TREE_LOG_TIME_FORMAT";

/// Gap between the timestamp column and the tree glyphs.
pub const TREE_LOG_PADDING_ENV: &str = "TREE_LOG_PADDING";

/// Comma-separated levels that show the caller line, e.g. `warn,error`.
/// Levels not listed are switched off; unset keeps the defaults.
pub const TREE_LOG_CALLER_ENV: &str = "TREE_LOG_CALLER";

/// `1`/`true` prints level names in full instead of 4 characters.
pub const TREE_LOG_FULL_LABELS_ENV: &str = "TREE_LOG_FULL_LABELS";

/// Error returned by [`config_from_env`].
#[derive(thiserror::Error, Debug)]
pub enum EnvConfigError {
    #[error("{var}: {source}")]
    Level {
        var: &'static str,
        #[source]
        source: ParseLevelError,
    },

    #[error("{var}: expected a non-negative integer, got {value:?}")]
    Padding { var: &'static str, value: String },

    #[error("{var}: expected a boolean, got {value:?}")]
    Flag { var: &'static str, value: String },
}

/// Read an environment variable or fall back to a provided default.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Build a [`Config`] from the `TREE_LOG_*` variables, starting from
/// [`Config::default`] for anything unset.
pub fn config_from_env() -> Result<Config, EnvConfigError> {
    config_from_lookup(|key| std::env::var(key).ok())
}

fn config_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, EnvConfigError> {
    let mut cfg = Config::default();

    if let Some(raw) = lookup(TREE_LOG_LEVEL_ENV) {
        cfg.level = raw.parse().map_err(|source| EnvConfigError::Level {
            var: TREE_LOG_LEVEL_ENV,
            source,
        })?;
    }

    if let Some(raw) = lookup(TREE_LOG_TIME_FORMAT_ENV) {
        cfg.time_format = raw;
    }

    if let Some(raw) = lookup(TREE_LOG_PADDING_ENV) {
        cfg.padding = raw.trim().parse().map_err(|_| EnvConfigError::Padding {
            var: TREE_LOG_PADDING_ENV,
            value: raw.clone(),
        })?;
    }

    if let Some(raw) = lookup(TREE_LOG_CALLER_ENV) {
        let mut map: HashMap<Level, bool> = Level::STANDARD.iter().map(|l| (*l, false)).collect();
        for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let level: Level = name.parse().map_err(|source| EnvConfigError::Level {
                var: TREE_LOG_CALLER_ENV,
                source,
            })?;
            map.insert(level, true);
        }
        cfg.caller_enabled = Some(map);
    }

    if let Some(raw) = lookup(TREE_LOG_FULL_LABELS_ENV) {
        cfg.full_level_labels = match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" | "" => false,
            _ => {
                return Err(EnvConfigError::Flag {
                    var: TREE_LOG_FULL_LABELS_ENV,
                    value: raw,
                })
            }
        };
    }

    Ok(cfg.normalize())
}
