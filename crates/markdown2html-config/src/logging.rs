//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log levels accepted in config and on the command line.
pub const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoggingConfig {
    /// One of [`LEVELS`]; anything else falls back to `warn`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Whether `level` is one of [`LEVELS`] (case-insensitive).
    pub fn is_known_level(&self) -> bool {
        LEVELS.contains(&self.level.to_lowercase().as_str())
    }
}

fn default_level() -> String {
    "warn".to_string()
}
