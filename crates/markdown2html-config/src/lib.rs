//! markdown2html Config
//!
//! This crate handles configuration loading and management
//! for the markdown2html command-line tool, supporting TOML files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/markdown2html/config.toml`
//! - macOS: `~/Library/Application Support/markdown2html/config.toml`
//! - Windows: `%APPDATA%\markdown2html\config.toml`
//!
//! Nothing here changes the generated HTML; it only governs how the
//! output file is written and how much the tool logs.
//!
//! # Example
//!
//! ```no_run
//! use markdown2html_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod logging;
mod output;

pub use logging::{LEVELS, LoggingConfig};
pub use output::OutputConfig;

use markdown2html_core::{Markdown2HtmlError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[output]
CreateDirs = false
Overwrite  = true

[logging]
Level = "warn"
"#;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Output file handling
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use markdown2html_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[output]"));
    /// assert!(toml.contains("[logging]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "markdown2html")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        Self::from_table(Self::load_table()?)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        Self::from_table(Self::read_table(path)?)
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If an override is provided:
    ///    - If it's a path to an existing file, load and merge it
    ///    - Otherwise, treat it as a TOML string and parse it
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        Self::layered(Self::load_table()?, override_config)
    }

    /// Build a config from a base table and an optional override.
    ///
    /// Only the keys the override actually sets replace those in `base`.
    ///
    /// # Example
    ///
    /// ```
    /// use markdown2html_config::Config;
    ///
    /// let base = toml::from_str("[output]\nCreateDirs = true").unwrap();
    /// let config = Config::layered(base, Some("[output]\nOverwrite = false")).unwrap();
    /// assert!(config.output.create_dirs);
    /// assert!(!config.output.overwrite);
    /// ```
    pub fn layered(mut base: toml::Table, override_config: Option<&str>) -> Result<Self> {
        if let Some(override_str) = override_config {
            merge_tables(&mut base, Self::parse_override(override_str)?);
        }
        Self::from_table(base)
    }

    /// Parse an override given either as a file path or as inline TOML.
    pub fn parse_override(override_str: &str) -> Result<toml::Table> {
        let override_path = Path::new(override_str);

        let override_toml = if override_path.is_file() {
            std::fs::read_to_string(override_path)?
        } else {
            override_str.to_string()
        };

        toml::from_str(&override_toml)
            .map_err(|e| Markdown2HtmlError::Config(format!("Override parse error: {}", e)))
    }

    /// The raw table at the default location, empty if there is no file.
    fn load_table() -> Result<toml::Table> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::read_table(&config_path);
            }
        }

        Ok(toml::Table::new())
    }

    fn read_table(path: &Path) -> Result<toml::Table> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            Markdown2HtmlError::Config(format!("Parse error in {}: {}", path.display(), e))
        })
    }

    fn from_table(table: toml::Table) -> Result<Self> {
        toml::Value::Table(table)
            .try_into()
            .map_err(|e| Markdown2HtmlError::Config(format!("Invalid config: {}", e)))
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| Markdown2HtmlError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}

/// Deep-merge `other` into `base`; nested tables merge key by key.
fn merge_tables(base: &mut toml::Table, other: toml::Table) {
    for (key, value) in other {
        match value {
            toml::Value::Table(incoming) => {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    merge_tables(existing, incoming);
                    continue;
                }
                base.insert(key, toml::Value::Table(incoming));
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}
