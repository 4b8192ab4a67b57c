//! Output file handling configuration.
//!
//! This module contains the `OutputConfig` struct which controls how the
//! command-line tool treats the output path.

use serde::{Deserialize, Serialize};

/// Output handling configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputConfig {
    /// Create missing parent directories of the output path.
    /// Default: false
    #[serde(default)]
    pub create_dirs: bool,

    /// Replace an existing output file.
    /// Default: true
    #[serde(default = "default_true")]
    pub overwrite: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            create_dirs: false,
            overwrite: true,
        }
    }
}

fn default_true() -> bool {
    true
}
