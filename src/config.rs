//! Configuration management for Peek.
//!
//! Handles loading display options from a TOML file. Everything has a
//! default; a missing config file is not an error.

use crate::error::{PeekError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for Peek.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Display options for rendered results.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Display options for rendered results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Maximum number of rows rendered per result; the session core never
    /// truncates, only the display does.
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,

    /// Text shown for NULL cells.
    #[serde(default = "default_null_text")]
    pub null_text: String,
}

fn default_max_rows() -> usize {
    1000
}

fn default_null_text() -> String {
    "NULL".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_rows: default_max_rows(),
            null_text: default_null_text(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults; an unreadable or invalid file is
    /// a configuration error.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| PeekError::config(format!("Cannot read {}: {e}", path.display())))?;

        toml::from_str(&content)
            .map_err(|e| PeekError::config(format!("Invalid config file: {e}")))
    }
}

/// Returns the default config file path.
///
/// Uses the platform config directory (`~/.config/peek/config.toml` on
/// Linux), falling back to the temp directory when none exists.
pub fn default_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("peek").join("config.toml");
    }

    std::env::temp_dir().join("peek-config.toml")
}
