//! Configuration file support.
//!
//! Read from `<config_dir>/hangterm/config.toml`. Every field has a default,
//! so a missing file or a partial one is fine. Command-line flags win over
//! anything set here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::hangman::Theme;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: Theme,
    /// Fixed seed for phrase selection; random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. "info" or "hangterm=debug".
    #[serde(default = "default_level")]
    pub level: String,
    /// Log file path. Defaults to `<data_dir>/hangterm/hangterm.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

fn default_level() -> String {
    "info".into()
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hangterm")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_from(&config_path())
}

pub fn load_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("Failed to parse config file {}", path.display()))
}
