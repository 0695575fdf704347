use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "HANGTERM_LOG";

pub fn default_log_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hangterm")
        .join("hangterm.log")
}

fn filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Sends tracing output to a file. The terminal belongs to the game, so if
/// the file can't be opened logging is simply off.
pub fn init(config: &LoggingConfig) -> Option<PathBuf> {
    let path = config.file.clone().unwrap_or_else(default_log_file);

    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return None;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    let installed = tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(filter(config))
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(path = %path.display(), "Logging initialized");
        Some(path)
    } else {
        None
    }
}
