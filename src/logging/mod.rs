//! Diagnostic logging to disk.
//!
//! The terminal belongs to the card while it runs, so tracing output goes to
//! a daily file `xmascard_<date>.log` in the configured log directory
//! (default: `~/.local/share/xmascard/logs/`). When disabled no subscriber is
//! installed and the `tracing` macros are no-ops.

use crate::assets::expand_home;
use crate::config::LoggingConfig;
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;
use tracing::Level;

/// Parse a level name, falling back to `INFO` for anything unrecognized.
pub fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::INFO)
}

pub fn log_file_path(log_dir: &Path, date: &str) -> PathBuf {
    log_dir.join(format!("xmascard_{}.log", date))
}

/// Install the file subscriber. Returns the log file path when enabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let log_dir = expand_home(Path::new(&config.log_dir));
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let path = log_file_path(&log_dir, &date);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(parse_level(&config.level))
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(Some(path))
}
