// crates/cli/src/logging.rs
//! Logging to a file while the terminal is in raw mode

use anyhow::{Context, Result};
use log::LevelFilter;
use marquee_config::AppConfig;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// The configured log file, falling back to `default_path`
pub fn log_path(config: &AppConfig, default_path: Option<PathBuf>) -> Option<PathBuf> {
    config.log_file.clone().or(default_path)
}

/// Sends all log output to `path` at `level`; `RUST_LOG` overrides the level
pub fn init(level: LevelFilter, path: &Path) -> Result<()> {
    let file = open_log_file(path)?;

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to initialise logging")
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}
