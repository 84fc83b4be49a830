//! File logging setup
//!
//! The TUI owns stdout while running, so log records go to a file under the
//! user's data directory. Nothing is installed when logging is disabled and
//! the `log` macros become no-ops.

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};

/// Get the path of the log file
pub fn get_log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_local_dir()
        .or_else(dirs::cache_dir)
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(data_dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

/// Build a dispatch writing timestamped records at `level` into `path`
pub fn build_dispatch(level: log::LevelFilter, path: &Path) -> Result<fern::Dispatch> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] [{}] [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file))
}

/// Install the global logger according to `config`.
///
/// Returns the log file path when logging was enabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = get_log_file_path()?;
    build_dispatch(config.level_filter()?, &path)?
        .apply()
        .context("Failed to install logger")?;

    log::info!("daylist {} starting", env!("CARGO_PKG_VERSION"));
    Ok(Some(path))
}
