//! Path helpers for configuration file locations.
//!
//! Responsibilities:
//! - Determine the platform configuration file path via `directories`.
//!
//! Does NOT handle:
//! - File I/O operations.
//! - Profile management.

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::APP_NAME;

/// Returns the default path to the configuration file.
///
/// - Linux/macOS: `~/.config/inventory-client/config.json`
/// - Windows: `%AppData%\inventory-client\config.json`
pub(crate) fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join("config.json"))
}
