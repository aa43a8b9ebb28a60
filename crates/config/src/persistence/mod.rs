//! Configuration persistence for connection profiles.
//!
//! Responsibilities:
//! - Determine the platform configuration file path.
//! - Read and write the profiles file.
//! - Manage named profiles and their keyring-backed secrets.
//! - Backup corrupt config files before overwriting.
//!
//! Does NOT handle:
//! - Loading environment variables (see `loader`).
//! - High-level configuration merging (see `loader`).
//! - REST API communication (see `crates/client`).
//!
//! Invariants:
//! - Profile names are unique within a configuration file.
//! - Corrupt config files are backed up before being overwritten.

use std::path::{Path, PathBuf};

mod path;
mod profiles;
mod state;

pub use profiles::ConfigManager;
pub use state::{ConfigFile, ConfigFileError};

pub(crate) use path::default_config_path;
pub(crate) use state::read_config_file;

/// Renames a corrupt config file to `<name>.corrupt.<timestamp>` so it no
/// longer blocks startup and can still be recovered by hand.
pub(crate) fn create_corrupt_backup(path: &Path) -> Result<PathBuf, std::io::Error> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let backup_path = path.with_extension(format!("corrupt.{}", timestamp));
    std::fs::rename(path, &backup_path)?;

    Ok(backup_path)
}
