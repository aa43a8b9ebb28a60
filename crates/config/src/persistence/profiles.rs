//! Profile and keyring management for configuration persistence.
//!
//! Responsibilities:
//! - Manage named connection profiles (list, get, save, delete).
//! - Store profile secrets in the system keyring.
//! - Atomic save operations.
//!
//! Does NOT handle:
//! - Path determination (uses path module).
//! - Merging profiles with env/CLI values (see `loader`).
//!
//! Invariants:
//! - Profile names are unique within a config file.
//! - Writes are atomic (temp file + rename).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};

use crate::env_var_or_none;
use crate::types::{KEYRING_SERVICE, ProfileConfig, SecureValue};

use super::create_corrupt_backup;
use super::path::default_config_path;
use super::state::{ConfigFile, ConfigFileError, read_config_file};

/// Move an unreadable config file out of the way so the next save starts clean.
fn set_aside_unreadable(path: &Path, error: &ConfigFileError) {
    match create_corrupt_backup(path) {
        Ok(backup) => tracing::warn!(
            path = %path.display(),
            backup_path = %backup.display(),
            error = %error,
            "Config file unreadable, moved aside"
        ),
        Err(backup_err) => tracing::error!(
            path = %path.display(),
            error = %error,
            backup_error = %backup_err,
            "Config file unreadable and could not be moved aside"
        ),
    }
}

/// Manages loading and saving connection profiles on disk.
pub struct ConfigManager {
    config_path: PathBuf,
    config_file: ConfigFile,
}

impl ConfigManager {
    /// Creates a new `ConfigManager` using the platform config directory.
    ///
    /// `INVENTORY_CONFIG_PATH` overrides the default location when set and non-blank.
    pub fn new() -> Result<Self> {
        let config_path = match env_var_or_none("INVENTORY_CONFIG_PATH") {
            Some(path) => PathBuf::from(path),
            None => default_config_path()?,
        };
        Self::new_with_path(config_path)
    }

    /// Creates a new `ConfigManager` with a specific config file path.
    ///
    /// A file that exists but cannot be parsed is backed up with a
    /// `.corrupt.{timestamp}` extension and an empty configuration is used.
    pub fn new_with_path(config_path: PathBuf) -> Result<Self> {
        let config_file = match read_config_file(&config_path) {
            Ok(file) => file,
            Err(ConfigFileError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                ConfigFile::default()
            }
            Err(e) => {
                set_aside_unreadable(&config_path, &e);
                ConfigFile::default()
            }
        };

        Ok(Self {
            config_path,
            config_file,
        })
    }

    /// Returns the path to the configuration file.
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Returns a reference to all configured profiles.
    pub fn list_profiles(&self) -> &BTreeMap<String, ProfileConfig> {
        &self.config_file.profiles
    }

    /// Returns a single profile by name.
    pub fn get_profile(&self, name: &str) -> Option<&ProfileConfig> {
        self.config_file.profiles.get(name)
    }

    /// Saves or updates a profile configuration, then writes the file.
    pub fn save_profile(&mut self, name: &str, profile: ProfileConfig) -> Result<()> {
        self.config_file.profiles.insert(name.to_string(), profile);
        self.atomic_save()
    }

    /// Deletes a profile configuration.
    ///
    /// Keyring entries referenced by the profile are removed on a best-effort basis.
    pub fn delete_profile(&mut self, name: &str) -> Result<()> {
        let profile = self
            .config_file
            .profiles
            .remove(name)
            .ok_or_else(|| anyhow::anyhow!("Profile '{}' not found", name))?;

        for value in [&profile.password, &profile.api_token].into_iter().flatten() {
            if let SecureValue::Keyring { keyring_account } = value {
                let _ = keyring::Entry::new(KEYRING_SERVICE, keyring_account)
                    .and_then(|e| e.delete_credential());
            }
        }

        self.atomic_save()
    }

    /// Stores a secret in the system keyring and returns the `Keyring` variant.
    pub fn store_in_keyring(
        &self,
        keyring_account: &str,
        secret: &SecretString,
    ) -> Result<SecureValue> {
        let entry = keyring::Entry::new(KEYRING_SERVICE, keyring_account)?;
        entry.set_password(secret.expose_secret())?;

        Ok(SecureValue::Keyring {
            keyring_account: keyring_account.to_string(),
        })
    }

    /// Atomically saves the current configuration to disk.
    fn atomic_save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let temp_path = self.config_path.with_extension("tmp");
        let content = serde_json::to_string_pretty(&self.config_file)?;
        std::fs::write(&temp_path, content).context("Failed to write temporary config file")?;

        std::fs::rename(&temp_path, &self.config_path)
            .context("Failed to rename temporary config file")?;

        tracing::debug!(path = %self.config_path.display(), "Config saved atomically");

        Ok(())
    }
}
