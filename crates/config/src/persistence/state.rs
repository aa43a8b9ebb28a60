//! On-disk representation of the profiles file.
//!
//! Responsibilities:
//! - Define `ConfigFile`, the `{ "profiles": { ... } }` document.
//! - Read and parse it with path-annotated errors.
//!
//! Does NOT handle:
//! - Writing the file (see `profiles`).
//! - Resolving keyring secrets.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::ProfileConfig;

/// The config file on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Named profiles for different inventory servers.
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileConfig>,
}

/// Errors that can occur when reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Reads and parses the config file from disk.
pub(crate) fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str::<ConfigFile>(&content).map_err(|e| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_config_file_with_profiles() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "profiles": {{ "dev": {{ "base_url": "http://localhost:8000", "username": "clerk" }} }} }}"#
        )
        .unwrap();

        let config = read_config_file(file.path()).unwrap();
        let dev = config.profiles.get("dev").unwrap();
        assert_eq!(dev.base_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(dev.username.as_deref(), Some("clerk"));
    }

    #[test]
    fn test_read_config_file_empty_object() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        let config = read_config_file(file.path()).unwrap();
        assert!(config.profiles.is_empty());
    }

    #[test]
    fn test_read_config_file_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "profiles = nope").unwrap();

        let err = read_config_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigFileError::Parse { .. }));
    }

    #[test]
    fn test_read_config_file_missing() {
        let err = read_config_file(Path::new("/definitely/not/here/config.json")).unwrap_err();
        assert!(matches!(err, ConfigFileError::Read { .. }));
    }
}
