//! Errors raised while assembling a connection [`Config`](crate::Config).
//!
//! Variants carry the variable name or path that failed. `.env` failures only
//! report a byte position or an I/O kind, never the line itself.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::persistence::ConfigFileError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Base URL is required. Set INVENTORY_BASE_URL or configure a profile.")]
    MissingBaseUrl,

    #[error("No credentials configured. Set INVENTORY_API_TOKEN, or INVENTORY_USERNAME and INVENTORY_PASSWORD")]
    MissingAuth,

    #[error("No config directory available: {0}")]
    ConfigDirUnavailable(String),

    #[error("Failed to read config file at {path}")]
    ConfigFileRead { path: PathBuf },

    #[error("Failed to parse config file at {path}")]
    ConfigFileParse { path: PathBuf },

    #[error("Failed to write config file at {path}")]
    ConfigFileWrite { path: PathBuf },

    #[error("Unknown profile '{0}'")]
    ProfileNotFound(String),

    #[error("Could not read secret from keyring: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("Timeout rejected: {message}")]
    InvalidTimeout { message: String },

    #[error("Retry limit rejected: {message}")]
    InvalidMaxRetries { message: String },

    /// Only the byte index is reported, never the offending line.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl From<ConfigFileError> for ConfigError {
    fn from(error: ConfigFileError) -> Self {
        match error {
            ConfigFileError::Read { path, .. } => ConfigError::ConfigFileRead { path },
            ConfigFileError::Parse { path, .. } => ConfigError::ConfigFileParse { path },
            ConfigFileError::Write { path, .. } => ConfigError::ConfigFileWrite { path },
        }
    }
}
