//! Connection configuration types for the inventory client.
//!
//! Responsibilities:
//! - Define connection settings (URL, API root path, TLS verification, timeouts, retries).
//! - Define the main `Config` structure combining connection, auth and startup behavior.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Configuration persistence (see `persistence` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - `api_root` always starts and ends with `/` once built by the loader.

use crate::constants::{DEFAULT_API_ROOT, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::{AuthConfig, AuthStrategy};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the inventory server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the inventory server (e.g., https://inventory.example.com)
    pub base_url: String,
    /// Path of the API root document, relative to `base_url`
    #[serde(default = "default_api_root")]
    pub api_root: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Maximum number of retries for failed idempotent reads
    pub max_retries: usize,
}

pub(crate) fn default_api_root() -> String {
    DEFAULT_API_ROOT.to_string()
}

fn default_fetch_root() -> bool {
    true
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
    /// Fetch the API root document automatically once authenticated
    #[serde(default = "default_fetch_root")]
    pub fetch_root_on_startup: bool,
}

impl Config {
    /// Full URL of the API root document.
    pub fn api_root_url(&self) -> String {
        format!("{}{}", self.connection.base_url, self.connection.api_root)
    }

    /// Create a config that authenticates with an API token.
    pub fn with_api_token(base_url: String, token: SecretString) -> Self {
        Self::with_strategy(base_url, AuthStrategy::ApiToken { token })
    }

    /// Create a config that authenticates with basic credentials.
    pub fn with_basic_auth(base_url: String, username: String, password: SecretString) -> Self {
        Self::with_strategy(base_url, AuthStrategy::Basic { username, password })
    }

    fn with_strategy(base_url: String, strategy: AuthStrategy) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                api_root: default_api_root(),
                skip_verify: false,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                max_retries: DEFAULT_MAX_RETRIES,
            },
            auth: AuthConfig { strategy },
            fetch_root_on_startup: default_fetch_root(),
        }
    }
}
