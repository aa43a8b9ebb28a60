//! Profile configuration types for the inventory client.
//!
//! Responsibilities:
//! - Define `ProfileConfig` for storing named connection profiles.
//! - Support partial configuration (all fields optional).
//!
//! Does NOT handle:
//! - Profile loading or merging (see `loader` module).
//! - Profile persistence (see `persistence` module).
//!
//! Invariants:
//! - All fields are optional to allow partial profile definitions.
//! - Password/token fields use `SecureValue` for flexible secret storage.

use crate::types::auth::SecureValue;
use serde::{Deserialize, Serialize};

/// Profile configuration for storing named connection profiles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Base URL of the inventory server
    pub base_url: Option<String>,
    /// Path of the API root document
    pub api_root: Option<String>,
    /// Username for basic authentication
    pub username: Option<String>,
    /// Password for basic authentication
    pub password: Option<SecureValue>,
    /// API token for token authentication
    pub api_token: Option<SecureValue>,
    /// Whether to skip TLS verification
    pub skip_verify: Option<bool>,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Maximum number of retries for failed reads
    pub max_retries: Option<usize>,
    /// Whether to fetch the API root document on startup
    pub fetch_root: Option<bool>,
}
