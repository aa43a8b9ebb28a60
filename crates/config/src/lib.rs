//! Configuration management for the inventory client.
//!
//! This crate provides types and loaders for managing inventory API connection
//! configuration from environment variables, `.env` files, and profile files.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use persistence::{ConfigFile, ConfigFileError, ConfigManager};
pub use types::{
    AuthConfig, AuthStrategy, Config, ConnectionConfig, KEYRING_SERVICE, ProfileConfig,
    SecureValue,
};
