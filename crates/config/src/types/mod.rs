//! Configuration type definitions for the inventory client.
//!
//! Responsibilities:
//! - Define configuration types for authentication, connections, and profiles.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Configuration persistence (see `persistence` module).
//! - Actual network connections or authentication flows (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.

mod auth;
pub(crate) mod connection;
mod profile;

pub use auth::{AuthConfig, AuthStrategy, KEYRING_SERVICE, SecureValue};
pub use connection::{Config, ConnectionConfig};
pub use profile::ProfileConfig;
