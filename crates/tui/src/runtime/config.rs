//! Configuration loading for the TUI.
//!
//! Responsibilities:
//! - Merge profile, environment and flag configuration into a `Config`.
//! - Describe the active connection for the header.
//!
//! Does NOT handle:
//! - Persisting profiles (see `inventory-cli config`).
//! - Client construction (see `inventory_client::InventoryClientBuilder`).
//!
//! Invariants:
//! - Precedence is flags, then environment, then profile, then defaults.
//! - A blank `--config-path` falls back to the default location.

use anyhow::{Context, Result};
use inventory_config::{AuthStrategy, Config, ConfigLoader};

use crate::app::ConnectionContext;
use crate::cli::Cli;

/// Load the connection config for this session.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();

    if let Some(path) = &cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }
    if let Some(profile_name) = &cli.profile {
        loader = loader.with_profile_name(profile_name.clone());
    }

    loader = loader
        .from_profile()
        .context("Failed to load profile")?
        .from_env()
        .context("Failed to read environment")?;

    if let Some(url) = &cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if cli.no_fetch_root {
        loader = loader.with_fetch_root(false);
    }

    loader.build().context("Failed to build configuration")
}

/// Header text for the active connection.
pub fn connection_context(config: &Config, profile_name: Option<String>) -> ConnectionContext {
    let auth_mode = match &config.auth.strategy {
        AuthStrategy::ApiToken { .. } => "token".to_string(),
        AuthStrategy::Basic { username, .. } => format!("basic ({username})"),
    };
    ConnectionContext {
        profile_name,
        base_url: config.api_root_url(),
        auth_mode,
    }
}
