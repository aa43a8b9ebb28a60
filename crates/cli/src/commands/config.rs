//! Configuration management commands.
//!
//! Responsibilities:
//! - List, show, create/update and delete named connection profiles.
//! - Optionally move secrets into the system keyring before anything is written.
//!
//! Does NOT handle:
//! - Merging profiles with environment variables (see `inventory_config::ConfigLoader`).
//! - Interactive secret prompts; secrets come from flags only.
//!
//! Invariants:
//! - Secrets are never printed.
//! - With `--use-keyring`, plaintext secrets never reach the config file.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use inventory_config::{ConfigManager, ProfileConfig, SecureValue};
use secrecy::SecretString;
use tracing::info;

use crate::formatters::{OutputFormat, get_formatter, output_result};

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// List all configured profiles
    List,

    /// Show one profile (secrets masked)
    Show {
        /// Profile name
        profile_name: String,
    },

    /// Create or update a profile; unspecified fields keep their saved values
    Set {
        /// Profile name
        profile_name: String,

        /// Base URL of the inventory server
        #[arg(long)]
        base_url: Option<String>,

        /// API root path relative to the base URL
        #[arg(long)]
        api_root: Option<String>,

        /// Username for basic authentication
        #[arg(long)]
        username: Option<String>,

        /// Password for basic authentication
        #[arg(long)]
        password: Option<String>,

        /// API token for token authentication
        #[arg(long)]
        api_token: Option<String>,

        /// Skip TLS certificate verification
        #[arg(long)]
        skip_verify: Option<bool>,

        /// Request timeout in seconds
        #[arg(long)]
        timeout_seconds: Option<u64>,

        /// Maximum number of retries for failed reads
        #[arg(long)]
        max_retries: Option<usize>,

        /// Fetch the API root document on startup
        #[arg(long)]
        fetch_root: Option<bool>,

        /// Store password/token in the system keyring
        #[arg(long)]
        use_keyring: bool,
    },

    /// Delete a profile
    Delete {
        /// Profile name to delete
        profile_name: String,
    },
}

/// Values for `config set`; `None` keeps the saved value.
#[derive(Debug, Default)]
struct ProfileChanges {
    base_url: Option<String>,
    api_root: Option<String>,
    username: Option<String>,
    password: Option<String>,
    api_token: Option<String>,
    skip_verify: Option<bool>,
    timeout_seconds: Option<u64>,
    max_retries: Option<usize>,
    fetch_root: Option<bool>,
}

pub fn run(
    command: ConfigCommand,
    output_format: &str,
    output_file: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut manager = match config_path.filter(|p| !p.as_os_str().is_empty()) {
        Some(path) => ConfigManager::new_with_path(path)?,
        None => ConfigManager::new()?,
    };

    match command {
        ConfigCommand::List => {
            let format = output_format.parse::<OutputFormat>()?;
            let output = get_formatter(format).format_profiles(manager.list_profiles())?;
            output_result(&output, format, output_file.as_ref())
        }
        ConfigCommand::Show { profile_name } => {
            let format = output_format.parse::<OutputFormat>()?;
            let profile = manager
                .get_profile(&profile_name)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("Profile '{}' not found", profile_name))?;
            let single = BTreeMap::from([(profile_name, profile)]);
            let output = get_formatter(format).format_profiles(&single)?;
            output_result(&output, format, output_file.as_ref())
        }
        ConfigCommand::Set {
            profile_name,
            base_url,
            api_root,
            username,
            password,
            api_token,
            skip_verify,
            timeout_seconds,
            max_retries,
            fetch_root,
            use_keyring,
        } => {
            let changes = ProfileChanges {
                base_url,
                api_root,
                username,
                password,
                api_token,
                skip_verify,
                timeout_seconds,
                max_retries,
                fetch_root,
            };
            run_set(&mut manager, &profile_name, changes, use_keyring)
        }
        ConfigCommand::Delete { profile_name } => {
            manager.delete_profile(&profile_name)?;
            info!(profile = %profile_name, "Deleted profile");
            println!("Profile '{}' deleted successfully.", profile_name);
            Ok(())
        }
    }
}

fn run_set(
    manager: &mut ConfigManager,
    profile_name: &str,
    changes: ProfileChanges,
    use_keyring: bool,
) -> Result<()> {
    let existing = manager.get_profile(profile_name).cloned().unwrap_or_default();

    let base_url = changes.base_url.or(existing.base_url);
    if base_url.is_none() {
        anyhow::bail!("Base URL is required. Use --base-url to specify the inventory server URL");
    }

    let username = changes.username.or(existing.username);
    let password = changes
        .password
        .filter(|s| !s.is_empty())
        .map(|pw| SecureValue::Plain(SecretString::new(pw.into())));
    let api_token = changes
        .api_token
        .filter(|s| !s.is_empty())
        .map(|token| SecureValue::Plain(SecretString::new(token.into())));

    let has_password = password.is_some() || existing.password.is_some();
    let has_token = api_token.is_some() || existing.api_token.is_some();
    if username.is_some() && !has_password && !has_token {
        anyhow::bail!(
            "Either --password or --api-token must be provided when using username. Use one for authentication"
        );
    }
    if username.is_none() && !has_token {
        anyhow::bail!("Authentication is required. Use --api-token, or --username with --password");
    }

    // Secrets go to the keyring before the first save so plaintext never hits disk.
    let password = match (use_keyring, &username, password) {
        (true, Some(user), Some(SecureValue::Plain(pw))) => Some(
            manager.store_in_keyring(&format!("{profile_name}-{user}-password"), &pw)?,
        ),
        (_, _, password) => password,
    };
    let api_token = match (use_keyring, api_token) {
        (true, Some(SecureValue::Plain(token))) => {
            Some(manager.store_in_keyring(&format!("{profile_name}-api-token"), &token)?)
        }
        (_, api_token) => api_token,
    };

    let profile = ProfileConfig {
        base_url,
        api_root: changes.api_root.or(existing.api_root),
        username,
        password: password.or(existing.password),
        api_token: api_token.or(existing.api_token),
        skip_verify: changes.skip_verify.or(existing.skip_verify),
        timeout_seconds: changes.timeout_seconds.or(existing.timeout_seconds),
        max_retries: changes.max_retries.or(existing.max_retries),
        fetch_root: changes.fetch_root.or(existing.fetch_root),
    };

    manager.save_profile(profile_name, profile)?;
    info!(profile = %profile_name, "Saved profile");
    println!("Profile '{}' saved successfully.", profile_name);
    Ok(())
}
