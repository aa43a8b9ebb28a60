//! Profile file loading for configuration.
//!
//! Invariants:
//! - Profile settings are layered before environment variables.
//! - A missing file or profile is not an error here; `build()` decides.

use std::path::Path;
use std::time::Duration;

use super::error::ConfigError;
use super::overrides::Overrides;
use crate::persistence::{default_config_path, read_config_file};
use crate::types::ProfileConfig;

/// Settings stored under `profile_name`, or `None` when the file or the
/// profile does not exist.
pub(crate) fn read_profile(
    profile_name: &str,
    config_path: Option<&Path>,
) -> Result<Option<Overrides>, ConfigError> {
    let config_path = match config_path {
        Some(path) => path.to_path_buf(),
        None => {
            default_config_path().map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?
        }
    };

    if !config_path.exists() {
        return Ok(None);
    }

    let file = read_config_file(&config_path)?;
    file.profiles.get(profile_name).map(overrides_from).transpose()
}

fn overrides_from(profile: &ProfileConfig) -> Result<Overrides, ConfigError> {
    Ok(Overrides {
        base_url: profile.base_url.clone(),
        api_root: profile.api_root.clone(),
        username: profile.username.clone(),
        password: profile.password.as_ref().map(|p| p.resolve()).transpose()?,
        api_token: profile.api_token.as_ref().map(|t| t.resolve()).transpose()?,
        skip_verify: profile.skip_verify,
        timeout: profile.timeout_seconds.map(Duration::from_secs),
        max_retries: profile.max_retries,
        fetch_root: profile.fetch_root,
    })
}
