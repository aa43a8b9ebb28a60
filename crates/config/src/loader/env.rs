//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `INVENTORY_*` environment variables into an [`Overrides`].
//!
//! Does NOT handle:
//! - Loading from profile files (see profile.rs).
//! - Building the final Config (see builder.rs).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid values return `ConfigError::InvalidValue` naming the variable.

use secrecy::SecretString;
use std::str::FromStr;
use std::time::Duration;

use super::error::ConfigError;
use super::overrides::Overrides;
use crate::constants::MAX_MAX_RETRIES;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(var: &str, message: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(var)
        .map(|raw| {
            raw.parse::<T>().map_err(|_| ConfigError::InvalidValue {
                var: var.to_string(),
                message: message.to_string(),
            })
        })
        .transpose()
}

/// Settings found in `INVENTORY_*` variables.
pub(crate) fn read_env() -> Result<Overrides, ConfigError> {
    let max_retries =
        parse_env::<usize>("INVENTORY_MAX_RETRIES", "must be a non-negative integer")?;
    if let Some(value) = max_retries
        && value > MAX_MAX_RETRIES
    {
        return Err(ConfigError::InvalidMaxRetries {
            message: format!("must be between 0 and {MAX_MAX_RETRIES} (got {value})"),
        });
    }

    Ok(Overrides {
        base_url: env_var_or_none("INVENTORY_BASE_URL"),
        api_root: env_var_or_none("INVENTORY_API_ROOT"),
        username: env_var_or_none("INVENTORY_USERNAME"),
        password: env_var_or_none("INVENTORY_PASSWORD").map(|p| SecretString::new(p.into())),
        api_token: env_var_or_none("INVENTORY_API_TOKEN").map(|t| SecretString::new(t.into())),
        skip_verify: parse_env("INVENTORY_SKIP_VERIFY", "must be true or false")?,
        timeout: parse_env("INVENTORY_TIMEOUT", "must be a number")?.map(Duration::from_secs),
        max_retries,
        fetch_root: parse_env("INVENTORY_FETCH_ROOT", "must be true or false")?,
    })
}
