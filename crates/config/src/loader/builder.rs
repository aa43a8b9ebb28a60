//! `ConfigLoader`: layers profile, environment and explicit settings into a
//! validated [`Config`].
//!
//! Later layers win field by field; callers apply the profile, then the
//! environment, then flags. An API token takes precedence over basic
//! credentials. The built base URL has no trailing slash and the API root
//! starts and ends with `/`.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;

use super::env::read_env;
use super::error::ConfigError;
use super::overrides::Overrides;
use super::profile::read_profile;
use crate::constants::{
    DEFAULT_API_ROOT, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS, MAX_MAX_RETRIES, MAX_TIMEOUT_SECS,
};
use crate::types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};

#[derive(Default)]
pub struct ConfigLoader {
    values: Overrides,
    profile_name: Option<String>,
    config_path: Option<PathBuf>,
    /// Requested profile that was not found.
    missing_profile: Option<String>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `.env` file from the working directory.
    ///
    /// Skipped when `DOTENV_DISABLED` is `true` or `1`. A missing file is not
    /// an error.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        let disabled = matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true" | "1")
        );
        if disabled {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if e.not_found() => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    pub fn with_profile_name(mut self, name: String) -> Self {
        self.profile_name = Some(name);
        self
    }

    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Layer in the selected profile, if one was named.
    pub fn from_profile(mut self) -> Result<Self, ConfigError> {
        let Some(name) = self.profile_name.clone() else {
            return Ok(self);
        };
        match read_profile(&name, self.config_path.as_deref())? {
            Some(profile) => self.values.layer(profile),
            None => self.missing_profile = Some(name),
        }
        Ok(self)
    }

    /// Layer in `INVENTORY_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        self.values.layer(read_env()?);
        Ok(self)
    }

    pub fn with_base_url(mut self, url: String) -> Self {
        self.values.base_url = Some(url);
        self
    }

    pub fn with_api_root(mut self, root: String) -> Self {
        self.values.api_root = Some(root);
        self
    }

    pub fn with_username(mut self, username: String) -> Self {
        self.values.username = Some(username);
        self
    }

    pub fn with_password(mut self, password: String) -> Self {
        self.values.password = Some(SecretString::new(password.into()));
        self
    }

    pub fn with_api_token(mut self, token: String) -> Self {
        self.values.api_token = Some(SecretString::new(token.into()));
        self
    }

    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.values.skip_verify = Some(skip);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.values.timeout = Some(timeout);
        self
    }

    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.values.max_retries = Some(retries);
        self
    }

    pub fn with_fetch_root(mut self, fetch: bool) -> Self {
        self.values.fetch_root = Some(fetch);
        self
    }

    /// Validate and assemble the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        // A missing profile only matters when env/CLI did not fill the gap.
        if let Some(name) = self.missing_profile
            && !self.values.is_complete()
        {
            return Err(ConfigError::ProfileNotFound(name));
        }

        let values = self.values;
        let base_url = values
            .base_url
            .as_deref()
            .map(validate_and_normalize_base_url)
            .transpose()?
            .ok_or(ConfigError::MissingBaseUrl)?;
        let api_root = normalize_api_root(values.api_root.as_deref().unwrap_or(DEFAULT_API_ROOT))?;

        let strategy = match (values.api_token, values.username, values.password) {
            (Some(token), _, _) => AuthStrategy::ApiToken { token },
            (None, Some(username), Some(password)) => AuthStrategy::Basic { username, password },
            _ => return Err(ConfigError::MissingAuth),
        };

        let timeout = values
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        check_timeout(timeout)?;
        let max_retries = values.max_retries.unwrap_or(DEFAULT_MAX_RETRIES);
        if max_retries > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!("must be between 0 and {MAX_MAX_RETRIES} (got {max_retries})"),
            });
        }

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                api_root,
                skip_verify: values.skip_verify.unwrap_or(false),
                timeout,
                max_retries,
            },
            auth: AuthConfig { strategy },
            fetch_root_on_startup: values.fetch_root.unwrap_or(true),
        })
    }
}

fn check_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let secs = timeout.as_secs();
    let message = if secs == 0 {
        "timeout must be greater than 0 seconds".to_string()
    } else if secs > MAX_TIMEOUT_SECS {
        format!("timeout exceeds maximum allowed value of {MAX_TIMEOUT_SECS} seconds")
    } else {
        return Ok(());
    };
    Err(ConfigError::InvalidTimeout { message })
}

fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "base_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. http://localhost:8000): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: format!(
                "scheme must be http or https (e.g. http://localhost:8000), got: {scheme}"
            ),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: "host is required (e.g. http://localhost:8000)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

/// `api`, `/api` and `/api/` all become `/api/`.
fn normalize_api_root(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.contains("://") || trimmed.contains(char::is_whitespace) {
        return Err(ConfigError::InvalidValue {
            var: "api_root".into(),
            message: "must be a path such as /api/".into(),
        });
    }
    if trimmed.is_empty() {
        return Ok("/".to_string());
    }
    Ok(format!("/{trimmed}/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_normalize_api_root_is_idempotent(raw in "[a-z/]{0,24}") {
            let once = normalize_api_root(&raw).unwrap();
            prop_assert!(once.starts_with('/') && once.ends_with('/'));
            prop_assert_eq!(normalize_api_root(&once).unwrap(), once);
        }
    }

    #[test]
    fn test_normalize_api_root_variants() {
        assert_eq!(normalize_api_root("api").unwrap(), "/api/");
        assert_eq!(normalize_api_root("/api").unwrap(), "/api/");
        assert_eq!(normalize_api_root("/inventory/api/").unwrap(), "/inventory/api/");
        assert_eq!(normalize_api_root("/").unwrap(), "/");
    }

    #[test]
    fn test_normalize_api_root_rejects_urls() {
        assert!(normalize_api_root("http://elsewhere/api/").is_err());
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        assert_eq!(
            validate_and_normalize_base_url("http://localhost:8000/").unwrap(),
            "http://localhost:8000"
        );
    }
}
