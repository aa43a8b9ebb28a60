//! Client builder for constructing [`InventoryClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, auth_strategy)
//! - Normalizing the base URL and API root path
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`InventoryClient`] methods)
//! - Loading configuration from files or the environment (see `inventory_config`)
//!
//! # Invariants
//! - `base_url` and `auth_strategy` are required before calling `build()`
//! - The base URL never ends with `/`; the API URL always does
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use crate::auth::AuthStrategy;
use crate::client::InventoryClient;
use crate::client::cache::ReferenceCache;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use inventory_config::{
    Config,
    constants::{
        DEFAULT_API_ROOT, DEFAULT_MAX_REDIRECTS, DEFAULT_MAX_RETRIES, DEFAULT_REFERENCE_TTL_SECS,
        DEFAULT_TIMEOUT_SECS,
    },
};

/// Builder for creating a new [`InventoryClient`].
pub struct InventoryClientBuilder {
    base_url: Option<String>,
    api_root: String,
    auth_strategy: Option<AuthStrategy>,
    skip_verify: bool,
    timeout: Duration,
    max_retries: usize,
    reference_ttl: Duration,
    metrics: Option<MetricsCollector>,
}

impl Default for InventoryClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_root: DEFAULT_API_ROOT.to_string(),
            auth_strategy: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            reference_ttl: Duration::from_secs(DEFAULT_REFERENCE_TTL_SECS),
            metrics: None,
        }
    }
}

impl InventoryClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server base URL, e.g. `https://inventory.example.com`.
    ///
    /// Trailing slashes are removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the API root path relative to the base URL. Default is `/api/`.
    pub fn api_root(mut self, root: impl Into<String>) -> Self {
        self.api_root = root.into();
        self
    }

    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = Some(strategy);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against development servers with self-signed certificates.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the number of retries for reads. Zero means a single attempt.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// How long field metadata and inventory types stay cached.
    pub fn reference_ttl(mut self, ttl: Duration) -> Self {
        self.reference_ttl = ttl;
        self
    }

    /// Set the metrics collector for API call performance tracking.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Create a client builder from loaded configuration.
    ///
    /// Shared by the CLI and TUI so both interpret config identically.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.api_root = config.connection.api_root.clone();
        self.auth_strategy = Some(AuthStrategy::from(&config.auth.strategy));
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.max_retries = config.connection.max_retries;
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    fn normalize_api_root(root: &str) -> String {
        let trimmed = root.trim().trim_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        }
    }

    /// Build the [`InventoryClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is missing or unparsable.
    /// Returns [`ClientError::AuthFailed`] if `auth_strategy` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<InventoryClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);
        url::Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;

        let auth = self
            .auth_strategy
            .ok_or_else(|| ClientError::AuthFailed("auth_strategy is required".to_string()))?;

        let api_url = format!("{base_url}{}", Self::normalize_api_root(&self.api_root));

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(InventoryClient {
            http,
            base_url,
            api_url,
            auth,
            max_retries: self.max_retries,
            cache: ReferenceCache::new(self.reference_ttl, self.metrics.clone()),
            metrics: self.metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn token() -> AuthStrategy {
        AuthStrategy::ApiToken {
            token: SecretString::new("test-token".to_string().into()),
        }
    }

    #[test]
    fn test_from_config_with_api_token() {
        let config = Config::with_api_token(
            "https://inventory.example.com".to_string(),
            SecretString::new("test-token".to_string().into()),
        );

        let client = InventoryClient::builder().from_config(&config).build().unwrap();

        assert_eq!(client.base_url(), "https://inventory.example.com");
        assert_eq!(client.api_url(), "https://inventory.example.com/api/");
        assert!(client.is_api_token_auth());
    }

    #[test]
    fn test_from_config_with_basic_auth() {
        let config = Config::with_basic_auth(
            "https://inventory.example.com".to_string(),
            "clerk".to_string(),
            SecretString::new("pw".to_string().into()),
        );

        let client = InventoryClient::builder().from_config(&config).build().unwrap();
        assert!(!client.is_api_token_auth());
    }

    #[test]
    fn test_from_config_preserves_settings() {
        let mut config = Config::with_api_token(
            "https://inventory.example.com".to_string(),
            SecretString::new("test-token".to_string().into()),
        );
        config.connection.skip_verify = true;
        config.connection.timeout = Duration::from_secs(120);
        config.connection.max_retries = 7;
        config.connection.api_root = "/inventory/api/".to_string();

        let builder = InventoryClient::builder().from_config(&config);
        assert!(builder.skip_verify);
        assert_eq!(builder.timeout, Duration::from_secs(120));
        assert_eq!(builder.max_retries, 7);

        let client = builder.build().unwrap();
        assert_eq!(client.api_url(), "https://inventory.example.com/inventory/api/");
    }

    #[test]
    fn test_base_url_trailing_slashes_removed() {
        let client = InventoryClient::builder()
            .base_url("http://localhost:8000//".to_string())
            .auth_strategy(token())
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.api_url(), "http://localhost:8000/api/");
    }

    #[test]
    fn test_api_root_normalized() {
        assert_eq!(InventoryClientBuilder::normalize_api_root("api"), "/api/");
        assert_eq!(InventoryClientBuilder::normalize_api_root("/api"), "/api/");
        assert_eq!(InventoryClientBuilder::normalize_api_root("/"), "/");
    }

    #[test]
    fn test_missing_base_url_is_invalid_url() {
        let err = InventoryClient::builder()
            .auth_strategy(token())
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_unparsable_base_url_is_invalid_url() {
        let err = InventoryClient::builder()
            .base_url("not a url".to_string())
            .auth_strategy(token())
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_missing_auth_is_auth_failed() {
        let err = InventoryClient::builder()
            .base_url("http://localhost:8000".to_string())
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::AuthFailed(_)));
    }
}
