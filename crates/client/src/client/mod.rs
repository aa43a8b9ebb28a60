//! Main inventory REST API client and API methods.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - [`cache`]: Reference data caching (field metadata, inventory types)
//! - `root`: API root document
//! - `projects`: Project reads and writes
//! - `inventory_types`: Inventory type reads
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Building view models (see the `inventory-view` crate)
//!
//! # Invariants
//! - Reads retry up to `max_retries` times on transient statuses.
//! - Writes and the root fetch are attempted once.
//! - A successful project write invalidates nothing: field metadata and
//!   inventory types are independent of project contents.

pub mod builder;
pub mod cache;

mod inventory_types;
mod projects;
mod root;

use crate::auth::AuthStrategy;
use crate::metrics::MetricsCollector;
use cache::ReferenceCache;

/// Inventory REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use inventory_client::{AuthStrategy, InventoryClient};
/// use secrecy::SecretString;
///
/// let client = InventoryClient::builder()
///     .base_url("https://inventory.example.com".to_string())
///     .auth_strategy(AuthStrategy::ApiToken {
///         token: SecretString::new("my-token".to_string().into()),
///     })
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct InventoryClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_url: String,
    pub(crate) auth: AuthStrategy,
    pub(crate) max_retries: usize,
    pub(crate) metrics: Option<MetricsCollector>,
    pub(crate) cache: ReferenceCache,
}

impl InventoryClient {
    /// Create a new client builder.
    pub fn builder() -> builder::InventoryClientBuilder {
        builder::InventoryClientBuilder::new()
    }

    /// Server base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the API root document, always ending in `/`.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn is_api_token_auth(&self) -> bool {
        self.auth.is_token()
    }

    pub fn max_retries(&self) -> usize {
        self.max_retries
    }

    /// Reference data cache shared by clones of this client.
    pub fn cache(&self) -> &ReferenceCache {
        &self.cache
    }
}
