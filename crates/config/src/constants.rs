//! Centralized constants for the inventory client workspace.
//!
//! Default values shared across crates live here so the CLI, TUI and client
//! agree on them.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default maximum number of retries for failed requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound accepted for `max_retries`.
pub const MAX_MAX_RETRIES: usize = 10;

/// Path of the API root document relative to the server base URL.
pub const DEFAULT_API_ROOT: &str = "/api/";

// =============================================================================
// Pagination Defaults
// =============================================================================

/// Default page size used by list endpoints.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Largest page size the server accepts.
pub const MAX_PAGE_SIZE: usize = 200;

/// Pages followed when reading a whole reference collection.
pub const MAX_REFERENCE_PAGES: usize = 50;

// =============================================================================
// Caching Defaults
// =============================================================================

/// How long field metadata and inventory types stay cached, in seconds.
pub const DEFAULT_REFERENCE_TTL_SECS: u64 = 300;

/// Maximum number of cached reference entries.
pub const DEFAULT_REFERENCE_CACHE_SIZE: u64 = 32;

// =============================================================================
// TUI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 250;

/// Application name used for config and log directories.
pub const APP_NAME: &str = "inventory-client";
