//! Metrics collection for API call performance.
//!
//! Records request latency histograms, request/retry/error counters and
//! reference-cache hits through the `metrics` facade.
//!
//! # What this module does NOT handle:
//! - Metrics exposition (see [`crate::metrics_exporter`])
//!
//! # Invariants
//! - All metrics use consistent label names: `endpoint`, `method`, `status`, `error_category`
//! - Recording is a no-op when no recorder is installed or the collector is disabled

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "inventory_api_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "inventory_api_requests_total";

/// Metric name for retry counter.
pub const METRIC_RETRIES_TOTAL: &str = "inventory_api_retries_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "inventory_api_errors_total";

/// Metric name for cache hit counter.
pub const METRIC_CACHE_HITS: &str = "inventory_api_cache_hits_total";

/// Metric name for cache miss counter.
pub const METRIC_CACHE_MISSES: &str = "inventory_api_cache_misses_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Http4xx,
    Http5xx,
    Timeout,
    Tls,
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Tls => "tls",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Timeout(_) => ErrorCategory::Timeout,
            ClientError::ConnectionRefused(_) | ClientError::HttpError(_) => {
                ErrorCategory::Transport
            }
            ClientError::TlsError(_) => ErrorCategory::Tls,
            ClientError::NotFound(_)
            | ClientError::Unauthorized(_)
            | ClientError::RateLimited(_) => ErrorCategory::Http4xx,
            ClientError::ApiError { status, .. } if (400..500).contains(status) => {
                ErrorCategory::Http4xx
            }
            ClientError::ApiError { status, .. } if (500..600).contains(status) => {
                ErrorCategory::Http5xx
            }
            ClientError::MaxRetriesExceeded(_) => ErrorCategory::Http5xx,
            _ => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for inventory API calls.
///
/// A thin wrapper over the `metrics` macros that keeps label names consistent.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of an API request. `status` is None when no
    /// response was received.
    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt, including retries.
    pub fn record_request(&self, endpoint: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record a retry attempt (1-based).
    pub fn record_retry(&self, endpoint: &str, method: &str, attempt: usize) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_RETRIES_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "attempt" => attempt.to_string(),
        )
        .increment(1);
    }

    pub fn record_error(&self, endpoint: &str, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    /// Categorize and record a client error.
    pub fn record_client_error(&self, endpoint: &str, method: &str, error: &ClientError) {
        self.record_error(endpoint, method, ErrorCategory::from(error));
    }

    pub fn record_cache_hit(&self, cache: &'static str) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_CACHE_HITS, "cache" => cache).increment(1);
    }

    pub fn record_cache_miss(&self, cache: &'static str) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_CACHE_MISSES, "cache" => cache).increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_as_str() {
        assert_eq!(ErrorCategory::Transport.as_str(), "transport");
        assert_eq!(ErrorCategory::Http4xx.as_str(), "http_4xx");
        assert_eq!(ErrorCategory::Http5xx.as_str(), "http_5xx");
        assert_eq!(ErrorCategory::Timeout.as_str(), "timeout");
        assert_eq!(ErrorCategory::Tls.as_str(), "tls");
        assert_eq!(ErrorCategory::Unknown.as_str(), "unknown");
    }

    #[test]
    fn test_error_categorization() {
        let timeout = ClientError::Timeout("/api/".to_string());
        assert_eq!(ErrorCategory::from(&timeout), ErrorCategory::Timeout);

        let conn = ClientError::ConnectionRefused("localhost:8000".to_string());
        assert_eq!(ErrorCategory::from(&conn), ErrorCategory::Transport);

        let conflict = ClientError::ApiError {
            status: 409,
            url: "u".to_string(),
            message: "Conflict".to_string(),
            detail: Some("Conflict".to_string()),
        };
        assert_eq!(ErrorCategory::from(&conflict), ErrorCategory::Http4xx);

        let server = ClientError::ApiError {
            status: 500,
            url: "u".to_string(),
            message: "boom".to_string(),
            detail: None,
        };
        assert_eq!(ErrorCategory::from(&server), ErrorCategory::Http5xx);

        let io = ClientError::Io(std::io::Error::other("disk"));
        assert_eq!(ErrorCategory::from(&io), ErrorCategory::Unknown);
    }

    #[test]
    fn test_metrics_collector_enabled() {
        assert!(MetricsCollector::new().is_enabled());
        assert!(!MetricsCollector::disabled().is_enabled());
    }
}
