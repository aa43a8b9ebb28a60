//! Error types for the inventory client.
//!
//! Responsibilities:
//! - Define the transport/API error taxonomy (`ClientError`).
//! - Extract a user-facing detail string from REST error bodies.
//! - Classify errors for retry decisions.
//!
//! Invariants:
//! - `user_detail()` never returns an empty string.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during inventory client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication could not be configured.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from the API.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
        /// Server-provided detail (`{"detail": ...}` or joined field errors).
        detail: Option<String>,
    },

    /// The response body did not have the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Request timed out.
    #[error("Request to {0} timed out")]
    Timeout(String),

    /// Rate limited and no retries were allowed.
    #[error("Rate limited: retry after {0:?}")]
    RateLimited(Option<Duration>),

    /// Connection refused.
    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    /// TLS/SSL error.
    #[error("TLS error: {0}")]
    TlsError(String),

    /// Retries were exhausted on a retryable status.
    #[error("Maximum retries exceeded ({0} attempts)")]
    MaxRetriesExceeded(usize),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// 404 from the API.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// 401/403 from the API.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Local file error (image upload).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_) | Self::Timeout(_) | Self::RateLimited(_)
        )
    }

    /// Retryable status codes: 429, 502, 503, 504.
    ///
    /// 500 and 501 usually indicate a bug rather than a transient failure and
    /// are returned immediately, as are all other 4xx codes.
    pub fn is_retryable_status(status: u16) -> bool {
        matches!(status, 429 | 502 | 503 | 504)
    }

    /// Check if this error indicates an authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_) | Self::Unauthorized(_))
    }

    /// Text suitable for showing to the user verbatim.
    ///
    /// Prefers the server-provided detail; falls back to the error's display text.
    pub fn user_detail(&self) -> String {
        match self {
            Self::ApiError {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::NotFound(detail) | Self::Unauthorized(detail) if !detail.is_empty() => {
                detail.clone()
            }
            other => other.to_string(),
        }
    }

    /// Build the error for a non-success response body.
    pub(crate) fn from_response(status: u16, url: String, body: &str) -> Self {
        let detail = extract_detail(body);
        match status {
            401 | 403 => Self::Unauthorized(detail.unwrap_or_else(|| format!("HTTP {status}"))),
            404 => Self::NotFound(detail.unwrap_or(url)),
            _ => Self::ApiError {
                status,
                url,
                message: detail.clone().unwrap_or_else(|| truncate(body, 200)),
                detail,
            },
        }
    }

    /// Map a transport error to the most specific variant.
    pub(crate) fn from_transport(error: reqwest::Error, endpoint: &str) -> Self {
        if error.is_timeout() {
            return Self::Timeout(endpoint.to_string());
        }
        if error.is_connect() {
            let text = error.to_string().to_lowercase();
            if text.contains("certificate") || text.contains("tls") {
                return Self::TlsError(error.to_string());
            }
            let target = error
                .url()
                .map(|u| u.to_string())
                .unwrap_or_else(|| endpoint.to_string());
            return Self::ConnectionRefused(target);
        }
        Self::HttpError(error)
    }
}

/// Extract the human-readable detail from a REST error body.
///
/// Accepts `{"detail": "..."}` and field-error maps such as
/// `{"name": ["This field is required."]}`. `non_field_errors` are reported
/// without a field prefix.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;

    if let Some(detail) = object.get("detail") {
        return match detail {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        };
    }

    let parts: Vec<String> = object
        .iter()
        .filter_map(|(field, errors)| {
            let text = match errors {
                serde_json::Value::Array(items) => items
                    .iter()
                    .map(|i| i.as_str().map(str::to_string).unwrap_or_else(|| i.to_string()))
                    .collect::<Vec<_>>()
                    .join(" "),
                serde_json::Value::String(s) => s.clone(),
                _ => return None,
            };
            if field == "non_field_errors" {
                Some(text)
            } else {
                Some(format!("{field}: {text}"))
            }
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}

fn truncate(body: &str, max: usize) -> String {
    if body.chars().count() <= max {
        body.to_string()
    } else {
        let cut: String = body.chars().take(max).collect();
        format!("{cut}...")
    }
}
