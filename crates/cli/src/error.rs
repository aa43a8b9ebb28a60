//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError` and `ViewError` to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs for SIGINT handling).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use inventory_client::ClientError;
use inventory_view::ViewError;

/// Structured exit codes for inventory-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Credentials rejected (401/403) or missing.
    AuthenticationFailed = 2,

    /// Network, timeout, TLS or DNS failure. Scripts may retry.
    ConnectionError = 3,

    /// Project or inventory type does not exist.
    NotFound = 4,

    /// The server rejected the request body (400) or sent an unexpected shape.
    ValidationError = 5,

    /// HTTP 429.
    RateLimited = 7,

    /// HTTP 502/503/504, or retries exhausted on one of them.
    ServiceUnavailable = 8,

    /// SIGINT/Ctrl+C (128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }

    /// Returns true if this exit code indicates a retryable condition.
    #[allow(dead_code)]
    pub const fn is_retryable(self) -> bool {
        matches!(
            self,
            ExitCode::ConnectionError | ExitCode::RateLimited | ExitCode::ServiceUnavailable
        )
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::AuthFailed(_) | ClientError::Unauthorized(_) => {
                ExitCode::AuthenticationFailed
            }
            ClientError::ApiError { status: 401 | 403, .. } => ExitCode::AuthenticationFailed,

            ClientError::ConnectionRefused(_)
            | ClientError::Timeout(_)
            | ClientError::InvalidUrl(_)
            | ClientError::TlsError(_) => ExitCode::ConnectionError,

            ClientError::NotFound(_) | ClientError::ApiError { status: 404, .. } => {
                ExitCode::NotFound
            }

            ClientError::InvalidResponse(_) | ClientError::ApiError { status: 400, .. } => {
                ExitCode::ValidationError
            }

            ClientError::RateLimited(_) | ClientError::ApiError { status: 429, .. } => {
                ExitCode::RateLimited
            }

            ClientError::MaxRetriesExceeded(_)
            | ClientError::ApiError { status: 502, .. }
            | ClientError::ApiError { status: 503, .. }
            | ClientError::ApiError { status: 504, .. } => ExitCode::ServiceUnavailable,

            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            ClientError::ApiError { .. } | ClientError::Io(_) => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns `ExitCode::GeneralError` if no client error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if let Some(view_err) = cause.downcast_ref::<ViewError>() {
                return ExitCode::from(view_err.client_error());
            }
        }
        ExitCode::GeneralError
    }
}
