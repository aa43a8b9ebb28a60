//! Retry helper for HTTP requests with exponential backoff.
//!
//! Responsibilities:
//! - Send a request, retrying on 429/502/503/504 with a 2^attempt second backoff.
//! - Map non-success responses and transport failures to [`ClientError`].
//! - Record request, retry and error metrics when a collector is supplied.
//!
//! Invariants:
//! - `max_retries == 0` means exactly one attempt. Saves and the root fetch
//!   use this so a failed write is never replayed.
//! - A request whose body cannot be cloned is attempted once.

use std::time::{Duration, Instant};

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Sends an HTTP request with automatic retry for transient statuses.
///
/// # Errors
///
/// - [`ClientError::RateLimited`] when a 429 arrives and no retries are allowed.
/// - [`ClientError::MaxRetriesExceeded`] when every attempt hit a retryable status.
/// - The mapped API error for any other non-success status.
/// - The mapped transport error when no response was received.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    let mut pending = Some(builder);

    for attempt in 0..=max_retries {
        let Some(current) = pending.take() else {
            debug!(endpoint, "Cannot clone request builder for retry");
            return Err(ClientError::MaxRetriesExceeded(attempt));
        };
        pending = current.try_clone();

        if let Some(m) = metrics {
            m.record_request(endpoint, method);
            if attempt > 0 {
                m.record_retry(endpoint, method, attempt);
            }
        }

        let started = Instant::now();
        let response = match current.send().await {
            Ok(response) => response,
            Err(e) => {
                let error = ClientError::from_transport(e, endpoint);
                if let Some(m) = metrics {
                    m.record_request_duration(endpoint, method, started.elapsed(), None);
                    m.record_client_error(endpoint, method, &error);
                }
                return Err(error);
            }
        };

        let status = response.status().as_u16();
        if let Some(m) = metrics {
            m.record_request_duration(endpoint, method, started.elapsed(), Some(status));
        }

        if response.status().is_success() {
            if attempt > 0 {
                debug!(endpoint, attempt = attempt + 1, "Request succeeded after retry");
            }
            return Ok(response);
        }

        if ClientError::is_retryable_status(status) {
            if max_retries == 0 && status == 429 {
                let error = ClientError::RateLimited(retry_after(&response));
                if let Some(m) = metrics {
                    m.record_client_error(endpoint, method, &error);
                }
                return Err(error);
            }
            if attempt < max_retries {
                let backoff_secs = 2u64.pow(attempt as u32);
                debug!(
                    endpoint,
                    status,
                    attempt = attempt + 1,
                    max_attempts = max_retries + 1,
                    backoff_secs,
                    "Transient failure, retrying with exponential backoff"
                );
                tokio::time::sleep(Duration::from_secs(backoff_secs)).await;
                continue;
            }
            if max_retries > 0 {
                debug!(endpoint, attempts = attempt + 1, "Max retries exhausted");
                let error = ClientError::MaxRetriesExceeded(max_retries + 1);
                if let Some(m) = metrics {
                    m.record_client_error(endpoint, method, &error);
                }
                return Err(error);
            }
        }

        let url = response.url().to_string();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());
        let error = ClientError::from_response(status, url, &body);
        if let Some(m) = metrics {
            m.record_client_error(endpoint, method, &error);
        }
        return Err(error);
    }

    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}

fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}
