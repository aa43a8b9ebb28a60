//! API root document endpoint.

use reqwest::Client;

use crate::auth::AuthStrategy;
use crate::endpoints::send_request_with_retry;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::RootResource;

/// Fetch and flatten the API root document.
///
/// The root fetch is never retried; a failure is reported once to the caller.
pub async fn get_root(
    client: &Client,
    api_url: &str,
    auth: &AuthStrategy,
    metrics: Option<&MetricsCollector>,
) -> Result<RootResource> {
    let builder = auth.apply(client.get(api_url));
    let response = send_request_with_retry(builder, 0, "/", "GET", metrics).await?;

    let raw: serde_json::Value = response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("API root is not JSON: {e}")))?;

    Ok(RootResource::from_response(raw))
}
