//! Field metadata endpoint.

use reqwest::{Client, Method};

use crate::auth::AuthStrategy;
use crate::endpoints::send_request_with_retry;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::FieldMetadata;

/// Fetch project field metadata with `OPTIONS <api_root>projects/`.
pub async fn get_project_metadata(
    client: &Client,
    api_url: &str,
    auth: &AuthStrategy,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<FieldMetadata> {
    let url = format!("{api_url}projects/");
    let builder = auth.apply(client.request(Method::OPTIONS, &url));
    let response =
        send_request_with_retry(builder, max_retries, "/projects", "OPTIONS", metrics).await?;

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Field metadata is not JSON: {e}")))?;
    FieldMetadata::from_options_response(body)
}
