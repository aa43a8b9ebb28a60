//! Inventory type endpoints.

use inventory_config::constants::{MAX_PAGE_SIZE, MAX_REFERENCE_PAGES};
use reqwest::Client;

use crate::auth::AuthStrategy;
use crate::endpoints::{encode_path_segment, send_request_with_retry};
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::{InventoryType, ListBody};

/// List every inventory type.
///
/// The endpoint may answer with a bare array or a page envelope; both are
/// accepted. Page envelopes are followed through `next` up to
/// `MAX_REFERENCE_PAGES` pages.
pub async fn list_inventory_types(
    client: &Client,
    api_url: &str,
    auth: &AuthStrategy,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<InventoryType>> {
    let url = format!("{api_url}inventory-types");
    let mut builder = auth
        .apply(client.get(&url))
        .query(&[("page_size", MAX_PAGE_SIZE)]);
    let mut types = Vec::new();
    let mut pages = 0;

    loop {
        let response =
            send_request_with_retry(builder, max_retries, "/inventory-types", "GET", metrics)
                .await?;
        let body: ListBody<InventoryType> = response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("Inventory type list: {e}")))?;
        let (items, next) = body.into_parts();
        types.extend(items);
        pages += 1;

        match next {
            None => break,
            Some(next) if pages >= MAX_REFERENCE_PAGES => {
                tracing::warn!(
                    pages,
                    next = %next,
                    loaded = types.len(),
                    "Inventory type list truncated"
                );
                break;
            }
            Some(next) => builder = auth.apply(client.get(&next)),
        }
    }

    Ok(types)
}

/// Fetch one inventory type by public id.
pub async fn get_inventory_type(
    client: &Client,
    api_url: &str,
    auth: &AuthStrategy,
    public_id: &str,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<InventoryType> {
    let url = format!("{api_url}inventory-types/{}/", encode_path_segment(public_id));
    let builder = auth.apply(client.get(&url));
    let response =
        send_request_with_retry(builder, max_retries, "/inventory-types/{id}", "GET", metrics)
            .await?;

    response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Inventory type {public_id}: {e}")))
}
