//! CLI command implementations.

pub mod config;
pub mod inventory_types;
pub mod projects;
pub mod root;

use anyhow::{Context, Result};
use inventory_client::{InventoryClient, MetricsCollector};
use inventory_config::Config;

/// Build the API client shared by every server-facing command.
pub fn build_client_from_config(config: &Config, metrics: bool) -> Result<InventoryClient> {
    let mut builder = InventoryClient::builder().from_config(config);
    if metrics {
        builder = builder.metrics(MetricsCollector::new());
    }
    builder.build().context("Failed to create API client")
}
