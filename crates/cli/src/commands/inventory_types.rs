//! Inventory type commands.

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use inventory_config::Config;
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::commands::build_client_from_config;
use crate::formatters::{OutputFormat, get_formatter, output_result};

#[derive(Debug, Subcommand)]
pub enum InventoryTypesCommand {
    /// List all inventory types
    List,
    /// Show one inventory type
    Show {
        /// Public id of the inventory type
        public_id: String,
    },
}

pub async fn run(
    config: Config,
    metrics: bool,
    command: InventoryTypesCommand,
    output_format: &str,
    output_file: Option<PathBuf>,
    cancel: &CancellationToken,
) -> Result<()> {
    let format = output_format.parse::<OutputFormat>()?;
    let formatter = get_formatter(format);
    let client = build_client_from_config(&config, metrics)?;

    let output = match command {
        InventoryTypesCommand::List => {
            info!("Listing inventory types");
            let types = cancel.run(client.list_inventory_types()).await?;
            formatter.format_inventory_types(&types)?
        }
        InventoryTypesCommand::Show { public_id } => {
            info!(public_id = %public_id, "Fetching inventory type");
            let inventory_type = cancel.run(client.get_inventory_type(&public_id)).await?;
            formatter.format_inventory_type(&inventory_type)?
        }
    };

    output_result(&output, format, output_file.as_ref())
}
