//! Root command: fetch and print the flattened API root document.

use std::path::PathBuf;

use anyhow::Result;
use inventory_config::Config;
use inventory_view::{MessageBoard, RootLoader};
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::commands::build_client_from_config;
use crate::formatters::{OutputFormat, get_formatter, output_result};

pub async fn run(
    config: Config,
    metrics: bool,
    output_format: &str,
    output_file: Option<PathBuf>,
    cancel: &CancellationToken,
) -> Result<()> {
    info!(url = %config.api_root_url(), "Fetching API root");

    let format = output_format.parse::<OutputFormat>()?;
    let client = build_client_from_config(&config, metrics)?;

    let mut loader = RootLoader::new();
    let mut board = MessageBoard::new();
    let root = cancel.run(loader.fetch(&client, &mut board)).await?;

    let output = get_formatter(format).format_root(root)?;
    output_result(&output, format, output_file.as_ref())
}
