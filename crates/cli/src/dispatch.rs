//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the command handlers.
//! - Hand each server-facing command its config and the cancellation token.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()` and `config_context`).
//!
//! Invariants:
//! - `config` commands never touch the connection config.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands;
use crate::config_context::ConfigCommandContext;

/// Whether the command talks to the server and so needs a built config.
pub(crate) fn needs_real_config(command: &Commands) -> bool {
    !matches!(command, Commands::Config { .. })
}

pub(crate) async fn run_command(
    cli: Cli,
    config: ConfigCommandContext,
    cancel_token: &CancellationToken,
) -> Result<()> {
    match cli.command {
        Commands::Config { command } => {
            commands::config::run(command, &cli.output, cli.output_file, cli.config_path)?;
        }
        Commands::Root => {
            let (config, metrics) = config.into_real_config()?;
            commands::root::run(config, metrics, &cli.output, cli.output_file, cancel_token)
                .await?;
        }
        Commands::Projects { command } => {
            let (config, metrics) = config.into_real_config()?;
            commands::projects::run(
                config,
                metrics,
                command,
                &cli.output,
                cli.output_file,
                cli.quiet,
                cancel_token,
            )
            .await?;
        }
        Commands::InventoryTypes { command } => {
            let (config, metrics) = config.into_real_config()?;
            commands::inventory_types::run(
                config,
                metrics,
                command,
                &cli.output,
                cli.output_file,
                cancel_token,
            )
            .await?;
        }
    }

    Ok(())
}
