//! inventory-cli - command-line client for the inventory management REST API.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Merge profile, environment and flag configuration.
//! - Run one command against the API and exit with a structured code.
//!
//! Does NOT handle:
//! - REST details (see `crates/client`).
//! - Building project views (see `crates/view`).
//!
//! Invariants:
//! - `load_dotenv()` runs BEFORE CLI parsing so `.env` can supply clap env defaults.
//! - Precedence is flags, then environment, then profile, then defaults.

mod args;
mod cancellation;
mod commands;
mod config_context;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use config_context::ConfigCommandContext;
use dispatch::{needs_real_config, run_command};
use error::{ExitCode, ExitCodeExt};
use inventory_config::{Config, ConfigError, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Merge profile, environment and flags into a validated config.
fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut loader = ConfigLoader::new();

    // Blank values fall back to the default location.
    if let Some(path) = &cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }
    if let Some(profile_name) = &cli.profile {
        loader = loader.with_profile_name(profile_name.clone());
    }

    loader = loader.from_profile()?.from_env()?;

    if let Some(url) = &cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(root) = &cli.api_root {
        loader = loader.with_api_root(root.clone());
    }
    if let Some(username) = &cli.username {
        loader = loader.with_username(username.clone());
    }
    if let Some(password) = &cli.password {
        loader = loader.with_password(password.clone());
    }
    if let Some(token) = &cli.api_token {
        loader = loader.with_api_token(token.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if let Some(retries) = cli.max_retries {
        loader = loader.with_max_retries(retries);
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    loader.build()
}

#[tokio::main]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let metrics_exporter = match &cli.metrics_bind {
        Some(bind_addr) => match inventory_client::MetricsExporter::install(bind_addr) {
            Ok(exporter) => {
                tracing::info!(addr = %exporter.bind_addr(), "Metrics exporter started");
                Some(exporter)
            }
            Err(e) => {
                eprintln!("Failed to start metrics exporter: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        },
        None => None,
    };

    let config_context = if needs_real_config(&cli.command) {
        match load_config(&cli) {
            Ok(config) => ConfigCommandContext::Real {
                config: Box::new(config),
                metrics: metrics_exporter.is_some(),
            },
            Err(e) => {
                eprintln!("Failed to build configuration: {:#}", e);
                let code = match e {
                    ConfigError::MissingAuth => ExitCode::AuthenticationFailed,
                    _ => ExitCode::GeneralError,
                };
                std::process::exit(code.as_i32());
            }
        }
    } else {
        ConfigCommandContext::Placeholder
    };

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli, config_context, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
