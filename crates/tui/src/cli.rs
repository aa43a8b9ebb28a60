//! Command-line argument parsing for inventory-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for inventory-tui.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --profile, --base-url)
/// 2. Environment variables (e.g., INVENTORY_PROFILE, INVENTORY_BASE_URL)
/// 3. Profile configuration (from config.json)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "inventory-tui",
    about = "Terminal user interface for the inventory management REST API",
    version,
    after_help = "Examples:\n  inventory-tui\n  inventory-tui --profile production\n  inventory-tui --base-url http://localhost:8000 --no-fetch-root\n  inventory-tui --log-dir /var/log/inventory-tui\n"
)]
pub struct Cli {
    /// Config profile name to load
    #[arg(long, short = 'p', env = "INVENTORY_PROFILE")]
    pub profile: Option<String>,

    /// Path to a custom configuration file
    #[arg(long, env = "INVENTORY_CONFIG_PATH")]
    pub config_path: Option<PathBuf>,

    /// Base URL of the inventory server
    #[arg(long)]
    pub base_url: Option<String>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Skip fetching the API root document on startup
    #[arg(long)]
    pub no_fetch_root: bool,

    /// Enable Prometheus metrics endpoint and bind address (e.g., "localhost:9090")
    #[arg(long, env = "INVENTORY_METRICS_BIND")]
    pub metrics_bind: Option<String>,
}
