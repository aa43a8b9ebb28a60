//! CLI argument definitions.
//!
//! Responsibilities:
//! - Define the top-level `Cli` struct and the `Commands` enum with clap derive.
//! - Declare global connection flags with `INVENTORY_*` environment fallbacks.
//!
//! Does NOT handle:
//! - Merging flags with profiles (see `main` and `inventory_config::ConfigLoader`).
//! - Command execution (see `dispatch`).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::config::ConfigCommand;
use crate::commands::inventory_types::InventoryTypesCommand;
use crate::commands::projects::ProjectsCommand;

#[derive(Parser)]
#[command(
    name = "inventory-cli",
    about = "Command-line client for the inventory management REST API",
    version,
    after_help = "Examples:\n  inventory-cli root\n  inventory-cli projects list --page-size 50\n  inventory-cli projects show RVB9AXBYA9JQYNZJ -o json\n  inventory-cli projects update RVB9AXBYA9JQYNZJ --name \"Main Warehouse\" --active true\n  inventory-cli config set dev --base-url http://localhost:8000 --api-token <token>\n"
)]
pub struct Cli {
    /// Base URL of the inventory server
    #[arg(short, long, global = true, env = "INVENTORY_BASE_URL")]
    pub base_url: Option<String>,

    /// API root path relative to the base URL (default /api/)
    #[arg(long, global = true, env = "INVENTORY_API_ROOT")]
    pub api_root: Option<String>,

    /// Username for basic authentication
    #[arg(short, long, global = true, env = "INVENTORY_USERNAME")]
    pub username: Option<String>,

    /// Password for basic authentication
    #[arg(long, global = true, env = "INVENTORY_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// API token for token authentication (takes precedence over username/password)
    #[arg(long, global = true, env = "INVENTORY_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Maximum number of retries for failed reads
    #[arg(long, global = true)]
    pub max_retries: Option<usize>,

    /// Skip TLS certificate verification
    #[arg(long, global = true)]
    pub skip_verify: bool,

    /// Profile to load from the config file
    #[arg(long, global = true, env = "INVENTORY_PROFILE")]
    pub profile: Option<String>,

    /// Path to the profiles file
    #[arg(long, global = true, env = "INVENTORY_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Output format (table, json, csv)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Write output to a file instead of stdout
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Serve Prometheus metrics on this address (e.g. 127.0.0.1:9090)
    #[arg(long, global = true, value_name = "ADDR")]
    pub metrics_bind: Option<String>,

    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch and show the flattened API root document
    Root,

    /// List, show and edit projects
    Projects {
        #[command(subcommand)]
        command: ProjectsCommand,
    },

    /// List and show inventory types
    InventoryTypes {
        #[command(subcommand)]
        command: InventoryTypesCommand,
    },

    /// Manage connection profiles
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}
