//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide JSON, table and CSV output for every resource the CLI shows.
//! - Adapt any formatter into a [`ProjectRenderer`] so project views go
//!   through the same view-model the TUI renders.
//!
//! Does NOT handle:
//! - Fetching data (see `commands`).
//! - Terminal UI rendering (see `crates/tui`).
//!
//! Invariants:
//! - Machine formats stay parseable when empty: JSON `[]`, CSV headers only.
//! - Table output prints a human message when there is nothing to show.
//! - Missing values are `N/A` in table and CSV output, `null` in JSON.

use std::collections::BTreeMap;
use std::str::FromStr;

use anyhow::Result;
use inventory_client::{FieldMetadata, InventoryType, Page, Project, RootResource};
use inventory_config::ProfileConfig;
use inventory_view::{Message, ProjectRenderer, ProjectViewModel};

mod common;
mod csv;
mod json;
mod table;

pub use common::output_result;
pub use self::csv::CsvFormatter;
pub use json::JsonFormatter;
pub use table::{Pagination, TableFormatter};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, table, csv", s),
        }
    }
}

/// Formatter trait for the resources the CLI prints.
pub trait Formatter {
    /// Format the flattened API root document.
    fn format_root(&self, root: &RootResource) -> Result<String>;

    /// Format one page of projects.
    fn format_projects(&self, page: &Page<Project>, pagination: &Pagination) -> Result<String>;

    /// Format a project view-model, with the status message if there is one.
    fn format_project_view(
        &self,
        view: &ProjectViewModel,
        message: Option<&Message>,
    ) -> Result<String>;

    /// Format the inventory type collection.
    fn format_inventory_types(&self, types: &[InventoryType]) -> Result<String>;

    /// Format a single inventory type.
    fn format_inventory_type(&self, inventory_type: &InventoryType) -> Result<String> {
        self.format_inventory_types(std::slice::from_ref(inventory_type))
    }

    /// Format project field metadata.
    fn format_metadata(&self, metadata: &FieldMetadata) -> Result<String>;

    /// Format saved connection profiles. Secrets are never printed.
    fn format_profiles(&self, profiles: &BTreeMap<String, ProfileConfig>) -> Result<String>;
}

/// Get a formatter for the given output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

/// Renders project views through a [`Formatter`].
pub struct FormatterRenderer<'a>(pub &'a dyn Formatter);

impl ProjectRenderer for FormatterRenderer<'_> {
    type Output = Result<String>;

    fn render(&self, view: &ProjectViewModel, message: Option<&Message>) -> Result<String> {
        self.0.format_project_view(view, message)
    }
}

/// Profile fields safe to print.
#[derive(Debug, serde::Serialize)]
pub(crate) struct ProfileDisplay {
    pub base_url: Option<String>,
    pub api_root: Option<String>,
    pub username: Option<String>,
    pub skip_verify: Option<bool>,
    pub timeout_seconds: Option<u64>,
    pub max_retries: Option<usize>,
    pub fetch_root: Option<bool>,
    pub password: Option<String>,
    pub api_token: Option<String>,
}

impl From<&ProfileConfig> for ProfileDisplay {
    fn from(profile: &ProfileConfig) -> Self {
        let mask = |set: bool| set.then(|| "****".to_string());
        Self {
            base_url: profile.base_url.clone(),
            api_root: profile.api_root.clone(),
            username: profile.username.clone(),
            skip_verify: profile.skip_verify,
            timeout_seconds: profile.timeout_seconds,
            max_retries: profile.max_retries,
            fetch_root: profile.fetch_root,
            password: mask(profile.password.is_some()),
            api_token: mask(profile.api_token.is_some()),
        }
    }
}
