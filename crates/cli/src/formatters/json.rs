//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format all resource types as pretty-printed JSON.
//!
//! Does NOT handle:
//! - Other output formats.

use std::collections::BTreeMap;

use anyhow::Result;
use inventory_client::{FieldMetadata, InventoryType, Page, Project, RootResource};
use inventory_config::ProfileConfig;
use inventory_view::{Message, ProjectViewModel};
use serde::Serialize;

use crate::formatters::{Formatter, Pagination, ProfileDisplay};

/// JSON formatter.
pub struct JsonFormatter;

#[derive(Serialize)]
struct ProjectViewOutput<'a> {
    #[serde(flatten)]
    view: &'a ProjectViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a Message>,
}

impl Formatter for JsonFormatter {
    fn format_root(&self, root: &RootResource) -> Result<String> {
        Ok(serde_json::to_string_pretty(root.attributes())?)
    }

    fn format_projects(&self, page: &Page<Project>, _pagination: &Pagination) -> Result<String> {
        // The envelope already carries count/next/previous.
        Ok(serde_json::to_string_pretty(page)?)
    }

    fn format_project_view(
        &self,
        view: &ProjectViewModel,
        message: Option<&Message>,
    ) -> Result<String> {
        Ok(serde_json::to_string_pretty(&ProjectViewOutput { view, message })?)
    }

    fn format_inventory_types(&self, types: &[InventoryType]) -> Result<String> {
        Ok(serde_json::to_string_pretty(types)?)
    }

    fn format_inventory_type(&self, inventory_type: &InventoryType) -> Result<String> {
        Ok(serde_json::to_string_pretty(inventory_type)?)
    }

    fn format_metadata(&self, metadata: &FieldMetadata) -> Result<String> {
        let ordered: BTreeMap<_, _> = metadata.iter().collect();
        Ok(serde_json::to_string_pretty(&ordered)?)
    }

    fn format_profiles(&self, profiles: &BTreeMap<String, ProfileConfig>) -> Result<String> {
        #[derive(Serialize)]
        struct Output {
            profiles: BTreeMap<String, ProfileDisplay>,
        }

        let output = Output {
            profiles: profiles
                .iter()
                .map(|(name, profile)| (name.clone(), ProfileDisplay::from(profile)))
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}
