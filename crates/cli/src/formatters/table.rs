//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format resources as tab-separated tables.
//! - Append a pagination footer to project listings.
//!
//! Does NOT handle:
//! - Other output formats.
//! - File I/O.

use std::collections::BTreeMap;
use std::fmt::Write;

use anyhow::Result;
use inventory_client::{FieldMetadata, InventoryType, Page, Project, RootResource};
use inventory_config::ProfileConfig;
use inventory_view::{Message, ProjectViewModel, Widget};

use crate::formatters::Formatter;
use crate::formatters::common::{DEFAULT_MISSING_VALUE, format_json_value, format_missing};

/// Pagination metadata for table output.
///
/// - `page` is 1-based
/// - `total` is the server's `count`; when absent the footer omits it
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total: Option<u64>,
}

/// Build the footer for a page showing `shown` rows.
pub fn build_pagination_footer(p: &Pagination, shown: usize) -> Option<String> {
    if p.page_size == 0 || shown == 0 {
        return None;
    }

    let offset = p.page.saturating_sub(1).saturating_mul(p.page_size);
    let start = offset.saturating_add(1);
    let end = offset.saturating_add(shown);

    match p.total {
        Some(total) => {
            let pages = (total as usize).div_ceil(p.page_size);
            Some(format!(
                "Showing {}-{} of {} (page {} of {})",
                start, end, total, p.page, pages
            ))
        }
        None => Some(format!("Showing {}-{} (page {})", start, end, p.page)),
    }
}

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_root(&self, root: &RootResource) -> Result<String> {
        if root.is_empty() {
            return Ok("API root is empty.".to_string());
        }

        let mut output = String::from("Key\tValue\n");
        for (key, value) in root.attributes() {
            writeln!(output, "{}\t{}", key, format_json_value(value))?;
        }
        Ok(output)
    }

    fn format_projects(&self, page: &Page<Project>, pagination: &Pagination) -> Result<String> {
        if page.results.is_empty() {
            if pagination.page > 1 {
                return Ok(format!("No projects found on page {}.", pagination.page));
            }
            return Ok("No projects found.".to_string());
        }

        let mut output = String::from("Public ID\tName\tInventory Type\tPublic\tActive\tUpdated\n");
        for project in &page.results {
            writeln!(
                output,
                "{}\t{}\t{}\t{}\t{}\t{}",
                project.public_id,
                format_missing(Some(&project.name)),
                format_missing(project.inventory_type_public_id.as_deref()),
                yes_no(project.public),
                yes_no(project.active),
                format_missing(project.updated.as_deref()),
            )?;
        }

        if let Some(footer) = build_pagination_footer(pagination, page.results.len()) {
            output.push('\n');
            output.push_str(&footer);
            output.push('\n');
        }
        Ok(output)
    }

    fn format_project_view(
        &self,
        view: &ProjectViewModel,
        message: Option<&Message>,
    ) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "Project {}", view.container)?;
        output.push_str("Field\tValue\n");

        for field in &view.fields {
            let value = field.display_value();
            writeln!(output, "{}\t{}", field.label, format_missing(Some(&value)))?;

            if let Widget::Select { options } = &field.widget {
                for option in options {
                    let marker = if option.selected { "[x]" } else { "[ ]" };
                    writeln!(output, "\t  {} {}", marker, option.text)?;
                }
            }
        }

        if let Some(message) = message {
            writeln!(output, "\n{}: {}", message.level.label(), message.text)?;
        }
        Ok(output)
    }

    fn format_inventory_types(&self, types: &[InventoryType]) -> Result<String> {
        if types.is_empty() {
            return Ok("No inventory types found.".to_string());
        }

        let mut output = String::from("Public ID\tName\tDescription\n");
        for inventory_type in types {
            writeln!(
                output,
                "{}\t{}\t{}",
                inventory_type.public_id,
                format_missing(Some(&inventory_type.name)),
                format_missing(inventory_type.description.as_deref()),
            )?;
        }
        Ok(output)
    }

    fn format_metadata(&self, metadata: &FieldMetadata) -> Result<String> {
        if metadata.is_empty() {
            return Ok("No field metadata found.".to_string());
        }

        let mut output = String::from("Field\tLabel\tType\tRequired\tRead Only\tChoices\n");
        for (field, descriptor) in metadata.iter() {
            let choices = if descriptor.choices.is_empty() {
                DEFAULT_MISSING_VALUE.to_string()
            } else {
                descriptor
                    .choices
                    .iter()
                    .map(|c| format!("{}={}", format_json_value(&c.value), c.display_name))
                    .collect::<Vec<_>>()
                    .join("; ")
            };
            writeln!(
                output,
                "{}\t{}\t{}\t{}\t{}\t{}",
                field,
                format_missing(descriptor.label.as_deref()),
                format_missing(descriptor.field_type.as_deref()),
                yes_no(descriptor.required),
                yes_no(descriptor.read_only),
                choices,
            )?;
        }
        Ok(output)
    }

    fn format_profiles(&self, profiles: &BTreeMap<String, ProfileConfig>) -> Result<String> {
        if profiles.is_empty() {
            return Ok(
                "No profiles configured. Use 'inventory-cli config set <profile-name>' to add one."
                    .to_string(),
            );
        }

        let mut output = String::from("Profile\tBase URL\tAuth\tUsername\n");
        for (name, profile) in profiles {
            let auth = if profile.api_token.is_some() {
                "token"
            } else if profile.username.is_some() {
                "basic"
            } else {
                DEFAULT_MISSING_VALUE
            };
            writeln!(
                output,
                "{}\t{}\t{}\t{}",
                name,
                format_missing(profile.base_url.as_deref()),
                auth,
                format_missing(profile.username.as_deref()),
            )?;
        }
        Ok(output)
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
