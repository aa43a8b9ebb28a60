//! CSV formatter implementation.
//!
//! Responsibilities:
//! - Format resources as RFC 4180 CSV via the `csv` crate.
//!
//! Does NOT handle:
//! - Other output formats.
//! - Pagination footers (CSV carries data rows only).

use std::collections::BTreeMap;

use anyhow::Result;
use inventory_client::{FieldMetadata, InventoryType, Page, Project, RootResource};
use inventory_config::ProfileConfig;
use inventory_view::{Message, ProjectViewModel};

use crate::formatters::common::{DEFAULT_MISSING_VALUE, format_json_value, format_missing};
use crate::formatters::{Formatter, Pagination};

/// CSV formatter.
pub struct CsvFormatter;

/// Header row followed by `rows`; an empty `rows` still yields the header.
fn write_records<I>(header: &[&str], rows: I) -> Result<String>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(&row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}

fn flag(value: bool) -> String {
    value.to_string()
}

impl Formatter for CsvFormatter {
    fn format_root(&self, root: &RootResource) -> Result<String> {
        write_records(
            &["key", "value"],
            root.attributes()
                .iter()
                .map(|(key, value)| vec![key.clone(), format_json_value(value)]),
        )
    }

    fn format_projects(&self, page: &Page<Project>, _pagination: &Pagination) -> Result<String> {
        write_records(
            &[
                "public_id",
                "name",
                "inventory_type",
                "inventory_type_public_id",
                "public",
                "active",
                "image",
                "updated",
            ],
            page.results.iter().map(|p| {
                vec![
                    p.public_id.clone(),
                    p.name.clone(),
                    format_missing(p.inventory_type.as_deref()).to_string(),
                    format_missing(p.inventory_type_public_id.as_deref()).to_string(),
                    flag(p.public),
                    flag(p.active),
                    format_missing(p.image.as_deref()).to_string(),
                    format_missing(p.updated.as_deref()).to_string(),
                ]
            }),
        )
    }

    fn format_project_view(
        &self,
        view: &ProjectViewModel,
        _message: Option<&Message>,
    ) -> Result<String> {
        write_records(
            &["field", "label", "value", "options"],
            view.fields.iter().map(|field| {
                let options = field
                    .options()
                    .iter()
                    .map(|o| {
                        if o.selected {
                            format!("*{}", o.text)
                        } else {
                            o.text.clone()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("|");
                vec![
                    field.field.clone(),
                    field.label.clone(),
                    format_missing(Some(&field.display_value())).to_string(),
                    options,
                ]
            }),
        )
    }

    fn format_inventory_types(&self, types: &[InventoryType]) -> Result<String> {
        write_records(
            &["public_id", "name", "description", "href"],
            types.iter().map(|t| {
                vec![
                    t.public_id.clone(),
                    t.name.clone(),
                    format_missing(t.description.as_deref()).to_string(),
                    format_missing(t.href.as_deref()).to_string(),
                ]
            }),
        )
    }

    fn format_metadata(&self, metadata: &FieldMetadata) -> Result<String> {
        write_records(
            &["field", "label", "type", "required", "read_only", "choices"],
            metadata.iter().map(|(field, d)| {
                let choices = d
                    .choices
                    .iter()
                    .map(|c| format!("{}={}", format_json_value(&c.value), c.display_name))
                    .collect::<Vec<_>>()
                    .join("|");
                vec![
                    field.to_string(),
                    format_missing(d.label.as_deref()).to_string(),
                    format_missing(d.field_type.as_deref()).to_string(),
                    flag(d.required),
                    flag(d.read_only),
                    if choices.is_empty() {
                        DEFAULT_MISSING_VALUE.to_string()
                    } else {
                        choices
                    },
                ]
            }),
        )
    }

    fn format_profiles(&self, profiles: &BTreeMap<String, ProfileConfig>) -> Result<String> {
        write_records(
            &["profile", "base_url", "api_root", "username", "auth"],
            profiles.iter().map(|(name, p)| {
                let auth = if p.api_token.is_some() {
                    "token"
                } else if p.username.is_some() {
                    "basic"
                } else {
                    DEFAULT_MISSING_VALUE
                };
                vec![
                    name.clone(),
                    format_missing(p.base_url.as_deref()).to_string(),
                    format_missing(p.api_root.as_deref()).to_string(),
                    format_missing(p.username.as_deref()).to_string(),
                    auth.to_string(),
                ]
            }),
        )
    }
}
