//! Pure mapping from a project to its view-model.
//!
//! Invariants:
//! - Output depends only on the arguments; nothing is fetched or mutated.
//! - Every select marks at most one option as selected. When several options
//!   match, the last one wins.
//! - A reference that matches no option leaves every option unselected.

use inventory_client::{FieldChoice, FieldMetadata, InventoryType, Project};
use serde_json::Value;

use crate::context::ViewContext;
use crate::entry::container_id;
use crate::model::{
    AUDIT_FIELDS, DISPLAY_ORDER, FieldView, ProjectViewModel, SelectOption, Widget,
};

/// Field whose choices stand in for boolean fields without their own.
const YES_NO_SOURCE: &str = "public";

/// Build the view-model for one project.
///
/// `pending_image` is the filename chosen for upload, shown alongside the
/// current image reference.
pub fn build_project_view(
    project: &Project,
    context: &ViewContext,
    pending_image: Option<&str>,
) -> ProjectViewModel {
    let metadata = context.metadata();
    let fields = DISPLAY_ORDER
        .iter()
        .map(|&field| {
            let (label, help_text) = label_and_help(metadata, field);
            let value = project.field_value(field);
            let widget = match field {
                "inventory_type" => Widget::Select {
                    options: inventory_type_options(
                        context.inventory_types(),
                        project.inventory_type_public_id.as_deref(),
                    ),
                },
                "public" | "active" => Widget::Select {
                    options: choice_options(metadata, field, &value),
                },
                "name" => Widget::TextInput,
                "image" => Widget::File {
                    current: project.image.clone(),
                    pending: pending_image.map(str::to_string),
                },
                _ => Widget::ReadOnly,
            };
            FieldView {
                field: field.to_string(),
                label,
                help_text,
                value,
                widget,
            }
        })
        .collect();

    ProjectViewModel {
        public_id: project.public_id.clone(),
        container: container_id(&project.public_id),
        fields,
    }
}

fn label_and_help(metadata: &FieldMetadata, field: &str) -> (String, String) {
    let descriptor = metadata.get(field);
    let label = descriptor
        .and_then(|d| d.label.clone())
        .unwrap_or_else(|| field.to_string());
    let help_text = if AUDIT_FIELDS.contains(&field) {
        String::new()
    } else {
        descriptor
            .and_then(|d| d.help_text.clone())
            .unwrap_or_default()
    };
    (label, help_text)
}

/// Options for the inventory type select: value is the public id, text the name.
pub fn inventory_type_options(
    types: &[InventoryType],
    selected_public_id: Option<&str>,
) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = types
        .iter()
        .map(|t| SelectOption {
            value: Value::String(t.public_id.clone()),
            text: t.name.clone(),
            selected: false,
        })
        .collect();

    if let Some(wanted) = selected_public_id {
        let mut last_match = None;
        for (index, t) in types.iter().enumerate() {
            if t.public_id == wanted {
                last_match = Some(index);
            }
        }
        if let Some(index) = last_match {
            options[index].selected = true;
        }
    }
    options
}

/// Options for a boolean-like field from its metadata choices, falling back
/// to the `public` field's choices when it declares none.
pub fn choice_options(
    metadata: &FieldMetadata,
    field: &str,
    current: &Value,
) -> Vec<SelectOption> {
    let choices: &[FieldChoice] = match metadata.choices(field) {
        [] => metadata.choices(YES_NO_SOURCE),
        own => own,
    };

    let mut options: Vec<SelectOption> = choices
        .iter()
        .map(|c| SelectOption {
            value: c.value.clone(),
            text: c.display_name.clone(),
            selected: false,
        })
        .collect();

    let mut last_match = None;
    for (index, choice) in choices.iter().enumerate() {
        if values_match(&choice.value, current) {
            last_match = Some(index);
        }
    }
    if let Some(index) = last_match {
        options[index].selected = true;
    }
    options
}

/// Boolean meaning of a choice value. Servers send JSON booleans or their
/// string spelling in any case (`"True"`, `"false"`).
pub fn choice_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

fn values_match(choice: &Value, current: &Value) -> bool {
    match (choice_flag(choice), choice_flag(current)) {
        (Some(a), Some(b)) => a == b,
        _ => choice == current,
    }
}
