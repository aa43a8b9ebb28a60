//! The declarative project view-model.
//!
//! A [`ProjectViewModel`] is plain data: renderers read it and never reach back
//! into the record, metadata or reference collection.

use serde::Serialize;
use serde_json::Value;

/// Fields shown for a project, in display order.
pub const DISPLAY_ORDER: [&str; 11] = [
    "public_id",
    "inventory_type",
    "name",
    "image",
    "memberships",
    "public",
    "active",
    "creator",
    "created",
    "updater",
    "updated",
];

/// Audit fields never carry help text.
pub const AUDIT_FIELDS: [&str; 4] = ["creator", "created", "updater", "updated"];

/// One entry in a select widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: Value,
    pub text: String,
    pub selected: bool,
}

/// How a field is presented.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Widget {
    ReadOnly,
    TextInput,
    /// Current image reference and the filename chosen for upload, if any.
    File {
        current: Option<String>,
        pending: Option<String>,
    },
    Select { options: Vec<SelectOption> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
    pub field: String,
    pub label: String,
    pub help_text: String,
    pub value: Value,
    pub widget: Widget,
}

impl FieldView {
    /// The selected option of a select widget.
    pub fn selected(&self) -> Option<&SelectOption> {
        match &self.widget {
            Widget::Select { options } => options.iter().find(|o| o.selected),
            _ => None,
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        match &self.widget {
            Widget::Select { options } => options,
            _ => &[],
        }
    }

    /// Text a renderer shows for the current value.
    pub fn display_value(&self) -> String {
        match &self.widget {
            Widget::Select { .. } => self
                .selected()
                .map(|o| o.text.clone())
                .unwrap_or_default(),
            Widget::File { current, pending } => match (current, pending) {
                (_, Some(pending)) => format!("{pending} (pending upload)"),
                (Some(current), None) => current.clone(),
                (None, None) => String::new(),
            },
            _ => display_json(&self.value),
        }
    }
}

/// Plain-text rendering of a JSON value.
pub fn display_json(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => if *b { "Yes" } else { "No" }.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => match items.len() {
            1 => "1 entry".to_string(),
            n => format!("{n} entries"),
        },
        Value::Object(_) => value.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectViewModel {
    pub public_id: String,
    /// Container key the view is bound to, `#<public_id>`.
    pub container: String,
    pub fields: Vec<FieldView>,
}

impl ProjectViewModel {
    pub fn field(&self, name: &str) -> Option<&FieldView> {
        self.fields.iter().find(|f| f.field == name)
    }
}
