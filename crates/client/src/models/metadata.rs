//! Field metadata describing how project fields are labelled and constrained.
//!
//! Metadata comes from an `OPTIONS` request on the project list endpoint. Both
//! the framework's `{"actions": {"PUT": {...}}}` shape and a bare field map are
//! accepted; `PUT` is preferred over `POST` when both are present.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, Result};

/// One selectable value for an enumerable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChoice {
    pub value: Value,
    pub display_name: String,
}

/// Descriptor for a single field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub help_text: Option<String>,
    #[serde(default)]
    pub choices: Vec<FieldChoice>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default, rename = "type")]
    pub field_type: Option<String>,
}

/// Field name → descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMetadata {
    fields: HashMap<String, FieldDescriptor>,
}

impl FieldMetadata {
    pub fn new(fields: HashMap<String, FieldDescriptor>) -> Self {
        Self { fields }
    }

    /// Parse an `OPTIONS` response body.
    pub fn from_options_response(body: Value) -> Result<Self> {
        let fields = match body.get("actions") {
            Some(actions) => actions
                .get("PUT")
                .or_else(|| actions.get("POST"))
                .cloned()
                .ok_or_else(|| {
                    ClientError::InvalidResponse(
                        "OPTIONS response has no PUT or POST actions".to_string(),
                    )
                })?,
            None => body,
        };

        serde_json::from_value(fields).map_err(|e| {
            ClientError::InvalidResponse(format!("Field metadata could not be parsed: {e}"))
        })
    }

    pub fn get(&self, field: &str) -> Option<&FieldDescriptor> {
        self.fields.get(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, descriptor: FieldDescriptor) {
        self.fields.insert(field.into(), descriptor);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Descriptors sorted by field name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDescriptor)> {
        let mut entries: Vec<_> = self.fields.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_by_key(|(name, _)| *name);
        entries.into_iter()
    }

    /// Choices declared for a field, empty when none.
    pub fn choices(&self, field: &str) -> &[FieldChoice] {
        self.fields
            .get(field)
            .map(|d| d.choices.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_actions_put() {
        let meta = FieldMetadata::from_options_response(json!({
            "name": "Project List",
            "actions": {
                "PUT": {
                    "public": {
                        "type": "choice",
                        "label": "Public",
                        "help_text": "Set to YES if this project is public.",
                        "choices": [
                            {"value": true, "display_name": "Yes"},
                            {"value": false, "display_name": "No"}
                        ]
                    }
                },
                "POST": {}
            }
        }))
        .unwrap();

        let public = meta.get("public").unwrap();
        assert_eq!(public.label.as_deref(), Some("Public"));
        assert_eq!(public.field_type.as_deref(), Some("choice"));
        assert_eq!(meta.choices("public").len(), 2);
        assert!(meta.choices("active").is_empty());
    }

    #[test]
    fn test_parse_bare_map() {
        let meta = FieldMetadata::from_options_response(json!({
            "name": {"label": "Project Name", "required": true}
        }))
        .unwrap();
        assert!(meta.get("name").unwrap().required);
    }

    #[test]
    fn test_actions_without_put_or_post_is_invalid() {
        let err = FieldMetadata::from_options_response(json!({"actions": {}})).unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }
}
