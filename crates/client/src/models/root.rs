//! The API root document and its flattening transform.
//!
//! The server answers `GET <api_root>` with an envelope such as
//! `{"collection": {"version": "1.0", "href": "...", "items": {"projects": {...}}}}`.
//! [`flatten_root`] promotes the contents of `collection` and `collection.items`
//! to the top level so callers can read `version`, `href` and each section
//! directly.
//!
//! Invariants:
//! - No top-level `collection` or `items` key survives flattening.
//! - Flattening its own output is a no-op.
//! - When a promoted key collides with an existing one, the later value wins
//!   and the key keeps its first position.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const COLLECTION: &str = "collection";
const ITEMS: &str = "items";

/// Flatten a raw root response into a single-level attribute map.
///
/// Non-object values under `collection` or `items` carry no attributes and
/// are dropped. A bare non-object document flattens to an empty map.
pub fn flatten_root(raw: Value) -> Map<String, Value> {
    let mut out = Map::new();
    if let Value::Object(top) = raw {
        for (key, value) in top {
            absorb(&mut out, key, value);
        }
    }
    out
}

fn absorb(out: &mut Map<String, Value>, key: String, value: Value) {
    if key == COLLECTION || key == ITEMS {
        match value {
            Value::Object(inner) => {
                for (k, v) in inner {
                    absorb(out, k, v);
                }
            }
            other => {
                tracing::warn!(
                    key = %key,
                    kind = %value_kind(&other),
                    "Dropping non-object envelope value"
                );
            }
        }
        return;
    }
    out.insert(key, value);
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The flattened API root resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Map<String, Value>")]
pub struct RootResource {
    attributes: Map<String, Value>,
}

impl From<Value> for RootResource {
    fn from(raw: Value) -> Self {
        Self {
            attributes: flatten_root(raw),
        }
    }
}

impl From<RootResource> for Map<String, Value> {
    fn from(root: RootResource) -> Self {
        root.attributes
    }
}

impl RootResource {
    /// Build from a raw response, applying the flattening transform.
    pub fn from_response(raw: Value) -> Self {
        Self::from(raw)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Attribute names in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    pub fn version(&self) -> Option<&str> {
        self.get("version").and_then(Value::as_str)
    }

    pub fn href(&self) -> Option<&str> {
        self.get("href").and_then(Value::as_str)
    }

    /// Resolve a link inside a section, e.g. `("projects", "projects")`.
    ///
    /// The link may be a plain URL string or an object carrying `href`.
    pub fn section_link(&self, section: &str, name: &str) -> Option<&str> {
        let entry = self.get(section)?.as_object()?.get(name)?;
        match entry {
            Value::String(url) => Some(url),
            Value::Object(obj) => obj.get("href").and_then(Value::as_str),
            _ => None,
        }
    }

    /// Section names whose value is an object of links.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .iter()
            .filter(|(_, v)| v.is_object())
            .map(|(k, _)| k.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_promotes_items_and_collection_keys() {
        let flat = flatten_root(json!({"collection": {"items": {"a": 1, "b": 2}, "c": 3}}));
        assert_eq!(Value::Object(flat), json!({"a": 1, "b": 2, "c": 3}));
    }

    #[test]
    fn test_flatten_keeps_other_top_level_keys() {
        let flat = flatten_root(json!({"status": "ok", "collection": {"version": "1.0"}}));
        assert_eq!(flat.get("status"), Some(&json!("ok")));
        assert_eq!(flat.get("version"), Some(&json!("1.0")));
        assert!(!flat.contains_key("collection"));
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let once = flatten_root(json!({
            "collection": {"version": "1.0", "items": {"projects": {"projects": "/api/projects/"}}}
        }));
        let twice = flatten_root(Value::Object(once.clone()));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_flatten_later_value_wins_on_collision() {
        let flat = flatten_root(json!({
            "collection": {"href": "outer", "items": {"href": "inner"}}
        }));
        assert_eq!(flat.get("href"), Some(&json!("inner")));
        assert_eq!(flat.len(), 1);
    }

    #[test]
    fn test_flatten_leaves_nested_items_inside_sections() {
        let flat = flatten_root(json!({
            "collection": {"items": {"invoices": {"items": "/api/items/", "invoices": "/api/invoices/"}}}
        }));
        assert_eq!(flat.get("invoices").unwrap()["items"], json!("/api/items/"));
    }

    #[test]
    fn test_flatten_drops_non_object_envelopes() {
        let flat = flatten_root(json!({"collection": [1, 2], "items": "x", "k": 1}));
        assert_eq!(Value::Object(flat), json!({"k": 1}));
        assert!(flatten_root(json!("bare")).is_empty());
    }

    #[test]
    fn test_root_resource_accessors() {
        let root: RootResource = serde_json::from_value(json!({
            "collection": {
                "version": "1.0",
                "href": "http://localhost:8000/api/",
                "items": {
                    "projects": {
                        "inventory_type_list": "http://localhost:8000/api/inventory-types",
                        "projects": "http://localhost:8000/api/projects/"
                    },
                    "regions": {"countries": {"href": "http://localhost:8000/api/countries/"}}
                }
            }
        }))
        .unwrap();

        assert_eq!(root.version(), Some("1.0"));
        assert_eq!(root.href(), Some("http://localhost:8000/api/"));
        assert_eq!(
            root.section_link("projects", "projects"),
            Some("http://localhost:8000/api/projects/")
        );
        assert_eq!(
            root.section_link("regions", "countries"),
            Some("http://localhost:8000/api/countries/")
        );
        assert_eq!(root.section_link("projects", "missing"), None);
        assert_eq!(root.keys().collect::<Vec<_>>(), vec!["version", "href", "projects", "regions"]);
        assert_eq!(root.sections().collect::<Vec<_>>(), vec!["projects", "regions"]);
    }

    #[test]
    fn test_root_resource_serializes_flat() {
        let root = RootResource::from_response(json!({"collection": {"items": {"a": 1}}}));
        assert_eq!(serde_json::to_value(&root).unwrap(), json!({"a": 1}));
    }
}
