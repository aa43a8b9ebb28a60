//! Project records and the partial update sent on save.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A project as returned by `GET <api_root>projects/<public_id>/`.
///
/// Fields the client does not model are kept in `extra` and written back
/// unchanged when the record is serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub public_id: String,
    /// URL of the project's inventory type.
    #[serde(default)]
    pub inventory_type: Option<String>,
    #[serde(default)]
    pub inventory_type_public_id: Option<String>,
    #[serde(default)]
    pub name: String,
    /// URL or storage path of the project logo.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub memberships: Vec<Value>,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updater: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    /// The raw JSON value of a named field, `Null` when absent.
    pub fn field_value(&self, field: &str) -> Value {
        fn opt(v: &Option<String>) -> Value {
            v.as_ref().map_or(Value::Null, |s| Value::String(s.clone()))
        }

        match field {
            "public_id" => Value::String(self.public_id.clone()),
            "inventory_type" => opt(&self.inventory_type),
            "inventory_type_public_id" => opt(&self.inventory_type_public_id),
            "name" => Value::String(self.name.clone()),
            "image" => opt(&self.image),
            "memberships" => Value::Array(self.memberships.clone()),
            "public" => Value::Bool(self.public),
            "active" => Value::Bool(self.active),
            "creator" => opt(&self.creator),
            "created" => opt(&self.created),
            "updater" => opt(&self.updater),
            "updated" => opt(&self.updated),
            "href" => opt(&self.href),
            other => self.extra.get(other).cloned().unwrap_or(Value::Null),
        }
    }
}

/// Fields a client may change on a project. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// URL (or public id, when no URL is known) of the new inventory type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl ProjectUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.inventory_type.is_none()
            && self.public.is_none()
            && self.active.is_none()
    }
}
