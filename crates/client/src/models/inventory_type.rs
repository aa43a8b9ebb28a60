//! Inventory type reference records.

use serde::{Deserialize, Serialize};

/// One entry of `GET <api_root>inventory-types`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryType {
    pub public_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
}
