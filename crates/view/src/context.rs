//! Read-only reference data shared by every project view.
//!
//! Replaces process-wide metadata and inventory type lookups with an explicit
//! value. Cloning is cheap; both collections sit behind `Arc`.

use std::sync::Arc;

use inventory_client::{FieldMetadata, InventoryType};

use crate::error::ViewError;
use crate::store::InventoryStore;

#[derive(Debug, Clone, Default)]
pub struct ViewContext {
    metadata: Arc<FieldMetadata>,
    inventory_types: Arc<Vec<InventoryType>>,
}

impl ViewContext {
    pub fn new(metadata: Arc<FieldMetadata>, inventory_types: Arc<Vec<InventoryType>>) -> Self {
        Self {
            metadata,
            inventory_types,
        }
    }

    /// Fetch metadata and inventory types concurrently.
    pub async fn load<S: InventoryStore>(store: &S) -> Result<Self, ViewError> {
        let (metadata, inventory_types) =
            tokio::join!(store.project_metadata(), store.inventory_types());
        let metadata = metadata.map_err(|e| ViewError::fetch("field metadata", e))?;
        let inventory_types =
            inventory_types.map_err(|e| ViewError::fetch("inventory types", e))?;
        tracing::debug!(
            fields = metadata.len(),
            inventory_types = inventory_types.len(),
            "Loaded view context"
        );
        Ok(Self::new(metadata, inventory_types))
    }

    pub fn metadata(&self) -> &FieldMetadata {
        &self.metadata
    }

    pub fn inventory_types(&self) -> &[InventoryType] {
        &self.inventory_types
    }

    /// Look up an inventory type by public id.
    pub fn inventory_type(&self, public_id: &str) -> Option<&InventoryType> {
        self.inventory_types.iter().find(|t| t.public_id == public_id)
    }
}
