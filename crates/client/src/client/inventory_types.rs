//! Inventory type API methods for [`InventoryClient`].

use std::sync::Arc;

use crate::client::InventoryClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::InventoryType;

impl InventoryClient {
    /// All inventory types, served from cache when fresh.
    pub async fn list_inventory_types(&self) -> Result<Arc<Vec<InventoryType>>> {
        if let Some(cached) = self.cache.inventory_types().await {
            return Ok(cached);
        }

        let fresh = Arc::new(
            endpoints::list_inventory_types(
                &self.http,
                &self.api_url,
                &self.auth,
                self.max_retries,
                self.metrics.as_ref(),
            )
            .await?,
        );
        self.cache.store_inventory_types(fresh.clone()).await;
        Ok(fresh)
    }

    /// Fetch one inventory type, bypassing the cache.
    pub async fn get_inventory_type(&self, public_id: &str) -> Result<InventoryType> {
        endpoints::get_inventory_type(
            &self.http,
            &self.api_url,
            &self.auth,
            public_id,
            self.max_retries,
            self.metrics.as_ref(),
        )
        .await
    }
}
