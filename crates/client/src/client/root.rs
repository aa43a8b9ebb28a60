//! API root method for [`InventoryClient`].

use crate::client::InventoryClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::RootResource;

impl InventoryClient {
    /// Fetch the flattened API root document. Never retried.
    pub async fn get_root(&self) -> Result<RootResource> {
        endpoints::get_root(&self.http, &self.api_url, &self.auth, self.metrics.as_ref()).await
    }
}
