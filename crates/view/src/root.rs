//! Root resource loader.
//!
//! Fetches the API root once per call. A failure is reported as a single
//! message and nothing else happens: no retry, no backoff.

use inventory_client::RootResource;

use crate::error::ViewError;
use crate::message::MessageBoard;
use crate::store::InventoryStore;

/// Holds the most recently fetched root resource.
#[derive(Debug, Clone, Default)]
pub struct RootLoader {
    root: Option<RootResource>,
}

impl RootLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the root document, replacing any previous copy on success.
    ///
    /// On failure the previous copy is kept and `board` shows the error.
    pub async fn fetch<S: InventoryStore>(
        &mut self,
        store: &S,
        board: &mut MessageBoard,
    ) -> Result<&RootResource, ViewError> {
        match store.get_root().await {
            Ok(root) => {
                tracing::info!(
                    attributes = root.len(),
                    version = ?root.version(),
                    "Fetched API root"
                );
                Ok(self.root.insert(root))
            }
            Err(e) => {
                let error = ViewError::fetch("API root", e);
                tracing::warn!(error = %error, "API root fetch failed");
                board.error(error.message());
                Err(error)
            }
        }
    }

    pub fn root(&self) -> Option<&RootResource> {
        self.root.as_ref()
    }
}
