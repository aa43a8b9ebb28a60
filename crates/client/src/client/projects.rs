//! Project API methods for [`InventoryClient`].
//!
//! # What this module handles:
//! - Listing and fetching projects
//! - Partial updates and logo uploads
//! - Field metadata, cached alongside inventory types
//!
//! # What this module does NOT handle:
//! - Low-level HTTP calls (in [`crate::endpoints`])

use std::path::Path;
use std::sync::Arc;

use crate::client::InventoryClient;
use crate::endpoints::{self, ListProjectsOptions};
use crate::error::Result;
use crate::models::{FieldMetadata, Page, Project, ProjectUpdate};

impl InventoryClient {
    /// List one page of projects.
    pub async fn list_projects(&self, options: &ListProjectsOptions) -> Result<Page<Project>> {
        endpoints::list_projects(
            &self.http,
            &self.api_url,
            &self.auth,
            options,
            self.max_retries,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Fetch one project by public id.
    pub async fn get_project(&self, public_id: &str) -> Result<Project> {
        endpoints::get_project(
            &self.http,
            &self.api_url,
            &self.auth,
            public_id,
            self.max_retries,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Apply a partial update. An empty update is sent as-is; the server
    /// answers with the unchanged record.
    pub async fn update_project(&self, public_id: &str, update: &ProjectUpdate) -> Result<Project> {
        tracing::debug!(public_id, ?update, "Updating project");
        endpoints::update_project(
            &self.http,
            &self.api_url,
            &self.auth,
            public_id,
            update,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Replace the project logo with the file at `image_path`.
    pub async fn upload_project_image(
        &self,
        public_id: &str,
        image_path: &Path,
    ) -> Result<Project> {
        tracing::debug!(public_id, path = %image_path.display(), "Uploading project image");
        endpoints::upload_project_image(
            &self.http,
            &self.api_url,
            &self.auth,
            public_id,
            image_path,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Project field metadata, served from cache when fresh.
    pub async fn project_metadata(&self) -> Result<Arc<FieldMetadata>> {
        if let Some(cached) = self.cache.metadata().await {
            return Ok(cached);
        }

        let fresh = Arc::new(
            endpoints::get_project_metadata(
                &self.http,
                &self.api_url,
                &self.auth,
                self.max_retries,
                self.metrics.as_ref(),
            )
            .await?,
        );
        self.cache.store_metadata(fresh.clone()).await;
        Ok(fresh)
    }
}
