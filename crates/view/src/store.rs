//! The data source views read from and save to.
//!
//! [`InventoryStore`] is implemented for [`InventoryClient`]; tests substitute
//! an in-memory store.

use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use inventory_client::{
    ClientError, FieldMetadata, InventoryClient, InventoryType, ListProjectsOptions, Page,
    Project, ProjectUpdate, RootResource,
};

type Result<T> = std::result::Result<T, ClientError>;

/// Reads and writes needed by the view layer.
pub trait InventoryStore: Sync {
    fn get_root(&self) -> impl Future<Output = Result<RootResource>> + Send;

    fn list_projects(
        &self,
        options: &ListProjectsOptions,
    ) -> impl Future<Output = Result<Page<Project>>> + Send;

    fn get_project(&self, public_id: &str) -> impl Future<Output = Result<Project>> + Send;

    fn project_metadata(&self) -> impl Future<Output = Result<Arc<FieldMetadata>>> + Send;

    fn inventory_types(&self) -> impl Future<Output = Result<Arc<Vec<InventoryType>>>> + Send;

    fn update_project(
        &self,
        public_id: &str,
        update: &ProjectUpdate,
    ) -> impl Future<Output = Result<Project>> + Send;

    fn upload_project_image(
        &self,
        public_id: &str,
        image_path: &Path,
    ) -> impl Future<Output = Result<Project>> + Send;
}

impl InventoryStore for InventoryClient {
    fn get_root(&self) -> impl Future<Output = Result<RootResource>> + Send {
        InventoryClient::get_root(self)
    }

    fn list_projects(
        &self,
        options: &ListProjectsOptions,
    ) -> impl Future<Output = Result<Page<Project>>> + Send {
        InventoryClient::list_projects(self, options)
    }

    fn get_project(&self, public_id: &str) -> impl Future<Output = Result<Project>> + Send {
        InventoryClient::get_project(self, public_id)
    }

    fn project_metadata(&self) -> impl Future<Output = Result<Arc<FieldMetadata>>> + Send {
        InventoryClient::project_metadata(self)
    }

    fn inventory_types(&self) -> impl Future<Output = Result<Arc<Vec<InventoryType>>>> + Send {
        InventoryClient::list_inventory_types(self)
    }

    fn update_project(
        &self,
        public_id: &str,
        update: &ProjectUpdate,
    ) -> impl Future<Output = Result<Project>> + Send {
        InventoryClient::update_project(self, public_id, update)
    }

    fn upload_project_image(
        &self,
        public_id: &str,
        image_path: &Path,
    ) -> impl Future<Output = Result<Project>> + Send {
        InventoryClient::upload_project_image(self, public_id, image_path)
    }
}
