//! Shared helpers for view integration tests.
//!
//! `FakeStore` answers each call from a queue of canned results and records
//! what it was asked, so tests can assert on both sides of a save.

use std::collections::VecDeque;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use inventory_client::{
    ClientError, FieldMetadata, InventoryType, ListProjectsOptions, Page, Project, ProjectUpdate,
    RootResource,
};
use inventory_view::InventoryStore;

type Queue<T> = Mutex<VecDeque<Result<T, ClientError>>>;

#[derive(Default)]
#[allow(dead_code)]
pub struct FakeStore {
    pub roots: Queue<RootResource>,
    pub projects: Queue<Page<Project>>,
    pub project: Queue<Project>,
    pub metadata: Queue<Arc<FieldMetadata>>,
    pub inventory_types: Queue<Arc<Vec<InventoryType>>>,
    pub updates: Queue<Project>,
    pub uploads: Queue<Project>,
    pub sent_updates: Mutex<Vec<(String, ProjectUpdate)>>,
    pub sent_uploads: Mutex<Vec<(String, PathBuf)>>,
    pub root_calls: Mutex<usize>,
}

#[allow(dead_code)]
impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<T>(queue: &Queue<T>, result: Result<T, ClientError>) {
        queue.lock().unwrap().push_back(result);
    }

    fn next<T>(queue: &Queue<T>) -> Result<T, ClientError> {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::InvalidResponse("no canned response".into())))
    }
}

impl InventoryStore for FakeStore {
    fn get_root(&self) -> impl Future<Output = Result<RootResource, ClientError>> + Send {
        *self.root_calls.lock().unwrap() += 1;
        let result = Self::next(&self.roots);
        async move { result }
    }

    fn list_projects(
        &self,
        _options: &ListProjectsOptions,
    ) -> impl Future<Output = Result<Page<Project>, ClientError>> + Send {
        let result = Self::next(&self.projects);
        async move { result }
    }

    fn get_project(
        &self,
        _public_id: &str,
    ) -> impl Future<Output = Result<Project, ClientError>> + Send {
        let result = Self::next(&self.project);
        async move { result }
    }

    fn project_metadata(
        &self,
    ) -> impl Future<Output = Result<Arc<FieldMetadata>, ClientError>> + Send {
        let result = Self::next(&self.metadata);
        async move { result }
    }

    fn inventory_types(
        &self,
    ) -> impl Future<Output = Result<Arc<Vec<InventoryType>>, ClientError>> + Send {
        let result = Self::next(&self.inventory_types);
        async move { result }
    }

    fn update_project(
        &self,
        public_id: &str,
        update: &ProjectUpdate,
    ) -> impl Future<Output = Result<Project, ClientError>> + Send {
        self.sent_updates
            .lock()
            .unwrap()
            .push((public_id.to_string(), update.clone()));
        let result = Self::next(&self.updates);
        async move { result }
    }

    fn upload_project_image(
        &self,
        public_id: &str,
        image_path: &Path,
    ) -> impl Future<Output = Result<Project, ClientError>> + Send {
        self.sent_uploads
            .lock()
            .unwrap()
            .push((public_id.to_string(), image_path.to_path_buf()));
        let result = Self::next(&self.uploads);
        async move { result }
    }
}

#[allow(dead_code)]
pub fn project() -> Project {
    Project {
        public_id: "RVB9AXBYA9JQYNZJ".to_string(),
        inventory_type_public_id: Some("TW6BJB4DBE7XKRXK".to_string()),
        name: "Main Warehouse".to_string(),
        public: true,
        active: true,
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn conflict() -> ClientError {
    ClientError::ApiError {
        status: 409,
        url: "http://localhost/api/projects/RVB9AXBYA9JQYNZJ/".to_string(),
        message: "Conflict".to_string(),
        detail: Some("Conflict".to_string()),
    }
}
