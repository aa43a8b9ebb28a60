//! Project endpoints: list, fetch, partial update and logo upload.

use std::path::Path;

use reqwest::Client;
use reqwest::multipart::{Form, Part};

use crate::auth::AuthStrategy;
use crate::endpoints::{encode_path_segment, send_request_with_retry};
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::{Page, Project, ProjectUpdate};
use inventory_config::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Paging and filter options for [`list_projects`].
#[derive(Debug, Clone, Default)]
pub struct ListProjectsOptions {
    /// 1-based page number.
    pub page: Option<usize>,
    /// Clamped to the server maximum.
    pub page_size: Option<usize>,
    /// Restrict to active or inactive projects.
    pub active: Option<bool>,
}

impl ListProjectsOptions {
    fn query(&self) -> Vec<(&'static str, String)> {
        let page_size = self
            .page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        let mut query = vec![("page_size", page_size.to_string())];
        if let Some(page) = self.page {
            query.push(("page", page.max(1).to_string()));
        }
        if let Some(active) = self.active {
            query.push(("active", active.to_string()));
        }
        query
    }
}

fn project_url(api_url: &str, public_id: &str) -> String {
    format!("{api_url}projects/{}/", encode_path_segment(public_id))
}

/// List one page of projects.
pub async fn list_projects(
    client: &Client,
    api_url: &str,
    auth: &AuthStrategy,
    options: &ListProjectsOptions,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<Page<Project>> {
    let url = format!("{api_url}projects/");
    let builder = auth.apply(client.get(&url)).query(&options.query());
    let response =
        send_request_with_retry(builder, max_retries, "/projects", "GET", metrics).await?;

    response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Project list: {e}")))
}

/// Fetch one project by public id.
pub async fn get_project(
    client: &Client,
    api_url: &str,
    auth: &AuthStrategy,
    public_id: &str,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<Project> {
    let builder = auth.apply(client.get(project_url(api_url, public_id)));
    let response =
        send_request_with_retry(builder, max_retries, "/projects/{id}", "GET", metrics).await?;

    response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Project {public_id}: {e}")))
}

/// Send a partial update and return the server's copy of the project.
///
/// Writes are attempted exactly once.
pub async fn update_project(
    client: &Client,
    api_url: &str,
    auth: &AuthStrategy,
    public_id: &str,
    update: &ProjectUpdate,
    metrics: Option<&MetricsCollector>,
) -> Result<Project> {
    let builder = auth
        .apply(client.patch(project_url(api_url, public_id)))
        .json(update);
    let response =
        send_request_with_retry(builder, 0, "/projects/{id}", "PATCH", metrics).await?;

    response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Updated project {public_id}: {e}")))
}

/// Upload a new project logo as multipart field `image`.
///
/// Writes are attempted exactly once.
pub async fn upload_project_image(
    client: &Client,
    api_url: &str,
    auth: &AuthStrategy,
    public_id: &str,
    image_path: &Path,
    metrics: Option<&MetricsCollector>,
) -> Result<Project> {
    let bytes = tokio::fs::read(image_path).await?;
    let file_name = image_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let form = Form::new().part("image", Part::bytes(bytes).file_name(file_name));

    let builder = auth
        .apply(client.patch(project_url(api_url, public_id)))
        .multipart(form);
    let response =
        send_request_with_retry(builder, 0, "/projects/{id}", "PATCH", metrics).await?;

    response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Updated project {public_id}: {e}")))
}
