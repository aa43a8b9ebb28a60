//! Inventory REST API client.
//!
//! This crate provides a typed async client for the inventory service: the
//! API root document, projects, inventory types and project field metadata.
//! Reads retry on transient statuses; writes are sent once.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::AuthStrategy;
pub use client::InventoryClient;
pub use client::builder::InventoryClientBuilder;
pub use client::cache::ReferenceCache;
pub use endpoints::ListProjectsOptions;
pub use error::{ClientError, Result, extract_detail};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use models::{
    FieldChoice, FieldDescriptor, FieldMetadata, InventoryType, Page, Project, ProjectUpdate,
    RootResource, flatten_root,
};
