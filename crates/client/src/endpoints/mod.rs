//! REST API endpoint implementations.
//!
//! Each function performs one HTTP exchange against the inventory API and
//! decodes the response. Functions take the shared `reqwest::Client`, the
//! API root URL (always ending in `/`) and the auth strategy explicitly so
//! they can be exercised without an [`crate::InventoryClient`].

mod inventory_types;
mod metadata;
mod projects;
mod request;
mod root;
pub mod url_encoding;

pub use inventory_types::{get_inventory_type, list_inventory_types};
pub use metadata::get_project_metadata;
pub use projects::{
    ListProjectsOptions, get_project, list_projects, update_project, upload_project_image,
};
pub use request::send_request_with_retry;
pub use root::get_root;
pub use url_encoding::encode_path_segment;
