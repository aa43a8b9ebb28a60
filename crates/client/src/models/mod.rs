//! Data models for inventory API responses.
//!
//! Types are organized by resource in submodules and re-exported here.

pub mod inventory_type;
pub mod metadata;
pub mod page;
pub mod project;
pub mod root;

pub use inventory_type::InventoryType;
pub use metadata::{FieldChoice, FieldDescriptor, FieldMetadata};
pub use page::{ListBody, Page};
pub use project::{Project, ProjectUpdate};
pub use root::{RootResource, flatten_root};
