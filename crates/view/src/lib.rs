//! View layer for inventory projects.
//!
//! Responsibilities:
//! - Load the API root document and report failure through the message slot.
//! - Map a project, its field metadata and the inventory type collection to a
//!   declarative [`ProjectViewModel`].
//! - Render view-models through swappable [`ProjectRenderer`]s.
//! - Hold edits in a draft and persist them with [`ProjectEditor`].
//!
//! Does NOT handle:
//! - HTTP details (see `inventory-client`).
//! - Terminal drawing or command-line output (see the CLI and TUI crates).

pub mod builder;
pub mod context;
pub mod editor;
pub mod entry;
pub mod error;
pub mod message;
pub mod model;
pub mod renderer;
pub mod root;
pub mod store;

pub use builder::{build_project_view, choice_flag, choice_options, inventory_type_options};
pub use context::ViewContext;
pub use editor::{ProjectEditor, SaveOutcome, SaveRequest};
pub use entry::{MountedView, container_id, mount_project_view};
pub use error::ViewError;
pub use message::{Message, MessageBoard, MessageLevel};
pub use model::{DISPLAY_ORDER, FieldView, ProjectViewModel, SelectOption, Widget};
pub use renderer::{ProjectRenderer, TextRenderer};
pub use root::RootLoader;
pub use store::InventoryStore;
