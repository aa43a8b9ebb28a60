//! Inventory TUI library.
//!
//! Application state, key handling, rendering and the async runtime for the
//! inventory terminal UI. The binary in `main.rs` wires these to a real
//! terminal; tests drive them with `TestBackend` and mock servers.

pub mod action;
pub mod app;
pub mod cli;
pub mod runtime;
pub mod ui;

pub use action::Action;
pub use app::{App, ConnectionContext, FOOTER_HEIGHT, HEADER_HEIGHT, Screen};
