//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (TerminalGuard)
//! - Configuration loading
//! - Startup requests
//! - Async side effect handlers for API calls
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `inventory_tui::app` and `inventory_tui::ui`).
//! - REST details (see `inventory_client`).
//!
//! Invariants:
//! - Side effects run in separate tokio tasks to avoid blocking the UI.

pub mod config;
pub mod side_effects;
pub mod startup;
pub mod terminal;
