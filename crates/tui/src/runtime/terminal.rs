//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Ensure terminal state is restored on application exit, even during panics.
//! - Manage raw mode and alternate screen cleanup via Drop trait.
//!
//! Does NOT handle:
//! - Initial terminal setup (done in `main.rs`).
//!
//! Invariants / Assumptions:
//! - Must be created after terminal setup is complete.
//! - Must live for the duration of the TUI session.
//! - Drop implementation must not panic.

use crossterm::{
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Guard that restores the terminal when dropped.
#[derive(Debug, Default)]
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored: drop must not panic, and the explicit cleanup in
        // main() has usually run already.
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}
