//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` plus `global_test_lock()` to prevent environment variable pollution.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

mod basic_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
