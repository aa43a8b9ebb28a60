//! Common test utilities for integration tests.
//!
//! Shared helpers and re-exports for exercising the inventory client against
//! a wiremock server.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - The mock API root lives at `<server>/api/`

use std::time::Duration;

#[allow(unused_imports)]
pub use inventory_client::testing::load_fixture;

#[allow(unused_imports)]
pub use inventory_client::{AuthStrategy, InventoryClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token auth used by every test.
#[allow(dead_code)]
pub fn token_auth() -> AuthStrategy {
    AuthStrategy::ApiToken {
        token: secrecy::SecretString::new("test-token".to_string().into()),
    }
}

/// API root URL for a mock server.
#[allow(dead_code)]
pub fn api_url(server: &MockServer) -> String {
    format!("{}/api/", server.uri())
}

/// A client pointed at the mock server with the given read retry budget.
#[allow(dead_code)]
pub fn client_for(server: &MockServer, max_retries: usize) -> InventoryClient {
    InventoryClient::builder()
        .base_url(server.uri())
        .auth_strategy(token_auth())
        .max_retries(max_retries)
        .build()
        .expect("client should build")
}

/// Advance Tokio's paused clock and yield so sleepers can observe the change.
#[allow(dead_code)]
pub async fn advance_and_yield(duration: Duration) {
    tokio::time::advance(duration).await;
    tokio::task::yield_now().await;
}

/// Assert that a task has not completed after yielding to the scheduler.
#[allow(dead_code)]
pub async fn assert_pending<T>(handle: &tokio::task::JoinHandle<T>, context: &str) {
    tokio::task::yield_now().await;
    assert!(!handle.is_finished(), "Expected pending task: {}", context);
}
