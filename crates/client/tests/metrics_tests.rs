//! Metrics recording tests.
//!
//! Recording goes through the global `metrics` facade; with no recorder
//! installed these calls are no-ops, so the tests assert that instrumented
//! paths behave identically with and without a collector.

mod common;

use common::*;
use inventory_client::MetricsCollector;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_requests_succeed_with_metrics_enabled() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("root/api_root.json")),
        )
        .mount(&mock_server)
        .await;

    let client = InventoryClient::builder()
        .base_url(mock_server.uri())
        .auth_strategy(token_auth())
        .metrics(MetricsCollector::new())
        .build()
        .unwrap();

    let root = client.get_root().await.unwrap();
    assert_eq!(root.version(), Some("1.0"));
}

#[tokio::test]
async fn test_errors_recorded_without_changing_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/projects/X/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let metrics = MetricsCollector::new();
    let err = endpoints::get_project(
        &Client::new(),
        &api_url(&mock_server),
        &token_auth(),
        "X",
        0,
        Some(&metrics),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, inventory_client::ClientError::NotFound(_)));
}
