//! Root loader and view context tests.

mod common;

use std::sync::Arc;

use common::*;
use inventory_client::{ClientError, FieldMetadata, RootResource};
use inventory_view::{MessageBoard, RootLoader, ViewContext, ViewError};
use serde_json::json;

#[tokio::test]
async fn test_root_failure_reports_one_message_and_does_not_retry() {
    let store = FakeStore::new();
    FakeStore::push(&store.roots, Err(ClientError::NotFound("Not found.".to_string())));

    let mut loader = RootLoader::new();
    let mut board = MessageBoard::new();
    let err = loader.fetch(&store, &mut board).await.unwrap_err();

    assert!(matches!(err, ViewError::FetchFailure { .. }));
    assert_eq!(*store.root_calls.lock().unwrap(), 1);
    assert_eq!(board.text(), Some("Failed to load API root: Not found."));
    assert!(loader.root().is_none());
}

#[tokio::test]
async fn test_refetch_replaces_root_and_failure_keeps_previous() {
    let store = FakeStore::new();
    FakeStore::push(
        &store.roots,
        Ok(RootResource::from_response(json!({"collection": {"version": "1.0"}}))),
    );
    FakeStore::push(&store.roots, Err(ClientError::Timeout("/".to_string())));

    let mut loader = RootLoader::new();
    let mut board = MessageBoard::new();

    let root = loader.fetch(&store, &mut board).await.unwrap();
    assert_eq!(root.version(), Some("1.0"));
    assert!(root.get("collection").is_none());

    assert!(loader.fetch(&store, &mut board).await.is_err());
    assert_eq!(loader.root().and_then(|r| r.version()), Some("1.0"));
}

#[tokio::test]
async fn test_context_load_fails_as_a_whole() {
    let store = FakeStore::new();
    FakeStore::push(&store.metadata, Ok(Arc::new(FieldMetadata::default())));
    FakeStore::push(
        &store.inventory_types,
        Err(ClientError::Unauthorized("Invalid token.".to_string())),
    );

    let err = ViewContext::load(&store).await.unwrap_err();
    assert_eq!(err.message(), "Failed to load inventory types: Invalid token.");
}

#[tokio::test]
async fn test_context_load_success() {
    let store = FakeStore::new();
    FakeStore::push(&store.metadata, Ok(Arc::new(FieldMetadata::default())));
    FakeStore::push(&store.inventory_types, Ok(Arc::new(Vec::new())));

    let context = ViewContext::load(&store).await.unwrap();
    assert!(context.metadata().is_empty());
    assert!(context.inventory_types().is_empty());
}
