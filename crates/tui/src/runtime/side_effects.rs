//! Async side effect handlers for TUI actions.
//!
//! Responsibilities:
//! - Run the network work behind request actions.
//! - Spawn one tracked task per request so the UI never waits on I/O.
//! - Send results back via the action channel for state updates.
//!
//! Does NOT handle:
//! - Direct application state modification (sends actions to do that).
//! - UI rendering or terminal management.
//!
//! Invariants:
//! - Every request action produces exactly one result action.
//! - Non-request actions are ignored.
//! - A closed channel drops the result silently; the app is shutting down.

use std::sync::Arc;

use inventory_client::ListProjectsOptions;
use inventory_view::{InventoryStore, MessageBoard, RootLoader, ViewContext, ViewError};
use tokio::sync::mpsc::Sender;
pub use tokio_util::task::TaskTracker;

use crate::action::Action;

/// Start the work for `action`, if it is a request.
pub fn handle_side_effects<S>(
    action: Action,
    store: Arc<S>,
    tx: Sender<Action>,
    task_tracker: &TaskTracker,
) where
    S: InventoryStore + Send + Sync + 'static,
{
    match action {
        Action::LoadRoot => {
            task_tracker.spawn(async move {
                let mut loader = RootLoader::new();
                // The app owns the visible message slot; this one is discarded.
                let mut board = MessageBoard::new();
                let result = loader
                    .fetch(store.as_ref(), &mut board)
                    .await
                    .cloned();
                let _ = tx.send(Action::RootLoaded(result)).await;
            });
        }
        Action::LoadProjects { page } => {
            task_tracker.spawn(async move {
                let options = ListProjectsOptions {
                    page: Some(page),
                    ..Default::default()
                };
                let result = store
                    .list_projects(&options)
                    .await
                    .map_err(|e| ViewError::fetch("projects", e));
                if let Err(e) = &result {
                    tracing::warn!(page, error = %e, "Project list fetch failed");
                }
                let _ = tx.send(Action::ProjectsLoaded { page, result }).await;
            });
        }
        Action::OpenProject { public_id } => {
            task_tracker.spawn(async move {
                let project = async {
                    store
                        .get_project(&public_id)
                        .await
                        .map_err(|e| ViewError::fetch("project", e))
                };
                let result = tokio::try_join!(project, ViewContext::load(store.as_ref()));
                if let Err(e) = &result {
                    tracing::warn!(%public_id, error = %e, "Project open failed");
                }
                let _ = tx.send(Action::ProjectLoaded(result)).await;
            });
        }
        Action::SaveProject(request) => {
            task_tracker.spawn(async move {
                let public_id = request.public_id.clone();
                let outcome = request.execute(store.as_ref()).await;
                let _ = tx.send(Action::ProjectSaved { public_id, outcome }).await;
            });
        }
        _ => {}
    }
}
