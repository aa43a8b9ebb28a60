//! Action enum for the TUI event system.
//!
//! Actions represent both user input and the results of async API calls.
//!
//! # Action Categories
//!
//! - **System**: lifecycle and terminal events (`Quit`, `Tick`, `Input`, `Resize`)
//! - **Requests**: work for `runtime::side_effects` (`LoadRoot`, `LoadProjects`,
//!   `OpenProject`, `SaveProject`)
//! - **Results**: completions sent back by spawned tasks
//!
//! # Security Note
//!
//! Log actions through `RedactedAction(&action)` rather than `?action`; result
//! payloads carry server data that does not belong in log files.

use std::fmt;

use crossterm::event::KeyEvent;
use inventory_client::{Page, Project, RootResource};
use inventory_view::{SaveOutcome, SaveRequest, ViewContext, ViewError};

#[derive(Debug)]
pub enum Action {
    Quit,
    Tick,
    Input(KeyEvent),
    Resize(u16, u16),

    /// Fetch the API root document.
    LoadRoot,
    /// Fetch one page of projects (1-based).
    LoadProjects { page: usize },
    /// Fetch a project with its field metadata and inventory types.
    OpenProject { public_id: String },
    /// Persist a project draft and chosen image.
    SaveProject(SaveRequest),

    RootLoaded(Result<RootResource, ViewError>),
    ProjectsLoaded {
        page: usize,
        result: Result<Page<Project>, ViewError>,
    },
    ProjectLoaded(Result<(Project, ViewContext), ViewError>),
    ProjectSaved {
        public_id: String,
        outcome: SaveOutcome,
    },
}

impl Action {
    /// Whether the action asks the runtime for network work.
    pub fn is_request(&self) -> bool {
        matches!(
            self,
            Action::LoadRoot
                | Action::LoadProjects { .. }
                | Action::OpenProject { .. }
                | Action::SaveProject(_)
        )
    }
}

/// Debug wrapper that logs an action without its payload.
pub struct RedactedAction<'a>(pub &'a Action);

impl fmt::Debug for RedactedAction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Action::Input(_) => write!(f, "Input(<key>)"),
            Action::SaveProject(request) => write!(
                f,
                "SaveProject({}, image={})",
                request.public_id,
                request.image.is_some()
            ),
            Action::RootLoaded(result) => write!(f, "RootLoaded(ok={})", result.is_ok()),
            Action::ProjectsLoaded { page, result } => match result {
                Ok(projects) => write!(
                    f,
                    "ProjectsLoaded(page={page}, <{} projects>)",
                    projects.results.len()
                ),
                Err(_) => write!(f, "ProjectsLoaded(page={page}, err)"),
            },
            Action::ProjectLoaded(result) => match result {
                Ok((project, _)) => write!(f, "ProjectLoaded({})", project.public_id),
                Err(_) => write!(f, "ProjectLoaded(err)"),
            },
            Action::ProjectSaved { public_id, outcome } => write!(
                f,
                "ProjectSaved({public_id}, ok={})",
                outcome.error.is_none()
            ),
            other => write!(f, "{other:?}"),
        }
    }
}
