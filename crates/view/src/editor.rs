//! Project editing and the save path.
//!
//! Responsibilities:
//! - Keep the last saved record and a draft of changed fields.
//! - Track the image chosen for upload.
//! - Persist the draft and report the outcome through the message slot.
//!
//! Does NOT handle:
//! - Validation: the server is the only judge of a draft.
//! - Concurrent saves on one record: the last response to arrive wins.
//!
//! Invariants:
//! - A rejected save leaves the record and the draft untouched.
//! - A successful save replaces the record with the server's copy and
//!   clears the draft fields it sent. Edits made while it was in flight stay.

use std::path::{Path, PathBuf};

use inventory_client::{ClientError, Project, ProjectUpdate};

use crate::builder::build_project_view;
use crate::context::ViewContext;
use crate::error::ViewError;
use crate::message::MessageBoard;
use crate::model::ProjectViewModel;
use crate::store::InventoryStore;

/// Everything one save sends, detached from the editor so it can run on
/// another task.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub public_id: String,
    pub update: ProjectUpdate,
    pub image: Option<PathBuf>,
}

/// Result of executing a [`SaveRequest`].
#[derive(Debug)]
pub struct SaveOutcome {
    /// Server copy after the last successful step, if any step succeeded.
    pub saved: Option<Project>,
    /// The first failure, if any.
    pub error: Option<ClientError>,
    /// Whether the image upload step succeeded.
    pub image_uploaded: bool,
    /// The update this outcome answers.
    pub sent: ProjectUpdate,
    /// The image this outcome tried to upload.
    pub sent_image: Option<PathBuf>,
}

impl SaveOutcome {
    fn for_request(request: &SaveRequest) -> Self {
        Self {
            saved: None,
            error: None,
            image_uploaded: false,
            sent: request.update.clone(),
            sent_image: request.image.clone(),
        }
    }
}

/// Clear a draft field the server has just accepted, unless it changed since.
fn settle<T: PartialEq>(draft: &mut Option<T>, sent: &Option<T>) {
    if draft == sent {
        *draft = None;
    }
}

impl SaveRequest {
    /// Send the update, then the image if one was chosen. Stops at the first
    /// failure.
    pub async fn execute<S: InventoryStore>(self, store: &S) -> SaveOutcome {
        let mut outcome = SaveOutcome::for_request(&self);

        match store.update_project(&self.public_id, &self.update).await {
            Ok(project) => outcome.saved = Some(project),
            Err(e) => {
                outcome.error = Some(e);
                return outcome;
            }
        }

        if let Some(path) = &self.image {
            match store.upload_project_image(&self.public_id, path).await {
                Ok(project) => {
                    outcome.saved = Some(project);
                    outcome.image_uploaded = true;
                }
                Err(e) => outcome.error = Some(e),
            }
        }
        outcome
    }
}

/// Editing state for one project.
#[derive(Debug, Clone)]
pub struct ProjectEditor {
    record: Project,
    draft: ProjectUpdate,
    /// Public id behind `draft.inventory_type`, for previewing.
    draft_inventory_type_id: Option<String>,
    pending_image: Option<PathBuf>,
}

impl ProjectEditor {
    pub fn new(record: Project) -> Self {
        Self {
            record,
            draft: ProjectUpdate::default(),
            draft_inventory_type_id: None,
            pending_image: None,
        }
    }

    /// The last saved record.
    pub fn record(&self) -> &Project {
        &self.record
    }

    pub fn draft(&self) -> &ProjectUpdate {
        &self.draft
    }

    pub fn is_dirty(&self) -> bool {
        !self.draft.is_empty() || self.pending_image.is_some()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = Some(name.into());
    }

    pub fn set_public(&mut self, public: bool) {
        self.draft.public = Some(public);
    }

    pub fn set_active(&mut self, active: bool) {
        self.draft.active = Some(active);
    }

    /// Select an inventory type by public id.
    ///
    /// The server expects the type's URL; the public id is sent when the
    /// context does not know one.
    pub fn set_inventory_type(&mut self, public_id: &str, context: &ViewContext) {
        let reference = context
            .inventory_type(public_id)
            .and_then(|t| t.href.clone())
            .unwrap_or_else(|| public_id.to_string());
        self.draft.inventory_type = Some(reference);
        self.draft_inventory_type_id = Some(public_id.to_string());
    }

    /// Remember a file to upload as the new logo.
    pub fn choose_image(&mut self, path: impl Into<PathBuf>) {
        self.pending_image = Some(path.into());
    }

    pub fn pending_image(&self) -> Option<&Path> {
        self.pending_image.as_deref()
    }

    /// File name of the chosen image, for display.
    pub fn pending_filename(&self) -> Option<String> {
        self.pending_image
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
    }

    /// Drop the draft and any chosen image.
    pub fn discard(&mut self) {
        self.draft = ProjectUpdate::default();
        self.draft_inventory_type_id = None;
        self.pending_image = None;
    }

    /// The record as it would look after saving the draft.
    pub fn preview(&self) -> Project {
        let mut project = self.record.clone();
        if let Some(name) = &self.draft.name {
            project.name = name.clone();
        }
        if let Some(public) = self.draft.public {
            project.public = public;
        }
        if let Some(active) = self.draft.active {
            project.active = active;
        }
        if let Some(id) = &self.draft_inventory_type_id {
            project.inventory_type_public_id = Some(id.clone());
            project.inventory_type = self.draft.inventory_type.clone();
        }
        project
    }

    /// View-model of the previewed record.
    pub fn view(&self, context: &ViewContext) -> ProjectViewModel {
        build_project_view(&self.preview(), context, self.pending_filename().as_deref())
    }

    /// Snapshot of what a save would send.
    pub fn save_request(&self) -> SaveRequest {
        SaveRequest {
            public_id: self.record.public_id.clone(),
            update: self.draft.clone(),
            image: self.pending_image.clone(),
        }
    }

    /// Apply the outcome of a save started from [`Self::save_request`].
    ///
    /// A rejected update changes nothing. Otherwise the record takes the
    /// server copy and each draft field still holding the value that was sent
    /// is cleared. Fields edited while the save was in flight are kept. If the
    /// image upload failed, the image stays pending.
    pub fn apply_outcome(
        &mut self,
        outcome: SaveOutcome,
        board: &mut MessageBoard,
    ) -> Result<(), ViewError> {
        if let Some(saved) = outcome.saved {
            self.record = saved;
            settle(&mut self.draft.name, &outcome.sent.name);
            settle(&mut self.draft.public, &outcome.sent.public);
            settle(&mut self.draft.active, &outcome.sent.active);
            settle(&mut self.draft.inventory_type, &outcome.sent.inventory_type);
            if self.draft.inventory_type.is_none() {
                self.draft_inventory_type_id = None;
            }
            if outcome.image_uploaded {
                settle(&mut self.pending_image, &outcome.sent_image);
            }
        }

        match outcome.error {
            None => {
                tracing::info!(public_id = %self.record.public_id, "Project saved");
                board.success(format!("Saved {}", self.record.name));
                Ok(())
            }
            Some(e) => {
                let error = ViewError::save(e);
                tracing::warn!(
                    public_id = %self.record.public_id,
                    error = %error,
                    "Project save failed"
                );
                board.error(error.message());
                Err(error)
            }
        }
    }

    /// Persist the draft and chosen image.
    pub async fn save<S: InventoryStore>(
        &mut self,
        store: &S,
        board: &mut MessageBoard,
    ) -> Result<(), ViewError> {
        let outcome = self.save_request().execute(store).await;
        self.apply_outcome(outcome, board)
    }
}
