//! Application state and action reduction.
//!
//! Responsibilities:
//! - Hold the project list, the open project form and the message slot.
//! - Apply actions to state and hand request actions back to the runtime.
//!
//! Does NOT handle:
//! - Network I/O (see `runtime::side_effects`).
//! - Drawing (see `render` and `crate::ui`).
//!
//! Invariants:
//! - `update` never blocks; requests are returned, not executed.
//! - A save result only touches the form whose project it belongs to.
//! - Exactly one message is visible at a time.

mod input;
mod line_input;
mod render;

#[cfg(test)]
mod tests;

use inventory_client::{Project, RootResource};
use inventory_view::{
    MessageBoard, ProjectEditor, ProjectViewModel, ViewContext, ViewError, container_id,
};
use ratatui::widgets::TableState;

use crate::action::Action;
use crate::ui::Theme;

pub use line_input::LineInput;

/// Rows taken by the header.
pub const HEADER_HEIGHT: u16 = 3;
/// Rows taken by the footer: message line and key hints.
pub const FOOTER_HEIGHT: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Projects,
    ProjectForm,
}

/// Who and where the session is connected to, for the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionContext {
    pub profile_name: Option<String>,
    pub base_url: String,
    pub auth_mode: String,
}

/// Editable rows of the project form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    InventoryType,
    Image,
    Public,
    Active,
}

impl FormField {
    const ORDER: [FormField; 5] = [
        FormField::Name,
        FormField::InventoryType,
        FormField::Image,
        FormField::Public,
        FormField::Active,
    ];

    /// View-model field name for this row.
    pub fn field_name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::InventoryType => "inventory_type",
            FormField::Image => "image",
            FormField::Public => "public",
            FormField::Active => "active",
        }
    }

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    EditingName,
    EditingImagePath,
}

/// An open project: its editor plus the reference data its view needs.
#[derive(Debug, Clone)]
pub struct ProjectForm {
    pub editor: ProjectEditor,
    pub context: ViewContext,
    pub focus: FormField,
    /// Saves sent for this record and not yet answered. Overlapping saves are
    /// not ordered; the last response to arrive wins.
    pub saves_in_flight: usize,
    /// Container key the view is bound to.
    pub container: String,
}

impl ProjectForm {
    pub fn new(project: Project, context: ViewContext) -> Self {
        Self {
            container: container_id(&project.public_id),
            editor: ProjectEditor::new(project),
            context,
            focus: FormField::Name,
            saves_in_flight: 0,
        }
    }

    pub fn public_id(&self) -> &str {
        &self.editor.record().public_id
    }

    pub fn view(&self) -> ProjectViewModel {
        self.editor.view(&self.context)
    }
}

pub struct App {
    pub screen: Screen,
    pub connection: ConnectionContext,
    pub root: Option<RootResource>,

    /// `None` until the first page arrives.
    pub projects: Option<Vec<Project>>,
    pub page: usize,
    pub total: Option<u64>,
    pub has_next: bool,
    pub projects_state: TableState,

    pub form: Option<ProjectForm>,
    pub input_mode: InputMode,
    pub input: LineInput,

    pub board: MessageBoard,
    /// Requests sent to the runtime that have not reported back.
    pub pending: usize,
    pub spinner_frame: u8,
    pub theme: Theme,
    pub should_quit: bool,
}

impl App {
    pub fn new(connection: ConnectionContext) -> Self {
        Self {
            screen: Screen::Projects,
            connection,
            root: None,
            projects: None,
            page: 1,
            total: None,
            has_next: false,
            projects_state: TableState::default(),
            form: None,
            input_mode: InputMode::Normal,
            input: LineInput::default(),
            board: MessageBoard::new(),
            pending: 0,
            spinner_frame: 0,
            theme: Theme::default(),
            should_quit: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    fn request_finished(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }

    /// Apply an action. Returns a request for the runtime to execute, if the
    /// action produced one.
    pub fn update(&mut self, action: Action) -> Option<Action> {
        match action {
            Action::Quit => {
                self.should_quit = true;
                None
            }
            Action::Tick => {
                if self.is_loading() {
                    self.spinner_frame = self.spinner_frame.wrapping_add(1);
                }
                None
            }
            Action::Input(key) => {
                let follow_up = self.handle_input(key)?;
                self.update(follow_up)
            }
            Action::Resize(..) => None,

            Action::SaveProject(request) => {
                let form = self.form.as_mut()?;
                if form.public_id() != request.public_id {
                    return None;
                }
                form.saves_in_flight += 1;
                self.board.info(format!("Saving {}...", form.editor.preview().name));
                self.pending += 1;
                Some(Action::SaveProject(request))
            }
            request if request.is_request() => {
                self.pending += 1;
                Some(request)
            }

            Action::RootLoaded(result) => {
                self.request_finished();
                match result {
                    Ok(root) => self.root = Some(root),
                    Err(e) => self.board.error(e.message()),
                }
                None
            }
            Action::ProjectsLoaded { page, result } => {
                self.request_finished();
                match result {
                    Ok(projects) => self.show_page(page, projects),
                    Err(e) => self.board.error(e.message()),
                }
                None
            }
            Action::ProjectLoaded(result) => {
                self.request_finished();
                match result {
                    Ok((project, context)) => self.open_form(project, context),
                    Err(e) => self.board.error(e.message()),
                }
                None
            }
            Action::ProjectSaved { public_id, outcome } => {
                self.request_finished();
                match self.form.as_mut() {
                    Some(form) if form.public_id() == public_id => {
                        form.saves_in_flight = form.saves_in_flight.saturating_sub(1);
                        // Failures are already on the board.
                        let _ = form.editor.apply_outcome(outcome, &mut self.board);
                        let record = form.editor.record().clone();
                        self.replace_listed(record);
                    }
                    _ => {
                        let name = outcome.saved.as_ref().map(|p| p.name.clone());
                        if let Some(saved) = outcome.saved {
                            self.replace_listed(saved);
                        }
                        match outcome.error {
                            Some(e) => self.board.error(ViewError::save(e).message()),
                            None => self
                                .board
                                .success(format!("Saved {}", name.unwrap_or(public_id))),
                        }
                    }
                }
                None
            }
            _ => None,
        }
    }

    fn show_page(&mut self, page: usize, projects: inventory_client::Page<Project>) {
        self.page = page;
        self.total = projects.count;
        self.has_next = projects.has_next();
        if projects.results.is_empty() {
            self.projects_state.select(None);
            if page > 1 {
                self.board.info(format!("No projects found on page {page}."));
            }
        } else {
            self.projects_state.select(Some(0));
        }
        tracing::debug!(page, rows = projects.results.len(), "Project page loaded");
        self.projects = Some(projects.results);
    }

    fn open_form(&mut self, project: Project, context: ViewContext) {
        let form = ProjectForm::new(project, context);
        tracing::debug!(container = %form.container, "Opened project form");
        self.form = Some(form);
        self.screen = Screen::ProjectForm;
        self.input_mode = InputMode::Normal;
        self.board.clear();
    }

    /// Keep the list row of a saved project in step with the server copy.
    fn replace_listed(&mut self, project: Project) {
        if let Some(row) = self
            .projects
            .iter_mut()
            .flatten()
            .find(|p| p.public_id == project.public_id)
        {
            *row = project;
        }
    }

    pub fn selected_project(&self) -> Option<&Project> {
        let index = self.projects_state.selected()?;
        self.projects.as_ref()?.get(index)
    }
}
