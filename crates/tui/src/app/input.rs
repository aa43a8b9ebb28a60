//! Key handling.
//!
//! Keys map to state changes on `App` and, where network work is needed, to a
//! request action that `update` passes on to the runtime.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use inventory_view::choice_flag;

use super::{App, FormField, InputMode, LineInput, Screen};
use crate::action::Action;

impl App {
    /// Map a key press to state changes and an optional follow-up action.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        if self.input_mode != InputMode::Normal {
            self.handle_editing_input(key);
            return None;
        }

        match self.screen {
            Screen::Projects => self.handle_projects_input(key),
            Screen::ProjectForm => self.handle_form_input(key),
        }
    }

    fn handle_projects_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(-1);
                None
            }
            KeyCode::Enter => self.selected_project().map(|p| Action::OpenProject {
                public_id: p.public_id.clone(),
            }),
            KeyCode::Char('n') | KeyCode::PageDown => {
                if self.has_next {
                    Some(Action::LoadProjects {
                        page: self.page + 1,
                    })
                } else {
                    self.board.info("Already on the last page");
                    None
                }
            }
            KeyCode::Char('p') | KeyCode::PageUp => {
                if self.page > 1 {
                    Some(Action::LoadProjects {
                        page: self.page - 1,
                    })
                } else {
                    self.board.info("Already on the first page");
                    None
                }
            }
            KeyCode::Char('r') => Some(Action::LoadProjects { page: self.page }),
            KeyCode::Char('g') => Some(Action::LoadRoot),
            _ => None,
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.projects.as_ref().map_or(0, Vec::len);
        if len == 0 {
            return;
        }
        let current = self.projects_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.projects_state.select(Some(next));
    }

    fn handle_form_input(&mut self, key: KeyEvent) -> Option<Action> {
        let form = self.form.as_mut()?;

        match key.code {
            // Plain `s` and Ctrl+S both save.
            KeyCode::Char('s') => self.request_save(),
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Esc => {
                if form.editor.is_dirty() {
                    self.board.warning("Unsaved changes discarded");
                } else {
                    self.board.clear();
                }
                self.form = None;
                self.screen = Screen::Projects;
                None
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
                form.focus = form.focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
                form.focus = form.focus.prev();
                None
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                let focus = form.focus;
                match focus {
                    FormField::Name => {
                        self.input = LineInput::with_value(form.editor.preview().name);
                        self.input_mode = InputMode::EditingName;
                    }
                    FormField::Image => {
                        let current = form
                            .editor
                            .pending_image()
                            .map(|p| p.display().to_string())
                            .unwrap_or_default();
                        self.input = LineInput::with_value(current);
                        self.input_mode = InputMode::EditingImagePath;
                    }
                    _ => self.cycle_option(1),
                }
                None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.cycle_option(-1);
                None
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                self.cycle_option(1);
                None
            }
            KeyCode::Char('d') => {
                form.editor.discard();
                self.board.info("Changes discarded");
                None
            }
            KeyCode::Char('r') => Some(Action::OpenProject {
                public_id: form.public_id().to_string(),
            }),
            _ => None,
        }
    }

    fn request_save(&mut self) -> Option<Action> {
        let form = self.form.as_ref()?;
        if !form.editor.is_dirty() {
            self.board.info("No changes to save");
            return None;
        }
        Some(Action::SaveProject(form.editor.save_request()))
    }

    /// Step the focused select by `delta` options, wrapping at either end.
    fn cycle_option(&mut self, delta: isize) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        let focus = form.focus;
        if !matches!(
            focus,
            FormField::InventoryType | FormField::Public | FormField::Active
        ) {
            return;
        }

        let view = form.view();
        let options = view
            .field(focus.field_name())
            .map(|f| f.options().to_vec())
            .unwrap_or_default();

        if options.is_empty() {
            let preview = form.editor.preview();
            match focus {
                FormField::Public => form.editor.set_public(!preview.public),
                FormField::Active => form.editor.set_active(!preview.active),
                _ => self.board.warning("No inventory types available"),
            }
            return;
        }

        let len = options.len() as isize;
        let next = match options.iter().position(|o| o.selected) {
            Some(i) => (i as isize + delta).rem_euclid(len),
            None if delta > 0 => 0,
            None => len - 1,
        };
        let value = &options[next as usize].value;

        match focus {
            FormField::InventoryType => {
                if let Some(id) = value.as_str() {
                    form.editor.set_inventory_type(id, &form.context);
                }
            }
            FormField::Public => {
                if let Some(flag) = choice_flag(value) {
                    form.editor.set_public(flag);
                }
            }
            FormField::Active => {
                if let Some(flag) = choice_flag(value) {
                    form.editor.set_active(flag);
                }
            }
            _ => {}
        }
    }

    fn handle_editing_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.input = LineInput::default();
            }
            KeyCode::Enter => {
                let mode = std::mem::take(&mut self.input_mode);
                let value = std::mem::take(&mut self.input).value().to_string();
                self.commit_input(mode, value);
            }
            _ => self.input.handle_key(key),
        }
    }

    fn commit_input(&mut self, mode: InputMode, value: String) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        match mode {
            InputMode::EditingName => {
                if value != form.editor.preview().name {
                    form.editor.set_name(value);
                }
            }
            InputMode::EditingImagePath => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return;
                }
                let path = PathBuf::from(trimmed);
                if !path.is_file() {
                    self.board
                        .error(format!("Image file not found: {}", path.display()));
                    return;
                }
                form.editor.choose_image(path);
                if let Some(name) = form.editor.pending_filename() {
                    self.board.info(format!("Image selected: {name}"));
                }
            }
            InputMode::Normal => {}
        }
    }
}
