//! Single-line text input over `tui-input`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_input::{Input, InputRequest};

#[derive(Debug, Clone, Default)]
pub struct LineInput {
    input: Input,
}

impl LineInput {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            input: Input::new(value.into()),
        }
    }

    /// Apply an editing key. Keys with no editing meaning are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            // Ctrl+U clears the line
            if key.code == KeyCode::Char('u') {
                self.input.handle(InputRequest::DeleteLine);
            }
            return;
        }

        let request = match key.code {
            KeyCode::Char(c) => Some(InputRequest::InsertChar(c)),
            KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
            KeyCode::Delete => Some(InputRequest::DeleteNextChar),
            KeyCode::Left => Some(InputRequest::GoToPrevChar),
            KeyCode::Right => Some(InputRequest::GoToNextChar),
            KeyCode::Home => Some(InputRequest::GoToStart),
            KeyCode::End => Some(InputRequest::GoToEnd),
            _ => None,
        };

        if let Some(request) = request {
            self.input.handle(request);
        }
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Cursor position as a character index.
    pub fn cursor(&self) -> usize {
        self.input.cursor()
    }
}
