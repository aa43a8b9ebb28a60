//! Colors and style builders shared by every screen.

use ratatui::style::{Color, Modifier, Style};

use inventory_view::MessageLevel;

/// Spinner characters for the loading indicator.
pub const SPINNER_CHARS: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Spinner character for an animation frame.
pub fn spinner_char(frame: u8) -> char {
    SPINNER_CHARS[frame as usize % SPINNER_CHARS.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub text: Color,
    pub text_dim: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight_bg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            accent: Color::Cyan,
            border: Color::Gray,
            border_focused: Color::Cyan,
            highlight_bg: Color::DarkGray,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Blue,
        }
    }
}

impl Theme {
    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the message slot at `level`.
    pub fn message(&self, level: MessageLevel) -> Style {
        let color = match level {
            MessageLevel::Info => self.info,
            MessageLevel::Success => self.success,
            MessageLevel::Warning => self.warning,
            MessageLevel::Error => self.error,
        };
        Style::default().fg(color)
    }
}
