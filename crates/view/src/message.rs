//! The single user-visible message slot.
//!
//! Invariants:
//! - At most one message is held; showing a new one replaces the old.

use serde::Serialize;

/// Severity of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "OK",
            Self::Warning => "WARN",
            Self::Error => "ERR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

/// Holds the message currently on display.
#[derive(Debug, Clone, Default)]
pub struct MessageBoard {
    current: Option<Message>,
}

impl MessageBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, text: impl Into<String>, level: MessageLevel) {
        let text = text.into();
        tracing::debug!(level = level.label(), text = %text, "Showing message");
        self.current = Some(Message { text, level });
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.show(text, MessageLevel::Info);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.show(text, MessageLevel::Success);
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.show(text, MessageLevel::Warning);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.show(text, MessageLevel::Error);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Message> {
        self.current.as_ref()
    }

    /// Text of the current message, if any.
    pub fn text(&self) -> Option<&str> {
        self.current.as_ref().map(|m| m.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_replaces_old() {
        let mut board = MessageBoard::new();
        board.info("Loading");
        board.error("Conflict");
        assert_eq!(
            board.current(),
            Some(&Message {
                text: "Conflict".to_string(),
                level: MessageLevel::Error
            })
        );
    }

    #[test]
    fn test_clear() {
        let mut board = MessageBoard::new();
        board.success("Saved");
        board.clear();
        assert!(board.current().is_none());
        assert!(board.text().is_none());
    }
}
