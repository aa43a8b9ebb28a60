//! Renderers consume a [`ProjectViewModel`] and produce output.
//!
//! The view-model is the only input besides the current message, so the same
//! project can be shown as plain text, a CLI table or a terminal form.

use std::fmt::Write;

use crate::message::Message;
use crate::model::{ProjectViewModel, Widget};

/// A way of presenting a project view.
pub trait ProjectRenderer {
    type Output;

    fn render(&self, view: &ProjectViewModel, message: Option<&Message>) -> Self::Output;
}

/// Plain `Label: value` lines, with select options listed under their field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    /// List every option of a select, marking the selected one.
    pub show_options: bool,
    /// Append help text in parentheses.
    pub show_help: bool,
}

impl TextRenderer {
    pub fn detailed() -> Self {
        Self {
            show_options: true,
            show_help: true,
        }
    }
}

impl ProjectRenderer for TextRenderer {
    type Output = String;

    fn render(&self, view: &ProjectViewModel, message: Option<&Message>) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "[{}]", view.container);

        let width = view
            .fields
            .iter()
            .map(|f| f.label.chars().count())
            .max()
            .unwrap_or(0);

        for field in &view.fields {
            let _ = write!(out, "{:<width$}  {}", field.label, field.display_value());
            if self.show_help && !field.help_text.is_empty() {
                let _ = write!(out, "  ({})", field.help_text);
            }
            out.push('\n');

            if self.show_options
                && let Widget::Select { options } = &field.widget
            {
                for option in options {
                    let marker = if option.selected { '*' } else { ' ' };
                    let _ = writeln!(out, "{:<width$}  {marker} {}", "", option.text);
                }
            }
        }

        if let Some(message) = message {
            let _ = writeln!(out, "{}: {}", message.level.label(), message.text);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageLevel;
    use crate::model::{FieldView, SelectOption};
    use serde_json::json;

    fn view() -> ProjectViewModel {
        ProjectViewModel {
            public_id: "P1".to_string(),
            container: "#P1".to_string(),
            fields: vec![
                FieldView {
                    field: "name".to_string(),
                    label: "Project Name".to_string(),
                    help_text: "Shown in lists".to_string(),
                    value: json!("Warehouse"),
                    widget: Widget::TextInput,
                },
                FieldView {
                    field: "public".to_string(),
                    label: "Public".to_string(),
                    help_text: String::new(),
                    value: json!(true),
                    widget: Widget::Select {
                        options: vec![
                            SelectOption {
                                value: json!(true),
                                text: "Yes".to_string(),
                                selected: true,
                            },
                            SelectOption {
                                value: json!(false),
                                text: "No".to_string(),
                                selected: false,
                            },
                        ],
                    },
                },
            ],
        }
    }

    #[test]
    fn test_compact_render() {
        let out = TextRenderer::default().render(&view(), None);
        assert_eq!(out, "[#P1]\nProject Name  Warehouse\nPublic        Yes\n");
    }

    #[test]
    fn test_detailed_render_lists_options_and_message() {
        let message = Message {
            text: "Conflict".to_string(),
            level: MessageLevel::Error,
        };
        let out = TextRenderer::detailed().render(&view(), Some(&message));
        assert!(out.contains("Project Name  Warehouse  (Shown in lists)"));
        assert!(out.contains("* Yes"));
        assert!(out.contains("  No"));
        assert!(out.ends_with("ERR: Conflict\n"));
    }
}
