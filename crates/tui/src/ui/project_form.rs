//! Project form rendering.
//!
//! [`FormRenderer`] turns a project view-model into styled lines. The screen
//! function wraps those lines in a bordered block and draws the edit prompt
//! when a text field is being edited.

use inventory_view::{FieldView, Message, ProjectRenderer, ProjectViewModel, Widget};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::theme::{Theme, spinner_char};

/// Renders a project view as terminal lines with one field focused.
pub struct FormRenderer<'a> {
    pub theme: &'a Theme,
    /// Field name of the focused row.
    pub focus: Option<&'a str>,
}

impl FormRenderer<'_> {
    fn value_spans(&self, field: &FieldView) -> Vec<Span<'static>> {
        let theme = self.theme;
        match &field.widget {
            Widget::Select { options } if !options.is_empty() => {
                let mut spans = Vec::with_capacity(options.len() * 2);
                for (i, option) in options.iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::raw("  "));
                    }
                    let marker = if option.selected { "[x]" } else { "[ ]" };
                    let style = if option.selected {
                        theme.text().add_modifier(Modifier::BOLD)
                    } else {
                        theme.text_dim()
                    };
                    spans.push(Span::styled(format!("{marker} {}", option.text), style));
                }
                spans
            }
            Widget::Select { .. } => vec![Span::styled("(no options)", theme.text_dim())],
            Widget::File { .. } => {
                let shown = field.display_value();
                if shown.is_empty() {
                    vec![Span::styled("(none)", theme.text_dim())]
                } else {
                    vec![Span::styled(shown, theme.text())]
                }
            }
            Widget::ReadOnly => vec![Span::styled(field.display_value(), theme.text_dim())],
            Widget::TextInput => vec![Span::styled(field.display_value(), theme.text())],
        }
    }
}

impl ProjectRenderer for FormRenderer<'_> {
    type Output = Vec<Line<'static>>;

    fn render(&self, view: &ProjectViewModel, message: Option<&Message>) -> Self::Output {
        let width = view
            .fields
            .iter()
            .map(|f| f.label.chars().count())
            .max()
            .unwrap_or(0);

        let mut lines = Vec::with_capacity(view.fields.len() + 2);
        for field in &view.fields {
            let focused = self.focus == Some(field.field.as_str());
            let (marker, label_style) = if focused {
                ("> ", self.theme.title())
            } else {
                ("  ", self.theme.text())
            };

            let mut spans = vec![
                Span::styled(marker, label_style),
                Span::styled(format!("{:<width$}  ", field.label), label_style),
            ];
            spans.extend(self.value_spans(field));
            let line = Line::from(spans);
            lines.push(if focused {
                line.style(self.theme.highlight())
            } else {
                line
            });

            if focused && !field.help_text.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {:<width$}  {}", "", field.help_text),
                    self.theme.text_dim(),
                )));
            }
        }

        if let Some(message) = message {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("{}: {}", message.level.label(), message.text),
                self.theme.message(message.level),
            )));
        }
        lines
    }
}

/// A text prompt shown under the form while a field is edited.
pub struct EditPrompt<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub cursor: usize,
}

/// Configuration for rendering the project form.
pub struct ProjectFormRenderConfig<'a> {
    pub view: &'a ProjectViewModel,
    pub focus: &'a str,
    pub prompt: Option<EditPrompt<'a>>,
    pub saving: bool,
    pub dirty: bool,
    pub message: Option<&'a Message>,
    pub theme: &'a Theme,
    pub spinner_frame: u8,
}

pub fn render_project_form(f: &mut Frame, area: Rect, config: ProjectFormRenderConfig) {
    let ProjectFormRenderConfig {
        view,
        focus,
        prompt,
        saving,
        dirty,
        message,
        theme,
        spinner_frame,
    } = config;

    let mut title = format!("Project {}", view.container);
    if dirty {
        title.push_str(" (modified)");
    }
    if saving {
        title.push_str(&format!(" {} saving", spinner_char(spinner_frame)));
    }

    let (form_area, prompt_area) = match prompt {
        Some(_) => {
            let [form, prompt] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);
            (form, Some(prompt))
        }
        None => (area, None),
    };

    let renderer = FormRenderer {
        theme,
        focus: Some(focus),
    };
    let lines = renderer.render(view, message);
    let form = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(theme.border())
                .title_style(theme.title()),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(form, form_area);

    if let (Some(prompt), Some(prompt_area)) = (prompt, prompt_area) {
        let input = Paragraph::new(prompt.value.to_string()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} (Enter to apply, Esc to cancel)", prompt.label))
                .border_style(theme.border_focused()),
        );
        f.render_widget(input, prompt_area);
        let x = prompt_area.x + 1 + prompt.cursor as u16;
        f.set_cursor_position((x.min(prompt_area.right().saturating_sub(2)), prompt_area.y + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_view::{MessageLevel, SelectOption};
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
                    value: json!(false),
                    widget: Widget::Select {
                        options: vec![
                            SelectOption {
                                value: json!(true),
                                text: "Yes".to_string(),
                                selected: false,
                            },
                            SelectOption {
                                value: json!(false),
                                text: "No".to_string(),
                                selected: true,
                            },
                        ],
                    },
                },
            ],
        }
    }

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_focused_field_shows_marker_and_help() {
        let theme = Theme::default();
        let renderer = FormRenderer {
            theme: &theme,
            focus: Some("name"),
        };
        let lines = text(&renderer.render(&view(), None));
        assert_eq!(lines[0], "> Project Name  Warehouse");
        assert!(lines[1].contains("Shown in lists"));
        assert_eq!(lines[2], "  Public        [ ] Yes  [x] No");
    }

    #[test]
    fn test_message_is_appended() {
        let theme = Theme::default();
        let renderer = FormRenderer {
            theme: &theme,
            focus: None,
        };
        let message = Message {
            text: "Saved Warehouse".to_string(),
            level: MessageLevel::Success,
        };
        let lines = text(&renderer.render(&view(), Some(&message)));
        assert_eq!(lines.last().map(String::as_str), Some("OK: Saved Warehouse"));
    }

    #[test]
    fn test_select_without_options() {
        let theme = Theme::default();
        let renderer = FormRenderer {
            theme: &theme,
            focus: None,
        };
        let mut view = view();
        view.fields[1].widget = Widget::Select { options: vec![] };
        let lines = text(&renderer.render(&view, None));
        assert!(lines[1].ends_with("(no options)"));
    }
}
