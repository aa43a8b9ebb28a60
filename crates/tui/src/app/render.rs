//! Frame layout: header, active screen, footer.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{App, FOOTER_HEIGHT, HEADER_HEIGHT, InputMode, Screen};
use crate::ui::project_form::{EditPrompt, ProjectFormRenderConfig, render_project_form};
use crate::ui::projects::{ProjectsRenderConfig, render_projects};
use crate::ui::theme::spinner_char;

const PROJECTS_HINTS: &str =
    "j/k move  Enter open  n/p page  r refresh  g api root  q quit";
const FORM_HINTS: &str =
    "Tab field  Enter edit  h/l choose  s save  d discard  r reload  Esc back  q quit";
const EDIT_HINTS: &str = "Enter apply  Esc cancel  Ctrl+U clear";

impl App {
    pub fn render(&mut self, f: &mut Frame) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(f.area());

        self.render_header(f, header);
        match self.screen {
            Screen::Projects => self.render_projects_screen(f, body),
            Screen::ProjectForm => self.render_form_screen(f, body),
        }
        self.render_footer(f, footer);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let mut spans = vec![
            Span::styled("Inventory", theme.title()),
            Span::styled(format!("  {}", self.connection.base_url), theme.text()),
            Span::styled(format!("  [{}]", self.connection.auth_mode), theme.text_dim()),
        ];
        if let Some(profile) = &self.connection.profile_name {
            spans.push(Span::styled(format!("  profile: {profile}"), theme.text_dim()));
        }
        if let Some(version) = self.root.as_ref().and_then(|r| r.version()) {
            spans.push(Span::styled(format!("  API {version}"), theme.text_dim()));
        }
        if self.is_loading() {
            spans.push(Span::styled(
                format!("  {}", spinner_char(self.spinner_frame)),
                theme.text(),
            ));
        }

        let header = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border()),
        );
        f.render_widget(header, area);
    }

    fn render_projects_screen(&mut self, f: &mut Frame, area: Rect) {
        render_projects(
            f,
            area,
            ProjectsRenderConfig {
                loading: self.is_loading(),
                projects: self.projects.as_deref(),
                page: self.page,
                total: self.total,
                state: &mut self.projects_state,
                theme: &self.theme,
                spinner_frame: self.spinner_frame,
            },
        );
    }

    fn render_form_screen(&self, f: &mut Frame, area: Rect) {
        let Some(form) = &self.form else {
            return;
        };
        let view = form.view();
        let prompt = match self.input_mode {
            InputMode::Normal => None,
            InputMode::EditingName => Some("Name"),
            InputMode::EditingImagePath => Some("Image file path"),
        }
        .map(|label| EditPrompt {
            label,
            value: self.input.value(),
            cursor: self.input.cursor(),
        });

        render_project_form(
            f,
            area,
            ProjectFormRenderConfig {
                view: &view,
                focus: form.focus.field_name(),
                prompt,
                saving: form.saves_in_flight > 0,
                dirty: form.editor.is_dirty(),
                message: self.board.current(),
                theme: &self.theme,
                spinner_frame: self.spinner_frame,
            },
        );
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        // The form shows its own message inline.
        let message_line = match (self.screen, self.board.current()) {
            (Screen::Projects, Some(message)) => Line::from(Span::styled(
                format!("{}: {}", message.level.label(), message.text),
                theme.message(message.level),
            )),
            _ => Line::default(),
        };
        let hints = match (self.screen, self.input_mode) {
            (_, InputMode::EditingName | InputMode::EditingImagePath) => EDIT_HINTS,
            (Screen::Projects, _) => PROJECTS_HINTS,
            (Screen::ProjectForm, _) => FORM_HINTS,
        };

        let footer = Paragraph::new(vec![
            message_line,
            Line::from(Span::styled(hints, theme.text_dim())),
        ]);
        f.render_widget(footer, area);
    }
}
