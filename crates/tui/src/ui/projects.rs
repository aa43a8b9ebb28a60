//! Project list screen rendering.

use inventory_client::Project;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::Modifier,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::ui::theme::{Theme, spinner_char};

/// Configuration for rendering the project list.
pub struct ProjectsRenderConfig<'a> {
    pub loading: bool,
    /// `None` until the first page arrives.
    pub projects: Option<&'a [Project]>,
    pub page: usize,
    /// Server-reported total, when known.
    pub total: Option<u64>,
    pub state: &'a mut TableState,
    pub theme: &'a Theme,
    pub spinner_frame: u8,
}

fn title(page: usize, total: Option<u64>) -> String {
    match total {
        Some(total) => format!("Projects (page {page}, {total} total)"),
        None => format!("Projects (page {page})"),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

pub fn render_projects(f: &mut Frame, area: Rect, config: ProjectsRenderConfig) {
    let ProjectsRenderConfig {
        loading,
        projects,
        page,
        total,
        state,
        theme,
        spinner_frame,
    } = config;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title(page, total))
        .border_style(theme.border())
        .title_style(theme.title());

    let projects = match projects {
        Some(p) if !p.is_empty() => p,
        Some(_) => {
            let empty = Paragraph::new(format!("No projects found on page {page}."))
                .block(block)
                .alignment(Alignment::Center);
            f.render_widget(empty, area);
            return;
        }
        None => {
            let text = if loading {
                format!("{} Loading projects...", spinner_char(spinner_frame))
            } else {
                "No projects loaded. Press 'r' to refresh.".to_string()
            };
            f.render_widget(
                Paragraph::new(text).block(block).alignment(Alignment::Center),
                area,
            );
            return;
        }
    };

    let header = Row::new(["ID", "Name", "Public", "Active"])
        .style(theme.text().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = projects
        .iter()
        .map(|project| {
            Row::new(vec![
                Cell::from(project.public_id.clone()),
                Cell::from(project.name.clone()),
                Cell::from(yes_no(project.public)),
                Cell::from(yes_no(project.active)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(18),
            Constraint::Min(20),
            Constraint::Length(8),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(theme.highlight())
    .highlight_symbol("> ");

    f.render_stateful_widget(table, area, state);
}
