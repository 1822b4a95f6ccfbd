//! Project catalog screen with a movable highlight.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::tui::AppState;

/// Render the project list.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let items: Vec<ListItem> = state
        .projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("{}. ", i + 1),
                        Style::default().fg(theme.accent),
                    ),
                    Span::styled(
                        project.name.clone(),
                        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("   {}", project.short_description),
                    Style::default().fg(theme.text_secondary),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Projects ")
                .style(Style::default().fg(theme.primary).bg(theme.background)),
        )
        .highlight_style(
            Style::default()
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.project_highlight));
    f.render_stateful_widget(list, area, &mut list_state);
}
