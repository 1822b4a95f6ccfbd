//! Single-project detail screen.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::AppState;

/// Render the detail screen for the selected project.
///
/// Falls back to a placeholder when the stored id does not resolve,
/// which can only happen if the detail view is reached without going
/// through the catalog.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let Some(project) = state.selected_project() else {
        let empty = Paragraph::new("Project not found.")
            .style(Style::default().fg(theme.text_muted).bg(theme.background))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            project.name.clone(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            project.description.clone(),
            Style::default().fg(theme.text),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Built with: ", Style::default().fg(theme.accent)),
            Span::styled(
                project.technologies.join(", "),
                Style::default().fg(theme.text_secondary),
            ),
        ]),
    ];

    if let Some(live) = &project.live_link {
        lines.push(Line::from(vec![
            Span::styled("Live: ", Style::default().fg(theme.accent)),
            Span::styled(live.clone(), Style::default().fg(theme.text_muted)),
        ]));
    }
    if let Some(repo) = &project.repo_link {
        lines.push(Line::from(vec![
            Span::styled("Source: ", Style::default().fg(theme.accent)),
            Span::styled(repo.clone(), Style::default().fg(theme.text_muted)),
        ]));
    }

    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", project.name))
                .style(Style::default().fg(theme.primary).bg(theme.background)),
        );
    f.render_widget(detail, area);
}
