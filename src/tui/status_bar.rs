//! Status bar widget for toast messages and contextual key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::nav::View;

use super::{AppState, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with the active toast and contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines: Vec<Line> = Vec::new();

        // First line: toast message, or per-view hints
        if state.status_message.is_empty() {
            lines.push(Self::hints_line(state.nav.current, theme));
        } else {
            let color = state.status_color.unwrap_or(theme.text);
            lines.push(Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(color),
            )));
        }

        // Second line: the fixed console controls
        lines.push(Line::from(vec![
            Span::styled("D-pad", Style::default().fg(theme.accent)),
            Span::styled(" move  ", Style::default().fg(theme.text_muted)),
            Span::styled("A", Style::default().fg(theme.accent)),
            Span::styled(" confirm  ", Style::default().fg(theme.text_muted)),
            Span::styled("B", Style::default().fg(theme.accent)),
            Span::styled(" back  ", Style::default().fg(theme.text_muted)),
            Span::styled("s", Style::default().fg(theme.accent)),
            Span::styled(" theme  ", Style::default().fg(theme.text_muted)),
            Span::styled("?", Style::default().fg(theme.accent)),
            Span::styled(" help  ", Style::default().fg(theme.text_muted)),
            Span::styled("q", Style::default().fg(theme.accent)),
            Span::styled(" quit", Style::default().fg(theme.text_muted)),
        ]));

        let status = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().fg(theme.primary).bg(theme.background)),
            );
        f.render_widget(status, area);
    }

    /// Hints shown when no toast is active.
    fn hints_line(view: View, theme: &Theme) -> Line<'static> {
        let hint = match view {
            View::Landing => "Up about  Left projects  Right contact",
            View::About => "Down home  B back",
            View::Projects => "j/k move  A open  B back",
            View::ProjectDetail => "B back to projects",
            View::Contact => "Type to fill the form, Enter to send",
        };
        Line::from(Span::styled(
            hint,
            Style::default()
                .fg(theme.text_muted)
                .add_modifier(Modifier::ITALIC),
        ))
    }
}
