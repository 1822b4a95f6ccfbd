//! About screen: bio, skill table, and certifications.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::constants::{OWNER_NAME, OWNER_ROLE};
use crate::models::{CERTIFICATIONS, SKILLS};
use crate::tui::AppState;

const BIO: &str = "Hi! I build games and the interfaces around them. \
I care about tight feedback loops, readable pixels, and tools that stay \
out of the way.";

/// Render the about screen.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(6),
            Constraint::Length(CERTIFICATIONS.len() as u16 + 3),
        ])
        .split(area);

    let bio = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                OWNER_NAME,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {OWNER_ROLE}"),
                Style::default().fg(theme.text_secondary),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(BIO, Style::default().fg(theme.text))),
    ])
    .wrap(Wrap { trim: true })
    .style(Style::default().bg(theme.background));
    f.render_widget(bio, chunks[0]);

    let skill_lines: Vec<Line> = SKILLS
        .iter()
        .map(|skill| {
            Line::from(vec![
                Span::styled(skill.kind.glyph(), Style::default().fg(theme.accent)),
                Span::raw(" "),
                Span::styled(skill.name, Style::default().fg(theme.text)),
            ])
        })
        .collect();
    let skills = Paragraph::new(skill_lines)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Skills ")
                .style(Style::default().fg(theme.primary).bg(theme.background)),
        );
    f.render_widget(skills, chunks[1]);

    let cert_lines: Vec<Line> = CERTIFICATIONS
        .iter()
        .map(|cert| {
            Line::from(vec![
                Span::styled(cert.name, Style::default().fg(theme.text)),
                Span::styled(
                    format!(" ({})", cert.year),
                    Style::default().fg(theme.text_secondary),
                ),
                Span::raw("  "),
                Span::styled(cert.link, Style::default().fg(theme.text_muted)),
            ])
        })
        .collect();
    let certs = Paragraph::new(cert_lines)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Certifications ")
                .style(Style::default().fg(theme.primary).bg(theme.background)),
        );
    f.render_widget(certs, chunks[2]);
}
