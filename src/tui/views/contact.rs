//! Contact form screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::relay::{ContactField, SendStatus};
use crate::tui::{AppState, Theme};

/// Render the contact form.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Min(5),    // Message
            Constraint::Length(2), // Send status
        ])
        .split(area);

    render_field(
        f,
        chunks[0],
        state,
        "Name",
        &state.contact_form.name,
        ContactField::Name,
    );
    render_field(
        f,
        chunks[1],
        state,
        "Email",
        &state.contact_form.email,
        ContactField::Email,
    );
    render_field(
        f,
        chunks[2],
        state,
        "Message",
        &state.contact_form.message,
        ContactField::Message,
    );

    let status_line = send_status_line(state, theme);
    let status = Paragraph::new(status_line)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(theme.background));
    f.render_widget(status, chunks[3]);
}

fn render_field(
    f: &mut Frame,
    area: Rect,
    state: &AppState,
    label: &str,
    value: &str,
    field: ContactField,
) {
    let theme = &state.theme;
    let editable = state.service_online && state.send_state.status != SendStatus::Sending;
    let active = editable && state.contact_form.active_field == field;

    let border_color = if !editable {
        theme.inactive
    } else if active {
        theme.active
    } else {
        theme.primary
    };

    let mut text = value.to_string();
    if active {
        text.push('_');
    }

    let style = if editable {
        Style::default().fg(theme.text)
    } else {
        Style::default().fg(theme.text_muted)
    };

    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .style(style.bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {label} "))
                .style(Style::default().fg(border_color).bg(theme.background)),
        );
    f.render_widget(widget, area);
}

fn send_status_line(state: &AppState, theme: &Theme) -> Line<'static> {
    if !state.service_online {
        return Line::from(Span::styled(
            "Contact service is offline. Please reach out via the links below.",
            Style::default().fg(theme.error),
        ));
    }
    match state.send_state.status {
        SendStatus::Sending => Line::from(Span::styled(
            "Sending...",
            Style::default()
                .fg(theme.warning)
                .add_modifier(Modifier::SLOW_BLINK),
        )),
        SendStatus::Sent => Line::from(Span::styled(
            "Message sent. Thanks for reaching out!",
            Style::default().fg(theme.success),
        )),
        SendStatus::Idle | SendStatus::Failed => Line::from(vec![
            Span::styled("Press ", Style::default().fg(theme.text_muted)),
            Span::styled("(A)", Style::default().fg(theme.accent)),
            Span::styled(" to Send  ", Style::default().fg(theme.text_muted)),
            Span::styled("Tab", Style::default().fg(theme.accent)),
            Span::styled(" next field", Style::default().fg(theme.text_muted)),
        ]),
    }
}
