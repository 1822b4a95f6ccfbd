//! Help overlay listing the console controls, accessible via '?'.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::Theme;

/// Help overlay widget.
pub struct HelpOverlay;

impl HelpOverlay {
    /// Render the overlay centered over `area`.
    pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = super::centered_rect(60, 70, area);
        f.render_widget(Clear, popup);

        let content = Self::help_content(theme);
        let widget = Paragraph::new(content)
            .alignment(Alignment::Left)
            .style(Style::default().fg(theme.text).bg(theme.surface))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Controls ")
                    .style(Style::default().fg(theme.primary).bg(theme.surface)),
            );
        f.render_widget(widget, popup);
    }

    fn help_content(theme: &Theme) -> Vec<Line<'static>> {
        let key = |k: &'static str| {
            Span::styled(
                format!("{k:<14}"),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
        };
        let desc = |d: &'static str| Span::styled(d, Style::default().fg(theme.text));
        let heading = |h: &'static str| {
            Line::from(Span::styled(
                h,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ))
        };

        vec![
            heading("D-pad"),
            Line::from(vec![key("Up"), desc("About")]),
            Line::from(vec![key("Left"), desc("Projects")]),
            Line::from(vec![key("Right"), desc("Contact")]),
            Line::from(vec![key("Down"), desc("Home")]),
            Line::from(""),
            heading("Buttons"),
            Line::from(vec![key("A"), desc("Confirm / open / send")]),
            Line::from(vec![key("B"), desc("Back")]),
            Line::from(vec![key("s (SELECT)"), desc("Toggle theme")]),
            Line::from(vec![key("Enter (START)"), desc("Say hello")]),
            Line::from(""),
            heading("Projects"),
            Line::from(vec![key("j / Tab"), desc("Highlight next")]),
            Line::from(vec![key("k / Shift+Tab"), desc("Highlight previous")]),
            Line::from(vec![key("1-9"), desc("Open project by number")]),
            Line::from(""),
            heading("System"),
            Line::from(vec![key("?"), desc("Toggle this overlay")]),
            Line::from(vec![key("q / Ctrl+q"), desc("Quit")]),
            Line::from(""),
            Line::from(Span::styled(
                "Old-school cheat codes may still work.",
                Style::default().fg(theme.text_muted),
            )),
        ]
    }
}
