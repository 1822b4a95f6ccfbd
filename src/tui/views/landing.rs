//! Landing screen: owner name, typed-out tagline, and the blinking clock.

use std::time::{Duration, Instant};

use chrono::{DateTime, TimeZone};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::constants::{OWNER_NAME, OWNER_ROLE};
use crate::tui::AppState;

/// Reveals a fixed string one character at a time.
///
/// The reveal runs once per process: after it completes, subsequent
/// visits show the full text immediately.
#[derive(Debug)]
pub struct TypewriterState {
    chars: Vec<char>,
    visible: usize,
    interval: Duration,
    last_tick: Instant,
    finished: bool,
}

impl TypewriterState {
    /// Creates a typewriter over `text`, revealing one character every
    /// `interval_ms` milliseconds.
    #[must_use]
    pub fn new(text: &str, interval_ms: u64) -> Self {
        Self {
            chars: text.chars().collect(),
            visible: 0,
            interval: Duration::from_millis(interval_ms),
            last_tick: Instant::now(),
            finished: false,
        }
    }

    /// Advances the reveal according to elapsed wall time.
    ///
    /// Returns true if any new characters became visible.
    pub fn tick(&mut self) -> bool {
        if self.finished {
            return false;
        }
        let mut advanced = false;
        while self.last_tick.elapsed() >= self.interval && self.visible < self.chars.len() {
            self.visible += 1;
            self.last_tick += self.interval;
            advanced = true;
        }
        if self.visible == self.chars.len() {
            self.finished = true;
        }
        advanced
    }

    /// Returns the currently visible prefix.
    #[must_use]
    pub fn visible_text(&self) -> String {
        self.chars[..self.visible].iter().collect()
    }

    /// True once the full text has been revealed.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Formats the clock as `dd/mm/yy HH:MM` with the colon visible only
/// on even seconds.
#[must_use]
pub fn clock_text<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    use chrono::Timelike;
    let separator = if now.second() % 2 == 0 { ":" } else { " " };
    format!(
        "{} {}{}{}",
        now.format("%d/%m/%y"),
        now.format("%H"),
        separator,
        now.format("%M")
    )
}

/// The full greeting the typewriter reveals: name line, then role line.
#[must_use]
pub fn greeting_text() -> String {
    format!("Hi! I'm {OWNER_NAME}.\n{OWNER_ROLE}")
}

/// Render the landing screen.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Clock
            Constraint::Min(1),
            Constraint::Length(1), // Greeting line
            Constraint::Length(1), // Role line
            Constraint::Min(1),
            Constraint::Length(1), // Hint
        ])
        .split(area);

    let clock = Paragraph::new(Line::from(Span::styled(
        clock_text(&chrono::Local::now()),
        Style::default().fg(theme.text_muted),
    )))
    .alignment(Alignment::Left);
    f.render_widget(clock, chunks[0]);

    let mut text = state.typewriter.visible_text();
    if !state.typewriter.is_finished() {
        text.push('▌');
    }
    let mut parts = text.splitn(2, '\n');
    let line1 = parts.next().unwrap_or("").to_string();
    let line2 = parts.next().map(ToString::to_string);

    let name = Paragraph::new(Line::from(Span::styled(
        line1,
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(name, chunks[2]);

    if let Some(line2) = line2 {
        let role = Paragraph::new(Line::from(Span::styled(
            line2,
            Style::default().fg(theme.text_secondary),
        )))
        .alignment(Alignment::Center);
        f.render_widget(role, chunks[3]);
    }

    let hint = Paragraph::new(Line::from(Span::styled(
        "Use D-Pad to navigate",
        Style::default().fg(theme.text_muted),
    )))
    .alignment(Alignment::Center);
    f.render_widget(hint, chunks[5]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_typewriter_starts_empty() {
        let tw = TypewriterState::new(&greeting_text(), 50);
        assert_eq!(tw.visible_text(), "");
        assert!(!tw.is_finished());
    }

    #[test]
    fn test_typewriter_reveals_in_order() {
        let mut tw = TypewriterState::new("abc", 1);
        std::thread::sleep(Duration::from_millis(10));
        tw.tick();
        assert_eq!(tw.visible_text(), "abc");
        assert!(tw.is_finished());
    }

    #[test]
    fn test_typewriter_tick_is_monotonic() {
        let mut tw = TypewriterState::new("hello", 1000);
        // Nothing elapsed yet
        assert!(!tw.tick());
        assert_eq!(tw.visible_text(), "");
    }

    #[test]
    fn test_typewriter_handles_multibyte_text() {
        let mut tw = TypewriterState::new("Kishore\u{a0}M", 1);
        std::thread::sleep(Duration::from_millis(20));
        tw.tick();
        assert_eq!(tw.visible_text(), "Kishore\u{a0}M");
    }

    #[test]
    fn test_greeting_has_two_lines() {
        let greeting = greeting_text();
        let (line1, line2) = greeting.split_once('\n').expect("two lines");
        assert_eq!(line1, "Hi! I'm Kishore\u{a0}M.");
        assert_eq!(line2, OWNER_ROLE);
    }

    #[test]
    fn test_clock_colon_on_even_seconds() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 9, 41, 6).unwrap();
        assert_eq!(clock_text(&now), "05/03/24 09:41");
    }

    #[test]
    fn test_clock_blank_on_odd_seconds() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 9, 41, 7).unwrap();
        assert_eq!(clock_text(&now), "05/03/24 09 41");
    }
}
