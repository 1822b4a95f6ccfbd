//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui. The interface is drawn as a retro
//! handheld console: the D-pad moves between screens, A confirms, B
//! goes back.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

pub mod help_overlay;
pub mod status_bar;
pub mod theme;
pub mod views;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::constants::{APP_NAME, SOCIAL_LINKS};
use crate::input::{SequenceRecognizer, Symbol};
use crate::models::Project;
use crate::nav::{NavState, View};
use crate::relay::{ContactForm, SendResult, SendState};
use crate::shortcuts::{Action, ShortcutRegistry};

// Re-export TUI components
pub use help_overlay::HelpOverlay;
pub use status_bar::StatusBar;
pub use theme::Theme;
pub use views::TypewriterState;

/// How many loop ticks (~100ms each) a toast stays visible.
const TOAST_TICKS: u16 = 30;
/// Toast ticks while a send is in flight; replaced by the result.
const SENDING_TICKS: u16 = 600;
/// Confetti duration in loop ticks.
const CELEBRATION_TICKS: u8 = 40;

/// Central application state for the TUI.
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Active color theme
    pub theme: Theme,
    /// Current screen and project selection
    pub nav: NavState,
    /// Project catalog
    pub projects: Vec<Project>,
    /// Highlighted row in the projects list
    pub project_highlight: usize,
    /// Key binding registry
    pub shortcuts: ShortcutRegistry,
    /// Cheat-code recognizer, fed every key press
    pub recognizer: SequenceRecognizer,
    /// Landing tagline reveal
    pub typewriter: TypewriterState,
    /// Contact form fields
    pub contact_form: ContactForm,
    /// Background send tracking
    pub send_state: SendState,
    /// False once the relay reports a configuration problem
    pub service_online: bool,
    /// Active toast text (empty when none)
    pub status_message: String,
    /// Toast color override
    pub status_color: Option<Color>,
    /// Remaining toast lifetime in loop ticks
    status_ttl: u16,
    /// Remaining confetti frames
    pub celebration: Option<u8>,
    /// Whether the help overlay is open
    pub help_visible: bool,
    /// Set to exit the main loop
    pub should_quit: bool,
}

impl AppState {
    /// Creates the initial application state from configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let typewriter =
            TypewriterState::new(&views::landing::greeting_text(), config.ui.typing_interval_ms);
        Self {
            config,
            theme,
            nav: NavState::new(),
            projects: Project::catalog(),
            project_highlight: 0,
            shortcuts: ShortcutRegistry::new(),
            recognizer: SequenceRecognizer::konami(),
            typewriter,
            contact_form: ContactForm::new(),
            send_state: SendState::new(),
            service_online: true,
            status_message: String::new(),
            status_color: None,
            status_ttl: 0,
            celebration: None,
            help_visible: false,
            should_quit: false,
        }
    }

    /// Returns the project selected for the detail screen, if any.
    #[must_use]
    pub fn selected_project(&self) -> Option<&Project> {
        let id = self.nav.selected_project.as_deref()?;
        Project::find(&self.projects, id)
    }

    /// Shows a toast message for a few seconds.
    pub fn set_status(&mut self, message: impl Into<String>, color: Option<Color>) {
        self.status_message = message.into();
        self.status_color = color;
        self.status_ttl = TOAST_TICKS;
    }

    /// Flips between the dark and light palette and persists the choice.
    pub fn toggle_theme(&mut self) {
        let mode = self.theme.toggled_mode();
        self.config.ui.theme_mode = mode;
        self.theme = Theme::from_mode(mode);
        if let Err(e) = self.config.save() {
            let warning = self.theme.warning;
            self.set_status(format!("Theme changed but not saved: {e}"), Some(warning));
        }
    }

    /// Validates the form and, if it passes, hands the message to a
    /// background thread. Ignored while a send is already in flight.
    pub fn submit_contact(&mut self) {
        if !self.service_online {
            let error = self.theme.error;
            self.set_status("Contact service is offline.", Some(error));
            return;
        }
        if self.send_state.is_sending() {
            return;
        }
        match self.contact_form.validate() {
            Ok(message) => {
                let url = self.config.send_email_url();
                self.send_state.start_send(&url, message);
                let warning = self.theme.warning;
                self.set_status("Sending message...", Some(warning));
                self.status_ttl = SENDING_TICKS;
            }
            Err(e) => {
                let warning = self.theme.warning;
                self.set_status(e.to_string(), Some(warning));
            }
        }
    }

    /// Applies the outcome of a finished send.
    pub fn handle_send_result(&mut self, result: SendResult) {
        match result {
            SendResult::Delivered { message } => {
                self.contact_form.reset();
                self.service_online = true;
                let success = self.theme.success;
                self.set_status(message, Some(success));
            }
            SendResult::Rejected { report } | SendResult::TransportFailed { report } => {
                if report.service_offline {
                    self.service_online = false;
                }
                let error = self.theme.error;
                self.set_status(format!("{}: {}", report.title, report.detail), Some(error));
            }
        }
    }

    /// Kicks off the confetti overlay.
    pub fn trigger_celebration(&mut self) {
        self.celebration = Some(CELEBRATION_TICKS);
        let accent = self.theme.accent;
        self.set_status("KONAMI! You found the cheat code.", Some(accent));
    }

    /// Advances per-tick timers: typewriter, toast lifetime, confetti.
    pub fn advance_timers(&mut self) {
        self.typewriter.tick();
        if self.status_ttl > 0 {
            self.status_ttl -= 1;
            if self.status_ttl == 0 {
                self.status_message.clear();
                self.status_color = None;
            }
        }
        if let Some(frames) = self.celebration {
            self.celebration = if frames > 1 { Some(frames - 1) } else { None };
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        state.advance_timers();

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Resize(_, _) => {
                    // Terminal resized, will re-render on next loop
                }
                _ => {}
            }
        }

        // Poll the background send for a result
        if let Some(result) = state.send_state.poll() {
            state.handle_send_result(result);
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Screen content
            Constraint::Length(4), // Status bar
            Constraint::Length(1), // Social links footer
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_screen(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state, &state.theme);
    render_footer(f, chunks[3], state);

    if let Some(frames) = state.celebration {
        render_celebration(f, chunks[1], state, frames);
    }

    if state.help_visible {
        HelpOverlay::render(f, f.area(), &state.theme);
    }
}

/// Screen label shown in the title bar.
const fn view_label(view: View) -> &'static str {
    match view {
        View::Landing => "HOME",
        View::About => "ABOUT",
        View::Projects => "PROJECTS",
        View::ProjectDetail => "PROJECT",
        View::Contact => "CONTACT",
    }
}

/// Render title bar with the app name and current screen
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = format!(" {} | {} ", APP_NAME, view_label(state.nav.current));
    let widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );
    f.render_widget(widget, area);
}

/// Render the active screen view
fn render_screen(f: &mut Frame, area: Rect, state: &AppState) {
    match state.nav.current {
        View::Landing => views::landing::render(f, area, state),
        View::About => views::about::render(f, area, state),
        View::Projects => views::projects::render(f, area, state),
        View::ProjectDetail => views::detail::render(f, area, state),
        View::Contact => views::contact::render(f, area, state),
    }
}

/// Render the social links footer
fn render_footer(f: &mut Frame, area: Rect, state: &AppState) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, (label, url)) in SOCIAL_LINKS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                "  ",
                Style::default().fg(state.theme.text_muted),
            ));
        }
        spans.push(Span::styled(
            format!("{label}:"),
            Style::default().fg(state.theme.accent),
        ));
        spans.push(Span::styled(
            format!(" {url}"),
            Style::default().fg(state.theme.text_muted),
        ));
    }
    let footer = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .style(Style::default().bg(state.theme.background));
    f.render_widget(footer, area);
}

/// Scatter confetti glyphs over the content area.
///
/// A small LCG keyed on the remaining frame count moves the pieces
/// every tick without pulling in a random number generator.
fn render_celebration(f: &mut Frame, area: Rect, state: &AppState, frames: u8) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let glyphs = ['*', '+', '.', 'o'];
    let colors = [
        state.theme.accent,
        state.theme.success,
        state.theme.warning,
        state.theme.primary,
    ];
    let mut seed = u32::from(frames)
        .wrapping_mul(747_796_405)
        .wrapping_add(2_891_336_453);
    let pieces = (u32::from(area.width) * u32::from(area.height) / 24).max(8);
    let buf = f.buffer_mut();
    for i in 0..pieces {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let x = area.x + (seed >> 16) as u16 % area.width;
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let y = area.y + (seed >> 16) as u16 % area.height;
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(glyphs[(i as usize) % glyphs.len()])
                .set_fg(colors[(seed as usize >> 8) % colors.len()]);
        }
    }
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    use crossterm::event::KeyCode;

    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }

    // The cheat-code recognizer observes every key press, including
    // characters typed into the contact form.
    if let Some(symbol) = Symbol::from_key_event(key) {
        if state.recognizer.feed(symbol) {
            state.trigger_celebration();
            // The completing key belongs to the cheat code; it does not
            // also act as a button.
            return Ok(false);
        }
    }

    if state.help_visible {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            state.help_visible = false;
        }
        return Ok(false);
    }

    // Text entry on the contact screen wins over single-key shortcuts.
    if state.nav.current == View::Contact && handle_contact_entry(state, key) {
        return Ok(false);
    }

    let context = if state.nav.current == View::Projects {
        "projects"
    } else {
        "main"
    };
    let action = state
        .shortcuts
        .lookup(context, key)
        .or_else(|| state.shortcuts.lookup("main", key));
    if let Some(action) = action {
        dispatch_action(state, action);
    }

    Ok(state.should_quit)
}

/// Route keys into the contact form. Returns true if the key was
/// consumed as text entry.
fn handle_contact_entry(state: &mut AppState, key: KeyEvent) -> bool {
    use crossterm::event::{KeyCode, KeyModifiers};

    // A frozen form lets every key fall through to navigation.
    if !state.service_online || state.send_state.is_sending() {
        return false;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    match key.code {
        KeyCode::Char(c) => {
            state.contact_form.type_char(c);
            true
        }
        KeyCode::Backspace => {
            state.contact_form.backspace();
            true
        }
        KeyCode::Tab => {
            state.contact_form.next_field();
            true
        }
        KeyCode::BackTab => {
            state.contact_form.previous_field();
            true
        }
        KeyCode::Enter => {
            state.submit_contact();
            true
        }
        _ => false,
    }
}

/// Apply a resolved action to the application state.
fn dispatch_action(state: &mut AppState, action: Action) {
    match action {
        Action::DpadUp => state.nav.navigate(View::About, None),
        Action::DpadDown => state.nav.navigate(View::Landing, None),
        Action::DpadLeft => state.nav.navigate(View::Projects, None),
        Action::DpadRight => state.nav.navigate(View::Contact, None),
        Action::ButtonA => press_a(state),
        Action::ButtonB => {
            if !state.nav.back() {
                let accent = state.theme.accent;
                state.set_status("B button pressed!", Some(accent));
            }
        }
        Action::SelectTheme => state.toggle_theme(),
        Action::StartToast => {
            let accent = state.theme.accent;
            state.set_status("Hello World", Some(accent));
        }
        Action::HighlightNext => {
            if !state.projects.is_empty() {
                state.project_highlight = (state.project_highlight + 1) % state.projects.len();
            }
        }
        Action::HighlightPrevious => {
            if !state.projects.is_empty() {
                state.project_highlight = state
                    .project_highlight
                    .checked_sub(1)
                    .unwrap_or(state.projects.len() - 1);
            }
        }
        Action::JumpToProject(index) => {
            if let Some(project) = state.projects.get(index) {
                let id = project.id.clone();
                state.project_highlight = index;
                state.nav.navigate(View::ProjectDetail, Some(&id));
            }
        }
        Action::ToggleHelp => state.help_visible = !state.help_visible,
        Action::Quit => state.should_quit = true,
    }
}

/// The A button: open on the catalog, send on the contact form,
/// a toast everywhere else.
fn press_a(state: &mut AppState) {
    match state.nav.current {
        View::Projects => {
            if let Some(project) = state.projects.get(state.project_highlight) {
                let id = project.id.clone();
                state.nav.navigate(View::ProjectDetail, Some(&id));
            }
        }
        View::Contact => state.submit_contact(),
        _ => {
            let accent = state.theme.accent;
            state.set_status("A button pressed!", Some(accent));
        }
    }
}
