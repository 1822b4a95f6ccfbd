//! Centralized shortcut and action system.
//!
//! This module provides a unified mapping from keyboard events to console
//! actions: the D-pad, the A/B buttons, SELECT/START, and the few
//! terminal-only extras (help overlay, quit).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// All possible actions in the application.
///
/// This enum is the bridge between physical keys and console behavior;
/// what an action does can still depend on the current view (the B
/// button is "back" everywhere except the landing screen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === D-PAD ===
    /// Up on the D-pad: navigate to the about screen.
    DpadUp,
    /// Down on the D-pad: navigate to the landing screen.
    DpadDown,
    /// Left on the D-pad: navigate to the projects list.
    DpadLeft,
    /// Right on the D-pad: navigate to the contact form.
    DpadRight,

    // === BUTTONS ===
    /// A button: confirm / open / send.
    ButtonA,
    /// B button: back.
    ButtonB,
    /// SELECT: toggle the light/dark palette.
    SelectTheme,
    /// START: easter-egg toast.
    StartToast,

    // === PROJECTS LIST ===
    /// Move the list highlight down.
    HighlightNext,
    /// Move the list highlight up.
    HighlightPrevious,
    /// Jump to and open the project at this zero-based ordinal.
    JumpToProject(usize),

    // === GENERAL ===
    /// Toggle the help overlay.
    ToggleHelp,
    /// Quit the application.
    Quit,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code of the binding.
    pub code: KeyCode,
    /// Modifier keys of the binding.
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// Contexts: `"main"` for every screen except text entry, `"projects"`
/// for the extra list-highlight bindings layered on top of main.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry.register_projects_shortcuts();
        registry
    }

    /// Register all shortcuts for the main context.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = "main";

        // === D-PAD ===
        self.register(ctx, K::Up, M::NONE, Action::DpadUp);
        self.register(ctx, K::Down, M::NONE, Action::DpadDown);
        self.register(ctx, K::Left, M::NONE, Action::DpadLeft);
        self.register(ctx, K::Right, M::NONE, Action::DpadRight);

        // === BUTTONS ===
        self.register(ctx, K::Char('a'), M::NONE, Action::ButtonA);
        self.register(ctx, K::Char('A'), M::SHIFT, Action::ButtonA);
        self.register(ctx, K::Char('b'), M::NONE, Action::ButtonB);
        self.register(ctx, K::Char('B'), M::SHIFT, Action::ButtonB);
        self.register(ctx, K::Char('s'), M::NONE, Action::SelectTheme);
        self.register(ctx, K::Enter, M::NONE, Action::StartToast);

        // === GENERAL ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
    }

    /// Register the extra bindings active on the projects list.
    fn register_projects_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = "projects";

        self.register(ctx, K::Char('j'), M::NONE, Action::HighlightNext);
        self.register(ctx, K::Tab, M::NONE, Action::HighlightNext);
        self.register(ctx, K::Char('k'), M::NONE, Action::HighlightPrevious);
        self.register(ctx, K::BackTab, M::SHIFT, Action::HighlightPrevious);
        // Enter opens the highlighted card instead of the START toast
        self.register(ctx, K::Enter, M::NONE, Action::ButtonA);
        // Digits jump straight to a card by ordinal
        for (ordinal, digit) in ('1'..='9').enumerate() {
            self.register(ctx, K::Char(digit), M::NONE, Action::JumpToProject(ordinal));
        }
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
