//! Theme system for consistent UI colors across dark and light modes.
//!
//! Both palettes riff on the four-shade green screen of the original
//! handheld hardware the UI imitates. The dark theme detects well on
//! black terminals; the light theme keeps the green cast on a pale
//! background.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
///
/// Provides consistent colors across all UI components with support
/// for both dark and light terminal backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders, titles, and the console shell
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,
    /// Success state color for confirmations
    pub success: Color,
    /// Error state color
    pub error: Color,
    /// Warning state color
    pub warning: Color,

    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels
    pub text_secondary: Color,
    /// Muted text color for help text and disabled items
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
    /// Surface color for panels and the screen inset
    pub surface: Color,

    /// Active/focused element color
    pub active: Color,
    /// Inactive/disabled element color
    pub inactive: Color,
}

/// Theme variant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    /// Dark theme for dark terminal backgrounds
    Dark,
    /// Light theme for light terminal backgrounds
    Light,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    ///
    /// Uses the `dark-light` crate to check whether the OS is in dark
    /// or light mode.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves a configured theme mode into a concrete theme.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Creates the dark theme: bright screen-greens on near-black.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Rgb(139, 172, 15),
            accent: Color::Rgb(155, 188, 15),
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::Rgb(224, 248, 208),
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Rgb(14, 22, 12),
            highlight_bg: Color::Rgb(48, 98, 48),
            surface: Color::Rgb(24, 40, 20),

            active: Color::Rgb(155, 188, 15),
            inactive: Color::Gray,
        }
    }

    /// Creates the light theme: deep greens on a pale green background.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(48, 98, 48),
            accent: Color::Rgb(180, 100, 0),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),

            text: Color::Rgb(15, 56, 15),
            text_secondary: Color::Rgb(60, 80, 60),
            text_muted: Color::Gray,

            background: Color::Rgb(224, 248, 208),
            highlight_bg: Color::Rgb(190, 220, 170),
            surface: Color::Rgb(208, 234, 190),

            active: Color::Rgb(48, 98, 48),
            inactive: Color::Rgb(150, 170, 140),
        }
    }

    /// Returns the theme variant for the current theme.
    ///
    /// Determined by checking the background color.
    #[must_use]
    pub const fn variant(&self) -> ThemeVariant {
        match self.background {
            Color::Rgb(224, 248, 208) => ThemeVariant::Light,
            _ => ThemeVariant::Dark,
        }
    }

    /// Returns the mode that toggles away from the current variant.
    #[must_use]
    pub const fn toggled_mode(&self) -> ThemeMode {
        match self.variant() {
            ThemeVariant::Dark => ThemeMode::Light,
            ThemeVariant::Light => ThemeMode::Dark,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
