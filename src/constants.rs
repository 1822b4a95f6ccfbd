//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the portfolio owner's identity.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Pixelfolio";

/// Portfolio owner's display name (non-breaking space keeps it on one line).
pub const OWNER_NAME: &str = "Kishore\u{a0}M";

/// Portfolio owner's role line, revealed by the landing typewriter.
pub const OWNER_ROLE: &str = "Game developer, UI/UX designer, 3D Artist";

/// Footer social links rendered in the console frame.
pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("GitHub", "github.com/code-grafiki"),
    ("LinkedIn", "linkedin.com/in/kishore-m-016b38204"),
    ("Figma", "figma.com/@polygrafikos"),
    ("Instagram", "instagram.com/polygrafikos"),
];
