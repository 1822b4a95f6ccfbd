//! Pixelfolio - a personal portfolio as a retro handheld console.
//!
//! The TUI draws a handheld game console: a D-pad moves between the
//! landing, about, projects, and contact screens, A confirms, B goes
//! back, and the classic cheat code still works. The optional `web`
//! feature adds the mail relay the contact form posts to.

// Module declarations
pub mod config;
pub mod constants;
pub mod input;
pub mod models;
pub mod nav;
pub mod relay;
pub mod shortcuts;
pub mod tui;
#[cfg(feature = "web")]
pub mod web;
