//! Pixelfolio - a personal portfolio as a retro handheld console.
//!
//! Runs the terminal UI. The contact form talks to the companion
//! `pixelfolio-web` relay (or any service honoring the same contract).

use anyhow::Result;
use clap::{Parser, ValueEnum};

use pixelfolio::config::{Config, ThemeMode};
use pixelfolio::tui;

/// Theme choice on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    /// Follow the OS dark/light setting
    Auto,
    /// Dark palette
    Dark,
    /// Light palette
    Light,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Auto => Self::Auto,
            ThemeArg::Dark => Self::Dark,
            ThemeArg::Light => Self::Light,
        }
    }
}

/// Pixelfolio - portfolio console for the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Override the mail relay endpoint for this session
    #[arg(long, value_name = "URL")]
    relay: Option<String>,

    /// Force a theme for this session
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_default();
    if let Some(relay) = cli.relay {
        config.relay.endpoint = relay;
    }
    if let Some(theme) = cli.theme {
        config.ui.theme_mode = theme.into();
    }
    config.validate()?;

    let mut terminal = tui::setup_terminal()?;
    let mut state = tui::AppState::new(config);
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal)?;
    result
}
