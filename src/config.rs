//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use the dark green-on-black palette
    Dark,
    /// Always use the classic pea-green DMG palette
    Light,
}

/// Mail relay configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Base URL of the mail relay (the contact form POSTs to
    /// `{endpoint}/api/send-email`).
    pub endpoint: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: default_relay_endpoint(),
        }
    }
}

/// Default relay endpoint, matching the `pixelfolio-web` default port.
fn default_relay_endpoint() -> String {
    "http://127.0.0.1:3001".to_string()
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Milliseconds between revealed characters in the landing typewriter
    #[serde(default = "default_typing_interval_ms")]
    pub typing_interval_ms: u64,
}

/// Default per-character typewriter delay.
fn default_typing_interval_ms() -> u64 {
    50
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            typing_interval_ms: default_typing_interval_ms(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Pixelfolio/config.toml`
/// - macOS: `~/Library/Application Support/Pixelfolio/config.toml`
/// - Windows: `%APPDATA%\Pixelfolio\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Mail relay settings
    #[serde(default)]
    pub relay: RelayConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("Pixelfolio");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - relay endpoint is an http(s) URL without a trailing slash surprise
    /// - typewriter interval is non-zero
    pub fn validate(&self) -> Result<()> {
        let endpoint = self.relay.endpoint.trim();
        if endpoint.is_empty() {
            anyhow::bail!("Relay endpoint must not be empty");
        }
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            anyhow::bail!("Relay endpoint must start with http:// or https://: {endpoint}");
        }

        if self.ui.typing_interval_ms == 0 {
            anyhow::bail!("Typewriter interval must be at least 1ms");
        }

        Ok(())
    }

    /// Full URL of the send-email endpoint.
    #[must_use]
    pub fn send_email_url(&self) -> String {
        format!(
            "{}/api/send-email",
            self.relay.endpoint.trim_end_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_endpoint() {
        let config = Config::new();
        assert_eq!(
            config.send_email_url(),
            "http://127.0.0.1:3001/api/send-email"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = Config {
            relay: RelayConfig {
                endpoint: "https://example.com/".to_string(),
            },
            ui: UiConfig::default(),
        };
        assert_eq!(config.send_email_url(), "https://example.com/api/send-email");
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let config = Config {
            relay: RelayConfig {
                endpoint: String::new(),
            },
            ui: UiConfig::default(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_http_endpoint_rejected() {
        let config = Config {
            relay: RelayConfig {
                endpoint: "ftp://example.com".to_string(),
            },
            ui: UiConfig::default(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_typing_interval_rejected() {
        let config = Config {
            relay: RelayConfig::default(),
            ui: UiConfig {
                theme_mode: ThemeMode::Auto,
                typing_interval_ms: 0,
            },
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config {
            relay: RelayConfig {
                endpoint: "https://folio.example.com".to_string(),
            },
            ui: UiConfig {
                theme_mode: ThemeMode::Dark,
                typing_interval_ms: 25,
            },
        };

        let serialized = toml::to_string_pretty(&config).expect("serialize");
        let parsed: Config = toml::from_str(&serialized).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");

        let config = Config {
            relay: RelayConfig {
                endpoint: "http://localhost:8080".to_string(),
            },
            ui: UiConfig::default(),
        };
        fs::write(&path, toml::to_string_pretty(&config).expect("serialize")).expect("write");

        let content = fs::read_to_string(&path).expect("read");
        let parsed: Config = toml::from_str(&content).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let parsed: Config = toml::from_str("").expect("parse empty config");
        assert_eq!(parsed, Config::new());
    }
}
