//! Configuration management for matchdeck
//!
//! Handles loading, saving, and default configuration values.
//! Config file location: ~/.config/matchdeck/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeName,
    pub display: DisplayOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeName::Hinge,
            display: DisplayOptions::default(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("matchdeck");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or create default if not exists
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }
}

/// Available theme names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Hinge,
    Midnight,
    Transparent,
}

impl ThemeName {
    pub fn all() -> &'static [ThemeName] {
        &[ThemeName::Hinge, ThemeName::Midnight, ThemeName::Transparent]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Hinge => "Hinge",
            ThemeName::Midnight => "Midnight",
            ThemeName::Transparent => "Transparent",
        }
    }

    /// Parse a theme name as given on the command line
    pub fn parse(name: &str) -> Option<Self> {
        ThemeName::all()
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
    }

    pub fn next(&self) -> Self {
        match self {
            ThemeName::Hinge => ThemeName::Midnight,
            ThemeName::Midnight => ThemeName::Transparent,
            ThemeName::Transparent => ThemeName::Hinge,
        }
    }
}

/// Display toggles for the mock chrome
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    pub show_tab_labels: bool,
    pub show_badge: bool,
    pub show_hints: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_tab_labels: true,
            show_badge: true,
            show_hints: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeName::Hinge);
        assert!(config.display.show_tab_labels);
        assert!(config.display.show_badge);
        assert!(config.display.show_hints);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!(ThemeName::parse("hinge"), Some(ThemeName::Hinge));
        assert_eq!(ThemeName::parse("MIDNIGHT"), Some(ThemeName::Midnight));
        assert_eq!(ThemeName::parse("transparent"), Some(ThemeName::Transparent));
        assert_eq!(ThemeName::parse("solarized"), None);
    }

    #[test]
    fn test_theme_cycle() {
        let theme = ThemeName::Hinge;
        assert_eq!(theme.next(), ThemeName::Midnight);
        assert_eq!(theme.next().next(), ThemeName::Transparent);
        assert_eq!(theme.next().next().next(), ThemeName::Hinge);
    }
}
