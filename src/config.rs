//! Configuration management for the application.
//!
//! This module handles loading and saving the user's preferences in TOML
//! format with platform-specific directory resolution. The stored display
//! language is the only preference written at runtime.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::branding::{APP_DATA_DIR, CONFIG_DIR_ENV};
use crate::i18n::Language;

/// File name of the configuration inside the config directory.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// UI preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Stored display language code.
    ///
    /// Kept as the raw string so an unsupported or hand-edited value falls
    /// back to the default language instead of failing to load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Theme mode preference
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the configuration directory.
    ///
    /// Honors `CONSOLEFOLIO_CONFIG_DIR` when set, otherwise:
    /// - Linux: `~/.config/Consolefolio/`
    /// - macOS: `~/Library/Application Support/Consolefolio/`
    /// - Windows: `%APPDATA%\Consolefolio\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path of the configuration file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Loads the configuration from an explicit path.
    ///
    /// A missing file yields the defaults.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves the configuration to an explicit path.
    ///
    /// Writes a temp file next to the target and renames it into place.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates the configuration before it is written.
    ///
    /// Only supported language codes may be persisted.
    pub fn validate(&self) -> Result<()> {
        if let Some(code) = &self.ui.language {
            if Language::from_code(code).is_none() {
                anyhow::bail!("Unsupported language code: '{code}'");
            }
        }
        Ok(())
    }

    /// Effective display language, falling back to the default.
    #[must_use]
    pub fn language(&self) -> Language {
        Language::from_preference(self.ui.language.as_deref())
    }

    /// Records a display language preference.
    pub fn set_language(&mut self, language: Language) {
        self.ui.language = Some(language.code().to_string());
    }
}
