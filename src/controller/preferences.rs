//! Persistence of the display language preference.

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;
use crate::i18n::Language;

/// Storage for the single persisted preference: the display language.
pub trait PreferenceStore {
    /// Stored language code, exactly as stored. May be unsupported.
    fn load_language(&self) -> Option<String>;

    /// Persists a language choice.
    fn save_language(&mut self, language: Language) -> Result<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn load_language(&self) -> Option<String> {
        (**self).load_language()
    }

    fn save_language(&mut self, language: Language) -> Result<()> {
        (**self).save_language(language)
    }
}

/// Preference store backed by the TOML config file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    config: Config,
    path: PathBuf,
}

impl ConfigStore {
    /// Wraps an already-loaded config that is saved to `path`.
    #[must_use]
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self { config, path }
    }

    /// Opens the config at its default location.
    ///
    /// An unreadable or corrupt file is logged and replaced by defaults, which
    /// are written back on the next language change.
    pub fn open_default() -> Result<Self> {
        let path = Config::config_file_path()?;
        let config = Config::load_from(&path).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Ignoring unreadable config, using defaults");
            Config::default()
        });
        Ok(Self::new(config, path))
    }

    /// The loaded configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl PreferenceStore for ConfigStore {
    fn load_language(&self) -> Option<String> {
        self.config.ui.language.clone()
    }

    fn save_language(&mut self, language: Language) -> Result<()> {
        self.config.set_language(language);
        self.config.save_to(&self.path)
    }
}

/// In-memory store for sessions that should not touch the config file.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    language: Option<String>,
    saves: usize,
}

impl MemoryStore {
    /// Creates a store holding a raw language code.
    #[must_use]
    pub fn with_language(code: impl Into<String>) -> Self {
        Self {
            language: Some(code.into()),
            saves: 0,
        }
    }

    /// Number of times a language was saved.
    #[must_use]
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl PreferenceStore for MemoryStore {
    fn load_language(&self) -> Option<String> {
        self.language.clone()
    }

    fn save_language(&mut self, language: Language) -> Result<()> {
        self.language = Some(language.code().to_string());
        self.saves += 1;
        Ok(())
    }
}
