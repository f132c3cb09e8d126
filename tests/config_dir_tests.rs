//! Config directory override and recovery from a corrupt config file.
//!
//! Sets `CONSOLEFOLIO_CONFIG_DIR` for the whole process, so this file holds a
//! single test.

use consolefolio::branding::CONFIG_DIR_ENV;
use consolefolio::config::Config;
use consolefolio::controller::{ConfigStore, PreferenceStore};
use consolefolio::i18n::Language;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_corrupt_config_in_overridden_dir_falls_back_and_is_rewritten() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("config.toml");
    fs::write(&config_file, "[ui\nlanguage = ").unwrap();

    std::env::set_var(CONFIG_DIR_ENV, temp_dir.path());
    assert_eq!(Config::config_dir().unwrap(), temp_dir.path());
    assert_eq!(Config::config_file_path().unwrap(), config_file);

    let mut store = ConfigStore::open_default().unwrap();
    assert_eq!(store.load_language(), None);
    assert_eq!(store.config(), &Config::default());

    store.save_language(Language::Es).unwrap();
    std::env::remove_var(CONFIG_DIR_ENV);

    let reloaded = Config::load_from(&config_file).unwrap();
    assert_eq!(reloaded.ui.language.as_deref(), Some("es"));
    assert_eq!(reloaded.language(), Language::Es);
}
