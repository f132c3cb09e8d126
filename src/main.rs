//! Consolefolio - game-console styled terminal portfolio browser
//!
//! Browse portfolio items by category, step through them with the
//! directional pad, and switch the display language at runtime.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use consolefolio::branding::{APP_BINARY_NAME, APP_DISPLAY_NAME};
use consolefolio::config::ThemeMode;
use consolefolio::controller::{ConfigStore, Controller, MemoryStore, PreferenceStore};
use consolefolio::i18n::Language;
use consolefolio::models::Catalog;
use consolefolio::{logging, tui};

/// Consolefolio - game-console styled terminal portfolio browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Display language (en, es); unsupported codes fall back to the stored one
    #[arg(long, value_name = "CODE")]
    lang: Option<String>,

    /// Load the catalog from a TOML file instead of the built-in one
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Category to open on start (web, mobile, uiux)
    #[arg(long, value_name = "KEY")]
    category: Option<String>,

    /// Do not persist the language preference
    #[arg(long)]
    ephemeral: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging is best-effort; the app works without it
    let log_path = match logging::init(cli.verbose) {
        Ok(path) => Some(path),
        Err(err) => {
            eprintln!("Warning: logging disabled: {err:#}");
            None
        }
    };

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };
    for issue in catalog.audit() {
        tracing::warn!(%issue, "Incomplete catalog entry");
    }
    tracing::info!(
        items = catalog.len(),
        log = ?log_path,
        "Starting {}",
        APP_DISPLAY_NAME
    );

    let (store, theme_mode): (Box<dyn PreferenceStore>, ThemeMode) = if cli.ephemeral {
        (Box::new(MemoryStore::default()), ThemeMode::default())
    } else {
        let store = ConfigStore::open_default()?;
        let theme_mode = store.config().ui.theme_mode;
        (Box::new(store), theme_mode)
    };

    let mut controller = Controller::new(catalog, store);

    if let Some(code) = &cli.lang {
        match Language::from_code(code) {
            Some(language) => controller.set_language(language),
            None => {
                tracing::warn!(code = %code, "Ignoring unsupported --lang value");
            }
        }
    }
    if let Some(key) = &cli.category {
        controller.select_category_key(key);
    }

    let mut state = tui::AppState::new(controller, theme_mode);

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal)?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "{} exited with an error", APP_BINARY_NAME);
    }
    result
}
