//! Popup input handlers.

use anyhow::Result;
use crossterm::event;
use std::time::Instant;

use crate::tui::{AppState, Component, LanguageSelectorEvent};

/// Handle input while the language selector is open
pub fn handle_language_selector_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let Some(selector) = state.language_selector.as_mut() else {
        return Ok(false);
    };

    match selector.handle_input(key) {
        Some(LanguageSelectorEvent::Selected(language)) => {
            state.language_selector = None;
            super::actions::apply_language(state, language, Instant::now());
        }
        Some(LanguageSelectorEvent::Cancelled) => {
            state.language_selector = None;
        }
        None => {}
    }

    Ok(false)
}
