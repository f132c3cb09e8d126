//! Input handlers for the main screen and the language selector.

pub mod actions;
pub mod main;
pub mod popups;

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::tui::AppState;

pub use actions::dispatch_action;
pub use main::handle_main_input;
pub use popups::handle_language_selector_input;

/// Route a key press to the open popup or the main screen.
///
/// Returns `Ok(true)` when the application should quit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if state.language_selector.is_some() {
        return handle_language_selector_input(state, key);
    }
    handle_main_input(state, key)
}
