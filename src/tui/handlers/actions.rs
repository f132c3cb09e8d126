//! Action dispatch.

use anyhow::Result;
use std::time::Instant;

use crate::i18n::Language;
use crate::shortcuts::Action;
use crate::tui::{AppState, LanguageSelector};

/// Dispatch an action to the controller.
///
/// Returns `Ok(true)` when the application should quit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    tracing::trace!(action = action.id(), "Dispatching action");
    let now = Instant::now();

    match action {
        Action::SelectCategory(category) => {
            state.clear_error();
            state.controller.select_category(category);
        }
        Action::Dpad(control) => {
            state.start_spark(control, now);
            state.controller.press(control);
        }
        Action::OpenLanguageSelector => {
            state.language_selector = Some(LanguageSelector::new(state.controller.state().language));
        }
        Action::SetLanguage(language) => apply_language(state, language, now),
        Action::ToggleTooltips => {
            state.show_tooltips = !state.show_tooltips;
        }
        Action::Quit => {
            state.should_quit = true;
            return Ok(true);
        }
        Action::Cancel => state.clear_error(),
    }

    Ok(false)
}

/// Switch language and flash the screen.
pub(super) fn apply_language(state: &mut AppState, language: Language, now: Instant) {
    state.controller.set_language(language);
    state.start_flash(now);
    tracing::info!(%language, "Display language changed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeMode;
    use crate::controller::{Controller, DpadControl, MemoryStore, PreferenceStore};
    use crate::models::{Catalog, Category};

    fn app_state() -> AppState {
        let store: Box<dyn PreferenceStore> = Box::new(MemoryStore::default());
        AppState::new(
            Controller::new(Catalog::builtin().unwrap(), store),
            ThemeMode::Dark,
        )
    }

    #[test]
    fn test_dpad_action_sparks_control() {
        let mut state = app_state();
        dispatch_action(&mut state, Action::SelectCategory(Category::Web)).unwrap();
        dispatch_action(&mut state, Action::Dpad(DpadControl::Next)).unwrap();

        assert!(state.is_sparked(DpadControl::Next));
        assert_eq!(state.controller.state().index, 0);
    }

    #[test]
    fn test_set_language_flashes() {
        let mut state = app_state();
        dispatch_action(&mut state, Action::SetLanguage(Language::Es)).unwrap();

        assert!(state.is_flashing());
        assert_eq!(state.controller.state().language, Language::Es);
    }

    #[test]
    fn test_cancel_clears_error() {
        let mut state = app_state();
        state.error_message = Some("Could not save language".to_string());
        dispatch_action(&mut state, Action::Cancel).unwrap();
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_quit() {
        let mut state = app_state();
        assert!(dispatch_action(&mut state, Action::Quit).unwrap());
        assert!(state.should_quit);
    }

    #[test]
    fn test_language_selector_flow() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let mut state = app_state();
        dispatch_action(&mut state, Action::OpenLanguageSelector).unwrap();
        assert!(state.language_selector.is_some());

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        super::super::handle_key_event(&mut state, down).unwrap();
        super::super::handle_key_event(&mut state, enter).unwrap();

        assert!(state.language_selector.is_none());
        assert_eq!(state.controller.state().language, Language::Es);
    }
}
