//! Centralized shortcut and action system.
//!
//! Key presses are looked up in a [`ShortcutRegistry`] and turned into
//! [`Action`]s, which the TUI handlers dispatch to the controller.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::controller::DpadControl;
use crate::i18n::Language;
use crate::models::Category;

/// Context name of the main screen.
pub const MAIN_CONTEXT: &str = "main";

/// All possible actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === CATEGORIES ===
    /// Select a category
    SelectCategory(Category),

    // === DIRECTIONAL PAD ===
    /// Press a directional control
    Dpad(DpadControl),

    // === LANGUAGE ===
    /// Open the language selector popup
    OpenLanguageSelector,
    /// Switch directly to a language
    SetLanguage(Language),

    // === HELP ===
    /// Show or hide the tooltip legend under the directional pad
    ToggleTooltips,

    // === GENERAL ===
    /// Exit the application
    Quit,
    /// Dismiss status messages
    Cancel,
}

impl Action {
    /// Stable identifier, used in logs.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::SelectCategory(Category::Web) => "select_web",
            Self::SelectCategory(Category::Mobile) => "select_mobile",
            Self::SelectCategory(Category::UiUx) => "select_uiux",

            Self::Dpad(DpadControl::Previous) => "previous",
            Self::Dpad(DpadControl::Next) => "next",
            Self::Dpad(DpadControl::ShowDescription) => "show_description",
            Self::Dpad(DpadControl::HideDescription) => "hide_description",

            Self::OpenLanguageSelector => "open_language_selector",
            Self::SetLanguage(Language::En) => "set_language_en",
            Self::SetLanguage(Language::Es) => "set_language_es",

            Self::ToggleTooltips => "toggle_tooltips",

            Self::Quit => "quit",
            Self::Cancel => "cancel",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry
    }

    /// Register all shortcuts for the main context.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = MAIN_CONTEXT;

        // === CATEGORIES ===
        for (category, number, letter) in [
            (Category::Web, '1', 'w'),
            (Category::Mobile, '2', 'm'),
            (Category::UiUx, '3', 'u'),
        ] {
            let action = Action::SelectCategory(category);
            self.register(ctx, K::Char(number), M::NONE, action);
            self.register(ctx, K::Char(letter), M::NONE, action);
        }

        // === DIRECTIONAL PAD (arrows + vim keys) ===
        let previous = Action::Dpad(DpadControl::Previous);
        let next = Action::Dpad(DpadControl::Next);
        let show = Action::Dpad(DpadControl::ShowDescription);
        let hide = Action::Dpad(DpadControl::HideDescription);
        self.register(ctx, K::Left, M::NONE, previous);
        self.register(ctx, K::Right, M::NONE, next);
        self.register(ctx, K::Up, M::NONE, show);
        self.register(ctx, K::Down, M::NONE, hide);
        self.register(ctx, K::Char('h'), M::NONE, previous);
        self.register(ctx, K::Char('l'), M::NONE, next);
        self.register(ctx, K::Char('k'), M::NONE, show);
        self.register(ctx, K::Char('j'), M::NONE, hide);

        // === LANGUAGE ===
        self.register(ctx, K::Char('g'), M::NONE, Action::OpenLanguageSelector);
        self.register(ctx, K::Char('e'), M::NONE, Action::SetLanguage(Language::En));
        self.register(ctx, K::Char('s'), M::NONE, Action::SetLanguage(Language::Es));

        // === HELP ('?' arrives with or without SHIFT depending on terminal) ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleTooltips);
        self.register(ctx, K::Char('?'), M::SHIFT, Action::ToggleTooltips);

        // === GENERAL ===
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
