//! Presentation controller: the view state and its transitions.
//!
//! The controller owns the catalog, the [`ViewState`], and the [`Display`]
//! written to the console screen. All state changes go through the transition
//! methods; each one updates the state and then renders, either immediately
//! or through the [`RenderScheduler`] after [`RENDER_DELAY`].

pub mod display;
pub mod preferences;
pub mod scheduler;

use std::time::{Duration, Instant};

use crate::i18n::{self, Language, TextBundle};
use crate::models::{Catalog, Category};

pub use display::{compose, Display, RenderTarget, RenderedItem};
pub use preferences::{ConfigStore, MemoryStore, PreferenceStore};
pub use scheduler::{PendingRender, RenderScheduler};

/// Fade delay between a navigation event and its item appearing.
pub const RENDER_DELAY: Duration = Duration::from_millis(300);

/// The four directional controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DpadControl {
    /// Left: previous item
    Previous,
    /// Right: next item
    Next,
    /// Up: show the description panel
    ShowDescription,
    /// Down: hide the description panel
    HideDescription,
}

impl DpadControl {
    /// All controls, in up/left/right/down layout order.
    pub const ALL: [Self; 4] = [
        Self::ShowDescription,
        Self::Previous,
        Self::Next,
        Self::HideDescription,
    ];

    /// Arrow glyph drawn on the pad.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Previous => "◀",
            Self::Next => "▶",
            Self::ShowDescription => "▲",
            Self::HideDescription => "▼",
        }
    }
}

/// The mutable view state.
///
/// `index` is only meaningful while a category is selected, and then always
/// lies within that category's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// Selected category, `None` shows the welcome prompt
    pub selected_category: Option<Category>,
    /// Index of the current item
    pub index: usize,
    /// Display language
    pub language: Language,
    /// Whether the description panel is expanded
    pub description_visible: bool,
}

impl ViewState {
    /// Initial state: nothing selected, description collapsed.
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self {
            selected_category: None,
            index: 0,
            language,
            description_visible: false,
        }
    }
}

/// Owns the view state and drives rendering.
#[derive(Debug)]
pub struct Controller<S: PreferenceStore> {
    catalog: Catalog,
    state: ViewState,
    display: Display,
    scheduler: RenderScheduler,
    store: S,
    persist_error: Option<String>,
}

impl<S: PreferenceStore> Controller<S> {
    /// Creates a controller with the language seeded from the store.
    ///
    /// An absent or unsupported stored language falls back to the default.
    pub fn new(catalog: Catalog, store: S) -> Self {
        let stored = store.load_language();
        let language = Language::from_preference(stored.as_deref());
        if let Some(code) = stored.as_deref() {
            if Language::from_code(code).is_none() {
                tracing::info!(stored = code, fallback = %language, "Stored language unsupported, using default");
            }
        }

        Self {
            catalog,
            state: ViewState::new(language),
            display: Display::welcome(language),
            scheduler: RenderScheduler::new(),
            store,
            persist_error: None,
        }
    }

    /// Current view state.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Current display content.
    #[must_use]
    pub const fn display(&self) -> &Display {
        &self.display
    }

    /// The preference store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Interface text in the current language.
    #[must_use]
    pub const fn text(&self) -> &'static TextBundle {
        i18n::bundle(self.state.language)
    }

    /// Whether a delayed render is still queued.
    #[must_use]
    pub fn has_pending_render(&self) -> bool {
        self.scheduler.has_pending()
    }

    /// Due time of the next delayed render.
    #[must_use]
    pub fn next_render_due(&self) -> Option<Instant> {
        self.scheduler.next_due()
    }

    /// Takes the message of the last failed preference write, if any.
    pub fn take_persist_error(&mut self) -> Option<String> {
        self.persist_error.take()
    }

    /// Switches the display language, persists it, and re-renders in place.
    ///
    /// Category, index, and description visibility are left untouched, unless
    /// the item cannot be shown in the new language; then the description
    /// collapses.
    pub fn set_language(&mut self, language: Language) {
        self.state.language = language;

        if let Err(err) = self.store.save_language(language) {
            tracing::warn!(error = %err, %language, "Failed to persist language preference");
            self.persist_error = Some(format!("{err:#}"));
        }

        match self.state.selected_category {
            None => self.show_welcome(),
            Some(category) => {
                let target = RenderTarget {
                    category,
                    index: self.state.index,
                    language,
                };
                let seq = self.scheduler.immediate();
                self.display = self.render(target);
                if !self.display.shows_item() {
                    self.state.description_visible = false;
                }
                tracing::debug!(seq, render = ?target, "Re-rendered for language change");
            }
        }
    }

    /// Selects a category and starts at its first item.
    ///
    /// An empty category clears the selection and shows the welcome prompt.
    pub fn select_category(&mut self, category: Category) {
        self.state.index = 0;
        self.state.description_visible = false;

        if self.catalog.items(category).is_empty() {
            tracing::debug!(%category, "Selected category has no items");
            self.state.selected_category = None;
            self.show_welcome();
            return;
        }

        self.state.selected_category = Some(category);
        self.schedule_current();
    }

    /// Selects a category by key; unknown keys clear the selection.
    pub fn select_category_key(&mut self, key: &str) {
        match Category::from_key(key) {
            Some(category) => self.select_category(category),
            None => {
                tracing::debug!(key, "Unknown category key");
                self.state.selected_category = None;
                self.state.index = 0;
                self.state.description_visible = false;
                self.show_welcome();
            }
        }
    }

    /// Advances to the next item, wrapping to the first.
    pub fn next(&mut self) {
        self.step(|index, len| (index + 1) % len);
    }

    /// Goes back to the previous item, wrapping to the last.
    pub fn previous(&mut self) {
        self.step(|index, len| (index + len - 1) % len);
    }

    /// Expands the description panel of the showing item.
    pub fn show_description(&mut self) {
        if self.display.shows_item() {
            self.state.description_visible = true;
        }
    }

    /// Collapses the description panel of the showing item.
    pub fn hide_description(&mut self) {
        if self.display.shows_item() {
            self.state.description_visible = false;
        }
    }

    /// Dispatches a directional control.
    pub fn press(&mut self, control: DpadControl) {
        match control {
            DpadControl::Previous => self.previous(),
            DpadControl::Next => self.next(),
            DpadControl::ShowDescription => self.show_description(),
            DpadControl::HideDescription => self.hide_description(),
        }
    }

    /// Applies delayed renders that are due at `now`.
    ///
    /// Returns `true` when the display changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = self.scheduler.take_due(now);
        let changed = !due.is_empty();
        for pending in due {
            self.display = self.render(pending.target);
            self.state.description_visible = false;
        }
        changed
    }

    fn step(&mut self, advance: impl Fn(usize, usize) -> usize) {
        let Some(category) = self.state.selected_category else {
            return;
        };
        let len = self.catalog.items(category).len();
        if len == 0 {
            return;
        }

        self.state.index = advance(self.state.index, len);
        self.state.description_visible = false;
        self.schedule_current();
    }

    fn schedule_current(&mut self) {
        let Some(category) = self.state.selected_category else {
            return;
        };
        let target = RenderTarget {
            category,
            index: self.state.index,
            language: self.state.language,
        };

        let seq = self.scheduler.schedule(target, Instant::now(), RENDER_DELAY);
        let subject = self.text().buttons.label(category);
        self.display = Display::Loading(i18n::loading(self.state.language, subject));
        tracing::debug!(seq, render = ?target, "Scheduled render");
    }

    fn show_welcome(&mut self) {
        self.scheduler.immediate();
        self.display = Display::welcome(self.state.language);
    }

    fn render(&self, target: RenderTarget) -> Display {
        match compose(&self.catalog, target) {
            Ok(item) => Display::Item(item),
            Err(err) => {
                tracing::error!(error = %err, render = ?target, "Error rendering item");
                Display::Failure(i18n::bundle(target.language).render_failure.to_string())
            }
        }
    }
}
