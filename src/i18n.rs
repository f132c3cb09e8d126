//! Display languages and localized interface text.
//!
//! Every supported language maps to one [`TextBundle`]. The lookup is an
//! exhaustive match, so adding a [`Language`] variant without its bundle is a
//! compile error rather than a missing string at runtime.

use std::fmt;

use crate::controller::DpadControl;
use crate::models::Category;

/// Placeholder substituted by [`loading`].
const SUBJECT_PLACEHOLDER: &str = "{subject}";

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Language {
    /// English
    #[default]
    En,
    /// Spanish
    Es,
}

impl Language {
    /// All supported languages, in selector order.
    pub const ALL: [Self; 2] = [Self::En, Self::Es];

    /// Short language code used for persistence and catalog keys.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Native display name shown in the language selector.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
        }
    }

    /// Parses a language code, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for unsupported codes.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    /// Resolves a stored preference, falling back to the default language
    /// when the value is absent or unsupported.
    #[must_use]
    pub fn from_preference(stored: Option<&str>) -> Self {
        stored.and_then(Self::from_code).unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Category button labels for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryLabels {
    /// Label of the web category button
    pub web: &'static str,
    /// Label of the mobile category button
    pub mobile: &'static str,
    /// Label of the UI/UX category button
    pub uiux: &'static str,
}

impl CategoryLabels {
    /// Label for a category button.
    #[must_use]
    pub const fn label(&self, category: Category) -> &'static str {
        match category {
            Category::Web => self.web,
            Category::Mobile => self.mobile,
            Category::UiUx => self.uiux,
        }
    }
}

/// Hints shown next to the four directional controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tooltips {
    /// Up: show description
    pub up: &'static str,
    /// Down: hide description
    pub down: &'static str,
    /// Left: previous item
    pub left: &'static str,
    /// Right: next item
    pub right: &'static str,
}

impl Tooltips {
    /// Hint for a directional control.
    #[must_use]
    pub const fn hint(&self, control: DpadControl) -> &'static str {
        match control {
            DpadControl::ShowDescription => self.up,
            DpadControl::HideDescription => self.down,
            DpadControl::Previous => self.left,
            DpadControl::Next => self.right,
        }
    }
}

/// All interface strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBundle {
    /// Name shown in the header
    pub header_name: &'static str,
    /// Subtitle under the header name
    pub subtitle: &'static str,
    /// Footer contact section title
    pub contact_title: &'static str,
    /// Prompt shown while no category is selected
    pub welcome: &'static str,
    /// Loading message template, `{subject}` is replaced by the category label
    pub loading_template: &'static str,
    /// Category button labels
    pub buttons: CategoryLabels,
    /// Label preceding an item's tool list
    pub tools_label: &'static str,
    /// Directional control hints
    pub tooltips: Tooltips,
    /// Message shown when an item cannot be rendered
    pub render_failure: &'static str,
    /// Title of the language selector
    pub language_title: &'static str,
}

const EN: TextBundle = TextBundle {
    header_name: "Melany Chuquimbalqui",
    subtitle: "Frontend & Mobile Developer | UI/UX Designer",
    contact_title: "Contact",
    welcome: "Select a category to start 🎮",
    loading_template: "Loading {subject}...",
    buttons: CategoryLabels {
        web: "🌐 Web Apps",
        mobile: "📱 Mobile Apps",
        uiux: "🎨 UI/UX Design",
    },
    tools_label: "Tools",
    tooltips: Tooltips {
        up: "Show description",
        down: "Hide description",
        left: "Previous",
        right: "Next",
    },
    render_failure: "Oops! Something went wrong 😢",
    language_title: "Language",
};

const ES: TextBundle = TextBundle {
    header_name: "Melany Chuquimbalqui",
    subtitle: "Desarrolladora Frontend & Mobile | Diseñadora UI/UX",
    contact_title: "Contacto",
    welcome: "Selecciona una categoría para empezar 🎮",
    loading_template: "Cargando {subject}...",
    buttons: CategoryLabels {
        web: "🌐 Web Apps",
        mobile: "📱 Apps Móviles",
        uiux: "🎨 Diseño UI/UX",
    },
    tools_label: "Herramientas",
    tooltips: Tooltips {
        up: "Mostrar descripción",
        down: "Ocultar descripción",
        left: "Anterior",
        right: "Siguiente",
    },
    render_failure: "¡Ups! Algo salió mal 😢",
    language_title: "Idioma",
};

/// Returns the text bundle for a language.
#[must_use]
pub const fn bundle(language: Language) -> &'static TextBundle {
    match language {
        Language::En => &EN,
        Language::Es => &ES,
    }
}

/// Formats the localized loading message for a subject label.
#[must_use]
pub fn loading(language: Language, subject: &str) -> String {
    bundle(language)
        .loading_template
        .replace(SUBJECT_PLACEHOLDER, subject)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_accepts_supported_codes() {
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code(" ES "), Some(Language::Es));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_from_preference_falls_back_to_default() {
        assert_eq!(Language::from_preference(None), Language::En);
        assert_eq!(Language::from_preference(Some("fr")), Language::En);
        assert_eq!(Language::from_preference(Some("es")), Language::Es);
    }

    #[test]
    fn test_loading_substitutes_subject() {
        assert_eq!(loading(Language::En, "Web Apps"), "Loading Web Apps...");
        assert_eq!(loading(Language::Es, "Web Apps"), "Cargando Web Apps...");
    }

    #[test]
    fn test_every_template_has_placeholder() {
        for lang in Language::ALL {
            assert!(
                bundle(lang).loading_template.contains(SUBJECT_PLACEHOLDER),
                "{lang} loading template is missing the subject placeholder"
            );
        }
    }

    #[test]
    fn test_tooltips_map_to_controls() {
        let tips = bundle(Language::Es).tooltips;
        assert_eq!(tips.hint(DpadControl::Previous), "Anterior");
        assert_eq!(tips.hint(DpadControl::Next), "Siguiente");
        assert_eq!(tips.hint(DpadControl::ShowDescription), "Mostrar descripción");
        assert_eq!(tips.hint(DpadControl::HideDescription), "Ocultar descripción");
    }

    #[test]
    fn test_category_labels() {
        let labels = bundle(Language::En).buttons;
        assert_eq!(labels.label(Category::Mobile), "📱 Mobile Apps");
        assert_eq!(labels.label(Category::UiUx), "🎨 UI/UX Design");
    }
}
