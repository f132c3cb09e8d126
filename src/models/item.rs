//! Portfolio items and their localized text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::i18n::Language;

/// Text keyed by language code.
///
/// Keys are kept as raw codes so catalog files may carry translations for
/// languages the interface does not offer; those are ignored on lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Localized(BTreeMap<String, String>);

impl Localized {
    /// Builds localized text from `(code, text)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Text for a language, if present and non-blank.
    #[must_use]
    pub fn get(&self, language: Language) -> Option<&str> {
        self.0
            .get(language.code())
            .map(String::as_str)
            .filter(|text| !text.trim().is_empty())
    }

    /// Supported languages this text has no usable translation for.
    #[must_use]
    pub fn missing_languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|lang| self.get(*lang).is_none())
            .collect()
    }
}

/// One portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Localized title
    pub title: Localized,
    /// Image reference (path or URL), displayed as-is
    pub image: String,
    /// Localized description
    pub description: Localized,
    /// Tools used, in display order
    #[serde(default)]
    pub tools: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_lookup() {
        let text = Localized::from_pairs([("en", "Hello"), ("es", "Hola")]);
        assert_eq!(text.get(Language::En), Some("Hello"));
        assert_eq!(text.get(Language::Es), Some("Hola"));
        assert!(text.missing_languages().is_empty());
    }

    #[test]
    fn test_blank_translation_counts_as_missing() {
        let text = Localized::from_pairs([("en", "Hello"), ("es", "  ")]);
        assert_eq!(text.get(Language::Es), None);
        assert_eq!(text.missing_languages(), vec![Language::Es]);
    }

    #[test]
    fn test_unknown_language_keys_are_ignored() {
        let text = Localized::from_pairs([("fr", "Bonjour")]);
        assert_eq!(text.missing_languages(), vec![Language::En, Language::Es]);
    }
}
