//! The portfolio catalog: items grouped by category.
//!
//! A catalog is loaded once at startup and never mutated. The default catalog
//! is embedded in the binary; an alternative can be read from a TOML file whose
//! top-level keys are category keys holding arrays of items:
//!
//! ```toml
//! [[web]]
//! title = { en = "Portfolio Website", es = "Portafolio Web" }
//! image = "img/WebApp-Portfolio.png"
//! description = { en = "...", es = "..." }
//! tools = ["HTML", "CSS"]
//! ```

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use super::{Category, Item};
use crate::i18n::Language;

const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.toml");

/// Which localized field of an item is incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    /// The item title
    Title,
    /// The item description
    Description,
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => f.write_str("title"),
            Self::Description => f.write_str("description"),
        }
    }
}

/// A missing translation found by [`Catalog::audit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogIssue {
    /// Category holding the item
    pub category: Category,
    /// Position of the item within its category
    pub index: usize,
    /// Field lacking a translation
    pub field: ItemField,
    /// Language the translation is missing for
    pub language: Language,
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] has no '{}' {}",
            self.category, self.index, self.language, self.field
        )
    }
}

/// Immutable mapping from category to its ordered items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<Category, Vec<Item>>,
}

impl Catalog {
    /// Creates a catalog from already-built entries.
    #[must_use]
    pub fn new(entries: BTreeMap<Category, Vec<Item>>) -> Self {
        Self { entries }
    }

    /// Parses the catalog embedded in the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG).context("Failed to parse built-in catalog")
    }

    /// Reads a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read catalog file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .context(format!("Failed to parse catalog file: {}", path.display()))
    }

    /// Parses a catalog from TOML text.
    ///
    /// Unknown category keys are rejected. Missing translations are not; they
    /// are reported by [`Catalog::audit`] and handled when an item is rendered.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: BTreeMap<String, Vec<Item>> =
            toml::from_str(content).context("Invalid catalog TOML")?;

        let mut entries = BTreeMap::new();
        for (key, items) in raw {
            let category = Category::from_key(&key).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown category '{key}' (expected one of: {})",
                    Category::ALL.map(Category::key).join(", ")
                )
            })?;
            entries.insert(category, items);
        }

        Ok(Self { entries })
    }

    /// Items of a category, in display order.
    ///
    /// Returns an empty slice when the category has no entries.
    #[must_use]
    pub fn items(&self, category: Category) -> &[Item] {
        self.entries.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Single item lookup.
    #[must_use]
    pub fn item(&self, category: Category, index: usize) -> Option<&Item> {
        self.items(category).get(index)
    }

    /// Total number of items across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Whether the catalog has no items at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lists every missing translation in the catalog.
    #[must_use]
    pub fn audit(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        for (category, items) in &self.entries {
            for (index, item) in items.iter().enumerate() {
                let fields = [
                    (ItemField::Title, &item.title),
                    (ItemField::Description, &item.description),
                ];
                for (field, text) in fields {
                    for language in text.missing_languages() {
                        issues.push(CatalogIssue {
                            category: *category,
                            index,
                            field,
                            language,
                        });
                    }
                }
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        for category in Category::ALL {
            assert_eq!(catalog.items(category).len(), 1, "{category} should have one item");
        }
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_builtin_catalog_is_complete() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.audit().is_empty());
    }

    #[test]
    fn test_builtin_catalog_content() {
        let catalog = Catalog::builtin().unwrap();
        let item = catalog.item(Category::Mobile, 0).unwrap();
        assert_eq!(item.title.get(Language::En), Some("Paws-App"));
        assert_eq!(item.image, "img/Paws-App.png");
        assert_eq!(item.tools, vec!["Swift", "XCode"]);
    }

    #[test]
    fn test_missing_category_yields_empty_slice() {
        let catalog = Catalog::from_toml_str(
            r#"
            [[web]]
            title = { en = "A", es = "A" }
            image = "a.png"
            description = { en = "a", es = "a" }
            "#,
        )
        .unwrap();

        assert!(catalog.items(Category::Mobile).is_empty());
        assert!(catalog.item(Category::Web, 1).is_none());
        assert!(catalog.item(Category::Web, 0).unwrap().tools.is_empty());
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let err = Catalog::from_toml_str(
            r#"
            [[games]]
            title = { en = "A" }
            image = "a.png"
            description = { en = "a" }
            "#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("games"));
    }

    #[test]
    fn test_audit_reports_missing_translations() {
        let catalog = Catalog::from_toml_str(
            r#"
            [[uiux]]
            title = { en = "Wireframes" }
            image = "w.png"
            description = { en = "Sketches", es = "Bocetos" }
            "#,
        )
        .unwrap();

        let issues = catalog.audit();
        assert_eq!(
            issues,
            vec![CatalogIssue {
                category: Category::UiUx,
                index: 0,
                field: ItemField::Title,
                language: Language::Es,
            }]
        );
        assert_eq!(issues[0].to_string(), "uiux[0] has no 'es' title");
    }
}
