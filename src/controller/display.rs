//! What the console screen shows, and how an item becomes displayable text.

use anyhow::Result;

use crate::i18n::{self, Language};
use crate::models::{Catalog, Category, ItemField};

/// Captured parameters of one item render.
///
/// A render carries its own category, index and language so a late delayed
/// render cannot mix its content with a newer view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTarget {
    /// Category of the item
    pub category: Category,
    /// Index within the category
    pub index: usize,
    /// Language to resolve text in
    pub language: Language,
}

/// An item resolved into the strings the screen draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    /// What was rendered
    pub target: RenderTarget,
    /// Number of items in the category, for the position indicator
    pub total: usize,
    /// Localized title
    pub title: String,
    /// Image reference
    pub image: String,
    /// Localized description
    pub description: String,
    /// Localized label for the tool list
    pub tools_label: &'static str,
    /// Tools used
    pub tools: Vec<String>,
}

impl RenderedItem {
    /// Tool list line, e.g. `Tools: HTML, CSS`.
    #[must_use]
    pub fn tools_line(&self) -> String {
        format!("{}: {}", self.tools_label, self.tools.join(", "))
    }
}

/// Content of the display region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Display {
    /// No category selected; localized prompt
    Welcome(String),
    /// Fading out before a delayed render lands; localized loading message
    Loading(String),
    /// An item is showing
    Item(RenderedItem),
    /// Rendering failed; generic localized message
    Failure(String),
}

impl Display {
    /// Welcome prompt in a language.
    #[must_use]
    pub fn welcome(language: Language) -> Self {
        Self::Welcome(i18n::bundle(language).welcome.to_string())
    }

    /// The rendered item, if one is showing.
    #[must_use]
    pub fn item(&self) -> Option<&RenderedItem> {
        match self {
            Self::Item(item) => Some(item),
            _ => None,
        }
    }

    /// Whether an item is showing.
    #[must_use]
    pub fn shows_item(&self) -> bool {
        self.item().is_some()
    }
}

/// Resolves an item into displayable text.
///
/// Fails when the item does not exist or lacks a translation for the target
/// language.
pub fn compose(catalog: &Catalog, target: RenderTarget) -> Result<RenderedItem> {
    let RenderTarget {
        category,
        index,
        language,
    } = target;

    let items = catalog.items(category);
    let item = items.get(index).ok_or_else(|| {
        anyhow::anyhow!(
            "No item at {category}[{index}] (category has {})",
            items.len()
        )
    })?;

    let missing = |field: ItemField| {
        anyhow::anyhow!("Item {category}[{index}] has no '{language}' {field}")
    };
    let title = item
        .title
        .get(language)
        .ok_or_else(|| missing(ItemField::Title))?;
    let description = item
        .description
        .get(language)
        .ok_or_else(|| missing(ItemField::Description))?;

    Ok(RenderedItem {
        target,
        total: items.len(),
        title: title.to_string(),
        image: item.image.clone(),
        description: description.to_string(),
        tools_label: i18n::bundle(language).tools_label,
        tools: item.tools.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(category: Category, index: usize, language: Language) -> RenderTarget {
        RenderTarget {
            category,
            index,
            language,
        }
    }

    #[test]
    fn test_compose_resolves_language() {
        let catalog = Catalog::builtin().unwrap();

        let en = compose(&catalog, target(Category::Web, 0, Language::En)).unwrap();
        assert_eq!(en.title, "Portfolio Website");
        assert_eq!(en.tools_line(), "Tools: HTML, CSS, JavaScript");
        assert_eq!(en.total, 1);

        let es = compose(&catalog, target(Category::Web, 0, Language::Es)).unwrap();
        assert_eq!(es.title, "Portafolio Web");
        assert_eq!(es.description, "Portafolio personal con mis proyectos web.");
        assert_eq!(es.tools_line(), "Herramientas: HTML, CSS, JavaScript");
    }

    #[test]
    fn test_compose_out_of_range() {
        let catalog = Catalog::builtin().unwrap();
        let err = compose(&catalog, target(Category::UiUx, 4, Language::En)).unwrap_err();
        assert!(err.to_string().contains("uiux[4]"));
    }

    #[test]
    fn test_compose_missing_translation() {
        let catalog = Catalog::from_toml_str(
            r#"
            [[mobile]]
            title = { en = "App" }
            image = "app.png"
            description = { en = "An app" }
            "#,
        )
        .unwrap();

        assert!(compose(&catalog, target(Category::Mobile, 0, Language::En)).is_ok());
        let err = compose(&catalog, target(Category::Mobile, 0, Language::Es)).unwrap_err();
        assert_eq!(err.to_string(), "Item mobile[0] has no 'es' title");
    }

    #[test]
    fn test_display_item_accessor() {
        assert!(!Display::welcome(Language::En).shows_item());
        assert!(Display::Loading("Loading...".into()).item().is_none());
    }
}
