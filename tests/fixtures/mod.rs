//! Shared test fixtures for controller and catalog tests.
#![allow(dead_code)] // Not every test file uses every fixture

use consolefolio::controller::{Controller, MemoryStore, PreferenceStore, RENDER_DELAY};
use consolefolio::models::{Catalog, Category, Item, Localized};
use std::collections::BTreeMap;
use std::time::Instant;

/// Builds an item whose text is tagged with its label and language.
pub fn test_item(label: &str) -> Item {
    Item {
        title: Localized::from_pairs([
            ("en", format!("{label} title")),
            ("es", format!("{label} título")),
        ]),
        image: format!("img/{label}.png"),
        description: Localized::from_pairs([
            ("en", format!("{label} description")),
            ("es", format!("{label} descripción")),
        ]),
        tools: vec![format!("{label}-tool"), "Figma".to_string()],
    }
}

/// Catalog with `counts[i]` items in each category of [`Category::ALL`].
pub fn test_catalog(counts: [usize; 3]) -> Catalog {
    let mut entries = BTreeMap::new();
    for (category, count) in Category::ALL.into_iter().zip(counts) {
        let items = (0..count)
            .map(|i| test_item(&format!("{}{i}", category.key())))
            .collect();
        entries.insert(category, items);
    }
    Catalog::new(entries)
}

/// Catalog with a single web item, `ItemA`.
pub fn single_item_catalog() -> Catalog {
    let mut entries = BTreeMap::new();
    entries.insert(Category::Web, vec![test_item("ItemA")]);
    Catalog::new(entries)
}

/// Controller over a catalog with an in-memory preference store.
pub fn controller(catalog: Catalog) -> Controller<MemoryStore> {
    Controller::new(catalog, MemoryStore::default())
}

/// Applies every queued render.
pub fn settle<S: PreferenceStore>(controller: &mut Controller<S>) {
    controller.tick(Instant::now() + RENDER_DELAY);
}
