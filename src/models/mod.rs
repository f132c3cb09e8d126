//! Data models for the portfolio catalog.
//!
//! Models are independent of UI and presentation state.

pub mod catalog;
pub mod category;
pub mod item;

pub use catalog::{Catalog, CatalogIssue, ItemField};
pub use category::Category;
pub use item::{Item, Localized};
