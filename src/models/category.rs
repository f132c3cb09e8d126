//! Portfolio categories.

use std::fmt;

/// Category of portfolio items.
///
/// The set of categories is closed: every category has a button, a shortcut,
/// and a localized label, and all dispatch over categories is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Web applications
    Web,
    /// Mobile applications
    Mobile,
    /// UI/UX design work
    UiUx,
}

impl Category {
    /// All categories, in button order.
    pub const ALL: [Self; 3] = [Self::Web, Self::Mobile, Self::UiUx];

    /// Stable key used in catalog files and on the command line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::UiUx => "uiux",
        }
    }

    /// Parses a category key.
    ///
    /// Returns `None` for unknown keys; callers treat that as "nothing selected".
    ///
    /// # Examples
    ///
    /// ```
    /// use consolefolio::models::Category;
    ///
    /// assert_eq!(Category::from_key("uiux"), Some(Category::UiUx));
    /// assert_eq!(Category::from_key("games"), None);
    /// ```
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.key().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
