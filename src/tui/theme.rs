//! Theme system for consistent UI colors across dark and light modes.
//!
//! The console screen uses its own pair of colors so it reads as a display
//! set into the device body, independent of the surrounding chrome.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Borders, titles, and emphasis
    pub primary: Color,
    /// Highlights: selected category, item title, sparked controls
    pub accent: Color,
    /// Errors and render failures
    pub error: Color,

    /// Primary text content color
    pub text: Color,
    /// Help text, hints, and fading content
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Device body: button faces and the pad
    pub surface: Color,

    /// Console screen background
    pub screen_bg: Color,
    /// Console screen text
    pub screen_fg: Color,
    /// Screen border while the language flash is active
    pub flash: Color,
}

impl Theme {
    /// Detects the OS theme and returns the matching Theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves the theme for a configured mode.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark theme for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Magenta,
            accent: Color::Yellow,
            error: Color::Red,

            text: Color::White,
            text_muted: Color::DarkGray,

            background: Color::Black,
            surface: Color::Rgb(40, 30, 60),

            screen_bg: Color::Rgb(15, 56, 15),
            screen_fg: Color::Rgb(155, 188, 15),
            flash: Color::White,
        }
    }

    /// Light theme for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(110, 40, 150),
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            error: Color::Red,

            text: Color::Black,
            text_muted: Color::Gray,

            background: Color::White,
            surface: Color::Rgb(230, 225, 240),

            screen_bg: Color::Rgb(155, 188, 15),
            screen_fg: Color::Rgb(15, 56, 15),
            flash: Color::Black,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_contrast() {
        let dark = Theme::dark();
        assert_eq!(dark.text, Color::White);
        assert_eq!(dark.background, Color::Black);

        let light = Theme::light();
        assert_eq!(light.text, Color::Black);
        assert_eq!(light.background, Color::White);
        // Yellow is too bright for light backgrounds
        assert_ne!(light.accent, Color::Yellow);
    }

    #[test]
    fn test_screen_colors_differ() {
        for theme in [Theme::dark(), Theme::light()] {
            assert_ne!(theme.screen_bg, theme.screen_fg);
            assert_ne!(theme.flash, theme.primary);
        }
    }

    #[test]
    fn test_from_mode_explicit() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }
}
