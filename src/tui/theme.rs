//! Theme system for consistent UI colors across dark and light modes.
//!
//! The dark theme uses the page's own palette (deep navy background, blue
//! surfaces, coral accent). The light theme keeps the accent and inverts the rest.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Borders, section rules, active indicator dots
    pub primary: Color,
    /// The trailing heading dot, selections, focus
    pub accent: Color,
    /// Success messages (e.g., copied to clipboard)
    pub success: Color,
    /// Error overlay and error messages
    pub error: Color,

    /// Primary text content color
    pub text: Color,
    /// Muted text color for help text and inactive dots
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Panels and the slide image placeholder
    pub surface: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,

    /// Social profile button color
    pub profile: Color,
}

/// Theme variant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    /// Dark theme optimized for dark terminal backgrounds
    Dark,
    /// Light theme optimized for light terminal backgrounds
    Light,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves the user's theme preference.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark theme built from the page palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Rgb(15, 52, 96),
            accent: Color::Rgb(233, 69, 96),
            success: Color::Green,
            error: Color::Red,

            text: Color::White,
            text_muted: Color::Gray,

            background: Color::Rgb(26, 26, 46),
            surface: Color::Rgb(22, 33, 62),
            highlight_bg: Color::Rgb(15, 52, 96),

            profile: Color::Rgb(0, 119, 181),
        }
    }

    /// Light theme for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(15, 52, 96),
            accent: Color::Rgb(214, 61, 87),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,

            text: Color::Black,
            text_muted: Color::Rgb(90, 90, 90),

            background: Color::White,
            surface: Color::Rgb(230, 234, 243),
            highlight_bg: Color::Rgb(205, 215, 235),

            profile: Color::Rgb(0, 102, 153),
        }
    }

    /// Creates a theme from a variant enum.
    #[must_use]
    pub const fn from_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }

    /// Returns the theme variant for the current theme.
    #[must_use]
    pub const fn variant(&self) -> ThemeVariant {
        match self.background {
            Color::White => ThemeVariant::Light,
            _ => ThemeVariant::Dark,
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
    fn test_theme_dark_uses_page_palette() {
        let theme = Theme::dark();
        assert_eq!(theme.background, Color::Rgb(26, 26, 46));
        assert_eq!(theme.accent, Color::Rgb(233, 69, 96));
        assert_eq!(theme.text, Color::White);
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
        assert_eq!(theme.background, Color::White);
    }

    #[test]
    fn test_theme_variant_roundtrip() {
        assert_eq!(Theme::from_variant(ThemeVariant::Dark).variant(), ThemeVariant::Dark);
        assert_eq!(Theme::from_variant(ThemeVariant::Light).variant(), ThemeVariant::Light);
    }

    #[test]
    fn test_explicit_modes_skip_detection() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }
}
