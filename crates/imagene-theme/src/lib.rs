//! Palettes for the imagene wizard
//!
//! A [`ThemeId`] names one entry of the fixed theme registry, a [`Theme`] is
//! the set of concrete colors the renderer draws with.

use ratatui::{prelude::*, style::palette::tailwind};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Identifier of a registered palette
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ThemeId {
    #[default]
    Dark,
    Light,
}

impl ThemeId {
    /// The other palette of the dark/light pair
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// All registered theme ids, in registry order
    pub fn all() -> impl Iterator<Item = ThemeId> {
        ThemeId::iter()
    }
}

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    pub id: ThemeId,

    pub background: Color,
    pub borders: Color,
    pub panel: Color,

    pub text_primary: Color,
    pub text_muted: Color,

    pub accent: Color,
    pub warning: Color,

    pub selected_bg: Color,
    pub selected_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl From<ThemeId> for Theme {
    fn from(id: ThemeId) -> Self {
        match id {
            ThemeId::Dark => Self::dark(),
            ThemeId::Light => Self::light(),
        }
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            id: ThemeId::Dark,
            background: Color::Rgb(21, 32, 43),
            borders: Color::Rgb(56, 68, 77),
            panel: tailwind::SLATE.c900,
            text_primary: Color::Rgb(255, 255, 255),
            text_muted: tailwind::SLATE.c400,
            accent: tailwind::CYAN.c400,
            warning: tailwind::YELLOW.c400,
            selected_bg: tailwind::CYAN.c600,
            selected_fg: Color::White,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            id: ThemeId::Light,
            background: Color::Rgb(255, 255, 255),
            borders: Color::Rgb(56, 68, 77),
            panel: tailwind::SLATE.c100,
            text_primary: Color::Rgb(0, 0, 0),
            text_muted: tailwind::SLATE.c600,
            accent: tailwind::BLUE.c700,
            warning: tailwind::ORANGE.c700,
            selected_bg: tailwind::BLUE.c200,
            selected_fg: Color::Black,
        }
    }

    /// Resolve a palette by name, falling back to the dark palette for
    /// names that are not in the registry
    pub fn by_name(name: &str) -> Self {
        name.parse::<ThemeId>()
            .map(Theme::from)
            .unwrap_or_else(|_| Self::dark())
    }

    /// Style for the screen background
    pub fn base(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.background)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.borders)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "Enter" in "Press Enter to continue")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the focused form field
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for warning messages
    pub fn warning(&self) -> Style {
        Style::default()
            .fg(self.warning)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_dark() {
        assert_eq!(ThemeId::default(), ThemeId::Dark);
        assert_eq!(Theme::default().id, ThemeId::Dark);
    }

    #[test]
    fn test_theme_id_parsing() {
        assert_eq!("dark".parse::<ThemeId>(), Ok(ThemeId::Dark));
        assert_eq!("Light".parse::<ThemeId>(), Ok(ThemeId::Light));
        assert!("solarized".parse::<ThemeId>().is_err());
        assert_eq!(ThemeId::Light.to_string(), "light");
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(ThemeId::Dark.toggled(), ThemeId::Light);
        assert_eq!(ThemeId::Dark.toggled().toggled(), ThemeId::Dark);
    }

    #[test]
    fn test_by_name_falls_back_to_dark() {
        assert_eq!(Theme::by_name("light").id, ThemeId::Light);
        assert_eq!(Theme::by_name("neon").id, ThemeId::Dark);
        assert_eq!(Theme::by_name("").background, Theme::dark().background);
    }

    #[test]
    fn test_registry_lists_both_palettes() {
        let ids: Vec<ThemeId> = ThemeId::all().collect();
        assert_eq!(ids, vec![ThemeId::Dark, ThemeId::Light]);
    }
}
