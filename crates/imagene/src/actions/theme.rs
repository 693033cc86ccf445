use imagene_theme::ThemeId;

/// Theme actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    /// Select a palette by id
    Set(ThemeId),
    /// Switch between the dark and light palettes
    Toggle,
}
