//! Actions module
//!
//! Actions are a closed tagged enum, grouped by the part of the state they
//! touch. Untyped external input enters through [`RawAction`] and is checked
//! once, at conversion time.

pub mod global;
pub mod navigation;
pub mod raw;
pub mod settings;
pub mod theme;

pub use global::GlobalAction;
pub use navigation::NavigationAction;
pub use raw::{RawAction, RawKind};
pub use settings::SettingsAction;
pub use theme::ThemeAction;

use crate::state::ScreenId;
use imagene_theme::ThemeId;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Application-wide actions (raw keys, quit)
    Global(GlobalAction),
    /// Population screen form edits
    Settings(SettingsAction),
    /// Screen history changes
    Navigation(NavigationAction),
    /// Palette selection
    Theme(ThemeAction),
    /// No-op action
    None,
}

pub fn set_population_size(value: impl Into<String>) -> Action {
    Action::Settings(SettingsAction::SetPopulationSize(value.into()))
}

pub fn set_min_depth(value: impl Into<String>) -> Action {
    Action::Settings(SettingsAction::SetMinDepth(value.into()))
}

pub fn set_max_depth(value: impl Into<String>) -> Action {
    Action::Settings(SettingsAction::SetMaxDepth(value.into()))
}

pub fn set_theme(theme: ThemeId) -> Action {
    Action::Theme(ThemeAction::Set(theme))
}

pub fn toggle_theme() -> Action {
    Action::Theme(ThemeAction::Toggle)
}

pub fn push_screen(screen: ScreenId) -> Action {
    Action::Navigation(NavigationAction::Push(screen))
}

pub fn pop_screen() -> Action {
    Action::Navigation(NavigationAction::Pop)
}

pub fn quit() -> Action {
    Action::Global(GlobalAction::Quit)
}
