use imagene_theme::ThemeId;

use crate::actions::{Action, ThemeAction};

/// Reducer for the active palette
pub fn reduce(state: ThemeId, action: &Action) -> ThemeId {
    match action {
        Action::Theme(ThemeAction::Set(theme)) => *theme,
        Action::Theme(ThemeAction::Toggle) => state.toggled(),
        _ => state,
    }
}
