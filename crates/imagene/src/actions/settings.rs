//! Settings actions - edits on the population screen form
//!
//! Value-carrying variants hold the raw text of the input field; the reducer
//! coerces it to a number.

use crate::state::SettingsField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    SetPopulationSize(String),
    SetMinDepth(String),
    SetMaxDepth(String),
    /// Move form focus to the next field (Tab, down arrow)
    FocusNext,
    /// Move form focus to the previous field (Shift+Tab, up arrow)
    FocusPrevious,
}

impl SettingsAction {
    /// Build the setter action for `field` with the given raw text
    pub fn set(field: SettingsField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            SettingsField::PopulationSize => Self::SetPopulationSize(value),
            SettingsField::MinDepth => Self::SetMinDepth(value),
            SettingsField::MaxDepth => Self::SetMaxDepth(value),
        }
    }

    /// The field and raw text of a setter action
    pub fn raw_value(&self) -> Option<(SettingsField, &str)> {
        match self {
            Self::SetPopulationSize(v) => Some((SettingsField::PopulationSize, v)),
            Self::SetMinDepth(v) => Some((SettingsField::MinDepth, v)),
            Self::SetMaxDepth(v) => Some((SettingsField::MaxDepth, v)),
            Self::FocusNext | Self::FocusPrevious => None,
        }
    }
}
