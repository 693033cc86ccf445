//! Untyped actions from outside the type system
//!
//! A `RawAction` is a kind name plus an optional string payload, e.g. an
//! event read from a script. Converting it into an [`Action`] is the only
//! place an unrecognized kind can show up.

use std::str::FromStr;

use imagene_theme::ThemeId;
use strum::{Display, EnumString};

use super::{Action, NavigationAction, SettingsAction, ThemeAction};
use crate::error::StoreError;
use crate::state::ScreenId;

/// The closed set of kinds a [`RawAction`] may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum RawKind {
    SetPopulationSize,
    SetMinDepth,
    SetMaxDepth,
    SetTheme,
    PushScreen,
    PopScreen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAction {
    pub kind: String,
    pub value: Option<String>,
}

impl RawAction {
    pub fn new(kind: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            kind: kind.into(),
            value: value.map(String::from),
        }
    }

    fn value(&self) -> Option<&str> {
        self.value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }
}

impl FromStr for RawAction {
    type Err = StoreError;

    /// Parse `KIND` or `KIND value`, e.g. `PUSH_SCREEN population`
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(StoreError::InvalidAction(String::new()));
        }
        let (kind, value) = match line.split_once(char::is_whitespace) {
            Some((kind, value)) => (kind, Some(value.trim())),
            None => (line, None),
        };
        Ok(Self::new(kind, value))
    }
}

impl TryFrom<&RawAction> for Action {
    type Error = StoreError;

    fn try_from(raw: &RawAction) -> Result<Self, Self::Error> {
        let kind = RawKind::from_str(&raw.kind.replace('-', "_"))
            .map_err(|_| StoreError::InvalidAction(raw.kind.clone()))?;

        let numeric = || raw.value.clone().unwrap_or_default();

        let action = match kind {
            RawKind::SetPopulationSize => {
                Action::Settings(SettingsAction::SetPopulationSize(numeric()))
            }
            RawKind::SetMinDepth => Action::Settings(SettingsAction::SetMinDepth(numeric())),
            RawKind::SetMaxDepth => Action::Settings(SettingsAction::SetMaxDepth(numeric())),
            RawKind::SetTheme => {
                let theme = match raw.value() {
                    None => ThemeId::default(),
                    Some(name) => name.parse().unwrap_or_else(|_| {
                        log::warn!("Unknown theme {:?}, using {}", name, ThemeId::default());
                        ThemeId::default()
                    }),
                };
                Action::Theme(ThemeAction::Set(theme))
            }
            RawKind::PushScreen => {
                let name = raw
                    .value()
                    .ok_or_else(|| StoreError::MissingPayload(kind.to_string()))?;
                let screen = name
                    .parse::<ScreenId>()
                    .map_err(|_| StoreError::UnknownScreen(name.to_string()))?;
                Action::Navigation(NavigationAction::Push(screen))
            }
            RawKind::PopScreen => Action::Navigation(NavigationAction::Pop),
        };

        Ok(action)
    }
}
