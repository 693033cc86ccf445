//! Application State

use imagene_config::AppConfig;
use imagene_theme::ThemeId;

use super::{NavigationState, ScreenId, SettingsState};

/// Application state
///
/// Never mutated once published by the store; every action produces a new
/// value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub running: bool,
    pub settings: SettingsState,
    pub navigation: NavigationState,
    pub theme: ThemeId,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            settings: SettingsState::default(),
            navigation: NavigationState::default(),
            theme: ThemeId::default(),
        }
    }
}

impl AppState {
    /// Initial state seeded from the configuration file
    pub fn from_config(config: &AppConfig) -> Self {
        let theme = config.theme.parse().unwrap_or_else(|_| {
            log::warn!(
                "Unknown theme {:?} in config, using {}",
                config.theme,
                ThemeId::default()
            );
            ThemeId::default()
        });

        Self {
            settings: SettingsState {
                population_size: config.population_size,
                min_depth: config.min_depth,
                max_depth: config.max_depth,
                ..SettingsState::default()
            },
            theme,
            ..Self::default()
        }
    }

    /// The screen on top of the navigation stack
    pub fn current_screen(&self) -> ScreenId {
        self.navigation.current()
    }
}
