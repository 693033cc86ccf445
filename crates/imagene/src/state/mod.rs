//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod navigation;
mod settings;

pub use app::AppState;
pub use navigation::{NavigationDirection, NavigationState, ScreenId};
pub use settings::{SettingsField, SettingsState};
