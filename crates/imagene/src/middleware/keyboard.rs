//! KeyboardMiddleware - translates key presses into wizard actions
//!
//! ## Layer 1: Priority keys
//! Ctrl+C (quit), Ctrl+T (toggle theme) and Esc (back, or quit on the first
//! screen) work on every screen.
//!
//! ## Layer 2: Screen keys
//! The population screen is a form: characters and backspace edit the
//! focused field, Tab and the arrow keys move focus. The other screens map
//! Enter/Right to "continue" and Left/Backspace to "back".

use crate::actions::{self, Action, GlobalAction, SettingsAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, ScreenId};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Default)]
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Translate a key press on the current screen into an action
    pub fn translate(key: KeyEvent, state: &AppState) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(actions::quit()),
                KeyCode::Char('t') => Some(actions::toggle_theme()),
                _ => None,
            };
        }

        if key.code == KeyCode::Esc {
            return Some(Self::back_or_quit(state));
        }

        match state.current_screen() {
            ScreenId::Welcome => Self::translate_page(key, state, ScreenId::Information),
            ScreenId::Information => Self::translate_page(key, state, ScreenId::Population),
            ScreenId::Population => Self::translate_form(key, state),
        }
    }

    fn back_or_quit(state: &AppState) -> Action {
        if state.navigation.can_go_back() {
            actions::pop_screen()
        } else {
            actions::quit()
        }
    }

    /// Keys for the read-only screens
    fn translate_page(key: KeyEvent, state: &AppState, next: ScreenId) -> Option<Action> {
        match key.code {
            KeyCode::Enter | KeyCode::Right => Some(actions::push_screen(next)),
            KeyCode::Left | KeyCode::Backspace if state.navigation.can_go_back() => {
                Some(actions::pop_screen())
            }
            KeyCode::Char('t') => Some(actions::toggle_theme()),
            KeyCode::Char('q') => Some(actions::quit()),
            _ => None,
        }
    }

    /// Keys for the settings form; edits are sent as the field's full new text
    fn translate_form(key: KeyEvent, state: &AppState) -> Option<Action> {
        let field = state.settings.focused_field;
        let mut text = state.settings.value(field).to_string();

        let action = match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => SettingsAction::FocusNext,
            KeyCode::BackTab | KeyCode::Up => SettingsAction::FocusPrevious,
            KeyCode::Left => return Some(actions::pop_screen()),
            KeyCode::Backspace => {
                text.pop();
                SettingsAction::set(field, text)
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                text.push(c);
                SettingsAction::set(field, text)
            }
            _ => return None,
        };

        Some(Action::Settings(action))
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Global(GlobalAction::KeyPressed(key)) = action else {
            return true;
        };

        match Self::translate(*key, state) {
            Some(translated) => {
                log::debug!("Key {:?} -> {:?}", key.code, translated);
                dispatcher.dispatch(translated);
            }
            None => log::trace!("Unbound key {:?} on {}", key.code, state.current_screen()),
        }

        false
    }
}
