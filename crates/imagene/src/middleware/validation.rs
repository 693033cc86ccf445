//! ValidationMiddleware - reports malformed settings input
//!
//! The settings reducer always coerces its input, so nothing here blocks an
//! action. Input that [`parse_strict`] refuses is logged as a warning
//! together with the value the reducer will store instead.

use crate::actions::{Action, SettingsAction};
use crate::dispatcher::Dispatcher;
use crate::error::InputError;
use crate::middleware::Middleware;
use crate::numeric::{parse_int_or_default, parse_strict, COERCED_DEFAULT};
use crate::state::{AppState, SettingsField};

#[derive(Debug, Default)]
pub struct ValidationMiddleware {
    last_warning: Option<(SettingsField, InputError)>,
}

impl ValidationMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent malformed input, if the last settings edit was one
    pub fn last_warning(&self) -> Option<&(SettingsField, InputError)> {
        self.last_warning.as_ref()
    }

    fn check(&mut self, action: &SettingsAction) {
        let Some((field, text)) = action.raw_value() else {
            return;
        };

        match parse_strict(text) {
            Ok(_) => self.last_warning = None,
            Err(e) => {
                log::warn!(
                    "Malformed {} input {:?}: {}, storing {}",
                    field,
                    text,
                    e,
                    parse_int_or_default(text, COERCED_DEFAULT)
                );
                self.last_warning = Some((field, e));
            }
        }
    }
}

impl Middleware for ValidationMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        if let Action::Settings(settings) = action {
            self.check(settings);
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions;
    use std::sync::mpsc;

    #[test]
    fn test_records_malformed_input_without_consuming() {
        let (tx, _rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let state = AppState::default();
        let mut middleware = ValidationMiddleware::new();

        assert!(middleware.handle(&actions::set_min_depth("x"), &state, &dispatcher));
        assert_eq!(
            middleware.last_warning(),
            Some(&(SettingsField::MinDepth, InputError::NotANumber("x".to_string())))
        );

        assert!(middleware.handle(&actions::set_min_depth("4"), &state, &dispatcher));
        assert_eq!(middleware.last_warning(), None);
    }

    #[test]
    fn test_ignores_non_settings_actions() {
        let (tx, _rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = ValidationMiddleware::new();

        assert!(middleware.handle(&actions::pop_screen(), &AppState::default(), &dispatcher));
        assert_eq!(middleware.last_warning(), None);
    }
}
