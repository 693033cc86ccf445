use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

use crate::actions::{Action, RawAction};
use crate::dispatcher::Dispatcher;
use crate::error::StoreError;
use crate::middleware::Middleware;
use crate::reducers::reduce;
use crate::state::AppState;

/// Receives every new state snapshot published by the store
pub trait Subscriber {
    fn on_state_changed(&mut self, state: &Arc<AppState>);
}

impl<F> Subscriber for F
where
    F: FnMut(&Arc<AppState>),
{
    fn on_state_changed(&mut self, state: &Arc<AppState>) {
        self(state)
    }
}

/// Store - holds application state and manages the Redux loop
///
/// State is published as `Arc<AppState>` snapshots. A snapshot is never
/// changed after it is published; an action that changes nothing keeps the
/// current snapshot, so `Arc::ptr_eq` tells whether anything happened.
pub struct Store {
    state: Arc<AppState>,
    middleware: Vec<Box<dyn Middleware>>,
    subscribers: Vec<Box<dyn Subscriber>>,
    dispatcher: Dispatcher,
    pending: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, pending) = mpsc::channel();
        Self {
            state: Arc::new(initial_state),
            middleware: Vec::new(),
            subscribers: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            pending,
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Register a subscriber, notified after each state change
    pub fn subscribe(&mut self, subscriber: Box<dyn Subscriber>) {
        self.subscribers.push(subscriber);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a shared handle to the current state snapshot
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process an action through middleware chain and reducer, then any
    /// actions the middleware queued while handling it
    pub fn dispatch(&mut self, action: Action) {
        self.process(action);

        while let Ok(action) = self.pending.try_recv() {
            self.process(action);
        }
    }

    /// Dispatch an untyped action
    ///
    /// Unknown kinds and unusable payloads are returned as errors and leave
    /// the state untouched.
    pub fn dispatch_raw(&mut self, raw: &RawAction) -> Result<(), StoreError> {
        let action = Action::try_from(raw).inspect_err(|e| {
            log::warn!("Rejected {:?}: {}", raw, e);
        })?;
        self.dispatch(action);
        Ok(())
    }

    fn process(&mut self, action: Action) {
        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                return;
            }
        }

        let next = reduce(AppState::clone(&self.state), &action);
        if next == *self.state {
            return;
        }

        self.state = Arc::new(next);
        for subscriber in &mut self.subscribers {
            subscriber.on_state_changed(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{self, GlobalAction};
    use crate::middleware::{KeyboardMiddleware, LoggingMiddleware, ValidationMiddleware};
    use crate::state::{NavigationDirection, ScreenId};
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn wizard_store() -> Store {
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(LoggingMiddleware::new()));
        store.add_middleware(Box::new(ValidationMiddleware::new()));
        store.add_middleware(Box::new(KeyboardMiddleware::new()));
        store
    }

    fn press(store: &mut Store, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
    }

    #[test]
    fn test_state_change_publishes_new_snapshot() {
        let mut store = wizard_store();
        let before = store.snapshot();

        store.dispatch(actions::push_screen(ScreenId::Population));
        let after = store.snapshot();

        assert!(!Arc::ptr_eq(&before, &after));
        assert_ne!(*before, *after);
        assert_eq!(before.current_screen(), ScreenId::Welcome);
    }

    #[test]
    fn test_rejected_action_keeps_snapshot() {
        let mut store = wizard_store();
        let before = store.snapshot();

        let result = store.dispatch_raw(&RawAction::new("UNDO", None));

        assert_eq!(result, Err(StoreError::InvalidAction("UNDO".to_string())));
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_noop_keeps_snapshot() {
        let mut store = wizard_store();
        let before = store.snapshot();

        store.dispatch(actions::pop_screen());
        store.dispatch(Action::None);

        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_raw_push_without_value_is_rejected() {
        let mut store = wizard_store();
        store.dispatch(actions::push_screen(ScreenId::Information));
        store.dispatch(actions::pop_screen());
        let before = store.snapshot();

        let result = store.dispatch_raw(&RawAction::new("PUSH_SCREEN", None));

        assert!(matches!(result, Err(StoreError::MissingPayload(_))));
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
        assert_eq!(
            store.state().navigation.direction(),
            NavigationDirection::Backwards
        );
    }

    #[test]
    fn test_raw_script_end_to_end() {
        let mut store = wizard_store();
        for line in [
            "PUSH_SCREEN information",
            "PUSH_SCREEN population",
            "SET_POPULATION_SIZE 55",
            "SET_MAX_DEPTH abc",
            "POP_SCREEN",
        ] {
            let raw: RawAction = line.parse().unwrap();
            store.dispatch_raw(&raw).unwrap();
        }

        let state = store.state();
        assert_eq!(
            state.navigation.screens(),
            vec![ScreenId::Information, ScreenId::Welcome]
        );
        assert_eq!(state.navigation.direction(), NavigationDirection::Backwards);
        assert_eq!(state.settings.population_size, 55);
        assert_eq!(state.settings.max_depth, 0);
    }

    #[test]
    fn test_subscribers_see_each_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = wizard_store();
        let sink = Rc::clone(&seen);
        store.subscribe(Box::new(move |state: &Arc<AppState>| {
            sink.borrow_mut().push(state.current_screen());
        }));

        store.dispatch(actions::push_screen(ScreenId::Information));
        store.dispatch(actions::pop_screen());
        store.dispatch(actions::pop_screen());

        assert_eq!(
            *seen.borrow(),
            vec![ScreenId::Information, ScreenId::Welcome]
        );
    }

    #[test]
    fn test_keyboard_walkthrough() {
        let mut store = wizard_store();

        press(&mut store, KeyCode::Enter);
        press(&mut store, KeyCode::Enter);
        assert_eq!(store.state().current_screen(), ScreenId::Population);

        press(&mut store, KeyCode::Backspace);
        press(&mut store, KeyCode::Backspace);
        press(&mut store, KeyCode::Char('8'));
        assert_eq!(store.state().settings.population_size, 8);

        press(&mut store, KeyCode::Tab);
        press(&mut store, KeyCode::Char('3'));
        assert_eq!(store.state().settings.min_depth, 3);

        press(&mut store, KeyCode::Esc);
        assert_eq!(store.state().current_screen(), ScreenId::Information);
        assert_eq!(
            store.state().navigation.direction(),
            NavigationDirection::Backwards
        );

        press(&mut store, KeyCode::Esc);
        press(&mut store, KeyCode::Esc);
        assert!(!store.state().running);
    }
}
