//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to dispatch follow-up actions (a key press becoming
//! a navigation action, for example), it uses the Dispatcher. Those actions
//! are queued and processed by the store, in order, right after the action
//! that produced them, going through the full middleware chain again.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for queueing actions back into the store
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher feeding the store's action queue
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
