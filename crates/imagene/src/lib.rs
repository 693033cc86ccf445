//! Application-state store for the imagene wizard
//!
//! A Redux-style loop: actions flow through middleware into a pure root
//! reducer, and every resulting state is published as an immutable snapshot.

pub mod actions;
pub mod dispatcher;
pub mod error;
pub mod middleware;
pub mod numeric;
pub mod reducers;
pub mod state;
pub mod store;
pub mod views;

pub use actions::{Action, RawAction};
pub use error::{InputError, SettingsError, StoreError};
pub use state::{AppState, NavigationDirection, ScreenId};
pub use store::{Store, Subscriber};
