use crate::actions::{Action, NavigationAction};
use crate::state::NavigationState;

/// Reducer for the screen history
pub fn reduce(mut state: NavigationState, action: &Action) -> NavigationState {
    match action {
        Action::Navigation(NavigationAction::Push(screen)) => {
            log::debug!("Pushing screen onto stack: {}", screen);
            state.push(*screen);
        }
        Action::Navigation(NavigationAction::Pop) => {
            if state.pop() {
                log::debug!("Back to screen: {}", state.current());
            } else {
                log::debug!("Cannot pop the only screen in the stack");
            }
        }
        _ => {}
    }

    state
}
