//! Navigation actions - movement through the wizard's screen history

use crate::state::ScreenId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Go deeper: show `ScreenId` on top of the history
    Push(ScreenId),
    /// Go back to the previous screen
    Pop,
}
