//! Navigation state
//!
//! The screen history is a push-down stack that can never be empty: the
//! visible screen is held on its own and only the screens below it live in
//! `history`.

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Wizard screen identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ScreenId {
    Welcome,
    Information,
    Population,
}

impl ScreenId {
    /// Heading shown above the screen
    pub fn title(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Information => "How it works",
            Self::Population => "Population",
        }
    }
}

/// Direction of the most recent transition, used to pick the animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationDirection {
    #[default]
    Forwards,
    Backwards,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current: ScreenId,
    /// Screens below the current one, oldest first
    history: Vec<ScreenId>,
    direction: NavigationDirection,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(ScreenId::Welcome)
    }
}

impl NavigationState {
    pub fn new(root: ScreenId) -> Self {
        Self {
            current: root,
            history: Vec::new(),
            direction: NavigationDirection::Forwards,
        }
    }

    /// The screen to display
    pub fn current(&self) -> ScreenId {
        self.current
    }

    pub fn direction(&self) -> NavigationDirection {
        self.direction
    }

    /// Number of screens on the stack (always at least 1)
    pub fn depth(&self) -> usize {
        self.history.len() + 1
    }

    /// Whether a pop would change anything
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// All screens on the stack, current screen first
    pub fn screens(&self) -> Vec<ScreenId> {
        std::iter::once(self.current)
            .chain(self.history.iter().rev().copied())
            .collect()
    }

    /// Show `screen` on top of the stack
    pub fn push(&mut self, screen: ScreenId) {
        self.history.push(self.current);
        self.current = screen;
        self.direction = NavigationDirection::Forwards;
    }

    /// Go back one screen. Returns `false` and leaves the state untouched
    /// when the current screen is the only one.
    pub fn pop(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                self.direction = NavigationDirection::Backwards;
                true
            }
            None => false,
        }
    }
}
