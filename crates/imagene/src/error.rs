use thiserror::Error;

/// Errors returned when untyped input cannot become an action
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Action {0} requires a value")]
    MissingPayload(String),

    #[error("Unknown screen: {0}")]
    UnknownScreen(String),
}

/// Malformed numeric input, reported as a warning and never rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Input is empty")]
    Empty,

    #[error("Not a number: {0:?}")]
    NotANumber(String),

    #[error("Negative values are not allowed")]
    Negative,

    #[error("Value exceeds {}", u32::MAX)]
    OutOfRange,
}

/// Inconsistent settings that the reducer accepts but the UI should flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Max depth {max} is below min depth {min}")]
    DepthRange { min: u32, max: u32 },
}
