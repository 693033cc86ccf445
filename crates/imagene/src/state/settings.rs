//! Settings state - numeric generation parameters

use strum::{Display, EnumIter};

use crate::error::SettingsError;

/// Form field on the population screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum SettingsField {
    #[default]
    #[strum(to_string = "Population size")]
    PopulationSize,
    #[strum(to_string = "Min depth")]
    MinDepth,
    #[strum(to_string = "Max depth")]
    MaxDepth,
}

impl SettingsField {
    /// Move to the next field
    pub fn next(self) -> Self {
        match self {
            Self::PopulationSize => Self::MinDepth,
            Self::MinDepth => Self::MaxDepth,
            Self::MaxDepth => Self::PopulationSize,
        }
    }

    /// Move to the previous field
    pub fn prev(self) -> Self {
        match self {
            Self::PopulationSize => Self::MaxDepth,
            Self::MinDepth => Self::PopulationSize,
            Self::MaxDepth => Self::MinDepth,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsState {
    /// Candidate functions per generation
    pub population_size: u32,
    /// Lower bound on expression-tree depth
    pub min_depth: u32,
    /// Upper bound on expression-tree depth, not kept above `min_depth` by
    /// the reducer; see [`SettingsState::validate`]
    pub max_depth: u32,
    pub focused_field: SettingsField,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            population_size: 24,
            min_depth: 0,
            max_depth: 12,
            focused_field: SettingsField::default(),
        }
    }
}

impl SettingsState {
    pub fn value(&self, field: SettingsField) -> u32 {
        match field {
            SettingsField::PopulationSize => self.population_size,
            SettingsField::MinDepth => self.min_depth,
            SettingsField::MaxDepth => self.max_depth,
        }
    }

    /// Check cross-field consistency
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_depth < self.min_depth {
            return Err(SettingsError::DepthRange {
                min: self.min_depth,
                max: self.max_depth,
            });
        }
        Ok(())
    }
}
