use crate::actions::{Action, SettingsAction};
use crate::numeric::{parse_int_or_default, COERCED_DEFAULT};
use crate::state::SettingsState;

/// Reducer for the population screen settings
pub fn reduce(mut state: SettingsState, action: &Action) -> SettingsState {
    let Action::Settings(action) = action else {
        return state;
    };

    match action {
        SettingsAction::SetPopulationSize(value) => {
            state.population_size = parse_int_or_default(value, COERCED_DEFAULT);
        }
        SettingsAction::SetMinDepth(value) => {
            state.min_depth = parse_int_or_default(value, COERCED_DEFAULT);
        }
        SettingsAction::SetMaxDepth(value) => {
            state.max_depth = parse_int_or_default(value, COERCED_DEFAULT);
        }
        SettingsAction::FocusNext => {
            state.focused_field = state.focused_field.next();
        }
        SettingsAction::FocusPrevious => {
            state.focused_field = state.focused_field.prev();
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SettingsField;

    #[test]
    fn test_coercion_replaces_previous_value() {
        let state = SettingsState {
            population_size: 80,
            ..SettingsState::default()
        };
        let state = reduce(
            state,
            &Action::Settings(SettingsAction::SetPopulationSize("abc".to_string())),
        );
        assert_eq!(state.population_size, 0);
    }

    #[test]
    fn test_focus_moves_between_fields() {
        let state = reduce(
            SettingsState::default(),
            &Action::Settings(SettingsAction::FocusNext),
        );
        assert_eq!(state.focused_field, SettingsField::MinDepth);

        let state = reduce(state, &Action::Settings(SettingsAction::FocusPrevious));
        let state = reduce(state, &Action::Settings(SettingsAction::FocusPrevious));
        assert_eq!(state.focused_field, SettingsField::MaxDepth);
    }

    #[test]
    fn test_other_actions_are_ignored() {
        let state = reduce(SettingsState::default(), &Action::None);
        assert_eq!(state, SettingsState::default());
    }
}
