use crate::actions::{Action, GlobalAction, RawAction};
use crate::error::StoreError;
use crate::reducers::{navigation_reducer, settings_reducer, theme_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    if let Action::Global(GlobalAction::Quit) = action {
        state.running = false;
        return state;
    }

    state.settings = settings_reducer::reduce(state.settings, action);
    state.navigation = navigation_reducer::reduce(state.navigation, action);
    state.theme = theme_reducer::reduce(state.theme, action);

    state
}

/// Reduce an untyped action
///
/// Fails with [`StoreError`] when the raw action does not name a known kind
/// or carries an unusable payload; nothing is applied in that case.
pub fn reduce_raw(state: &AppState, raw: &RawAction) -> Result<AppState, StoreError> {
    let action = Action::try_from(raw)?;
    Ok(reduce(state.clone(), &action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions;
    use crate::state::{NavigationDirection, ScreenId};
    use imagene_theme::ThemeId;

    fn apply(state: AppState, steps: &[Action]) -> AppState {
        steps.iter().fold(state, reduce)
    }

    #[test]
    fn test_numeric_settings() {
        let state = apply(
            AppState::default(),
            &[
                actions::set_population_size("55"),
                actions::set_min_depth("2"),
                actions::set_max_depth("9"),
            ],
        );
        assert_eq!(state.settings.population_size, 55);
        assert_eq!(state.settings.min_depth, 2);
        assert_eq!(state.settings.max_depth, 9);
    }

    #[test]
    fn test_non_numeric_input_becomes_zero() {
        for text in ["", "abc"] {
            let state = apply(
                AppState::default(),
                &[
                    actions::set_population_size(text),
                    actions::set_min_depth(text),
                    actions::set_max_depth(text),
                ],
            );
            assert_eq!(state.settings.population_size, 0);
            assert_eq!(state.settings.min_depth, 0);
            assert_eq!(state.settings.max_depth, 0);
        }
    }

    #[test]
    fn test_min_above_max_is_accepted() {
        let state = reduce(AppState::default(), &actions::set_min_depth("20"));
        assert_eq!(state.settings.min_depth, 20);
        assert_eq!(state.settings.max_depth, 12);
        assert!(state.settings.validate().is_err());
    }

    #[test]
    fn test_set_theme_is_idempotent() {
        let initial = AppState::default();
        let once = reduce(initial.clone(), &actions::set_theme(initial.theme));
        let twice = reduce(once.clone(), &actions::set_theme(initial.theme));
        assert_eq!(once, initial);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_push_pop_round_trip() {
        let pushed = reduce(AppState::default(), &actions::push_screen(ScreenId::Population));
        assert_eq!(
            pushed.navigation.screens(),
            vec![ScreenId::Population, ScreenId::Welcome]
        );
        assert_eq!(pushed.navigation.direction(), NavigationDirection::Forwards);

        let popped = reduce(pushed, &actions::pop_screen());
        assert_eq!(popped.navigation.screens(), vec![ScreenId::Welcome]);
        assert_eq!(popped.navigation.direction(), NavigationDirection::Backwards);
    }

    #[test]
    fn test_pop_on_single_screen_is_noop() {
        // Popping the root screen would leave nothing to render
        let initial = AppState::default();
        let state = reduce(initial.clone(), &actions::pop_screen());
        assert_eq!(state, initial);
        assert_eq!(state.navigation.screens(), vec![ScreenId::Welcome]);
        assert_eq!(state.navigation.direction(), NavigationDirection::Forwards);
    }

    #[test]
    fn test_push_push_pop_ordering() {
        let state = apply(
            AppState::default(),
            &[
                actions::push_screen(ScreenId::Information),
                actions::push_screen(ScreenId::Population),
                actions::pop_screen(),
            ],
        );
        assert_eq!(
            state.navigation.screens(),
            vec![ScreenId::Information, ScreenId::Welcome]
        );
        assert_eq!(state.navigation.direction(), NavigationDirection::Backwards);
        assert_eq!(state.current_screen(), ScreenId::Information);
    }

    #[test]
    fn test_quit_stops_running() {
        let state = reduce(AppState::default(), &actions::quit());
        assert!(!state.running);
    }

    #[test]
    fn test_none_changes_nothing() {
        assert_eq!(reduce(AppState::default(), &Action::None), AppState::default());
    }

    #[test]
    fn test_reduce_raw_rejects_unknown_kind() {
        let initial = AppState::default();
        let result = reduce_raw(&initial, &RawAction::new("SET_GENERATIONS", Some("5")));
        assert_eq!(
            result,
            Err(StoreError::InvalidAction("SET_GENERATIONS".to_string()))
        );
        assert_eq!(initial, AppState::default());
    }

    #[test]
    fn test_reduce_raw_push_without_value_keeps_direction() {
        let initial = apply(
            AppState::default(),
            &[
                actions::push_screen(ScreenId::Information),
                actions::pop_screen(),
            ],
        );
        let result = reduce_raw(&initial, &RawAction::new("PUSH_SCREEN", None));
        assert!(matches!(result, Err(StoreError::MissingPayload(_))));
        assert_eq!(initial.navigation.direction(), NavigationDirection::Backwards);
    }

    #[test]
    fn test_reduce_raw_set_theme() {
        let state = reduce_raw(&AppState::default(), &RawAction::new("SET_THEME", Some("light")))
            .unwrap();
        assert_eq!(state.theme, ThemeId::Light);

        let state = reduce_raw(&state, &RawAction::new("SET_THEME", None)).unwrap();
        assert_eq!(state.theme, ThemeId::Dark);
    }
}
