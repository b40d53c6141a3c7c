//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::messages::EMPTY_INPUT_ERROR;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search actions =====
        Action::SearchInputChange(text) => {
            state.location_input = text;
            DispatchResult::changed()
        }

        Action::SearchSubmit(raw) => {
            let query = raw.trim().to_string();
            if query.is_empty() {
                // Validation failure stays local - no effect, no network I/O
                state.weather = DataResource::Failed(EMPTY_INPUT_ERROR.to_string());
                state.is_refreshing = false;
                return DispatchResult::changed();
            }
            if state.weather.is_loaded() {
                // Keep the current report on screen until the fetch resolves
                state.is_refreshing = true;
            } else {
                state.weather = DataResource::Loading;
            }
            DispatchResult::changed_with(Effect::FetchWeather { query })
        }

        Action::SearchClear => {
            state.location_input.clear();
            state.weather = DataResource::Empty;
            state.is_refreshing = false;
            DispatchResult::changed()
        }

        // ===== Weather actions =====
        Action::WeatherDidLoad(report) => {
            state.weather = DataResource::Loaded(report);
            state.is_refreshing = false;
            DispatchResult::changed()
        }

        Action::WeatherDidError(message) => {
            state.weather = DataResource::Failed(message);
            state.is_refreshing = false;
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Render => DispatchResult::changed(),

        Action::Tick => {
            // Only a displayed report can go stale (day/night qualifier)
            if state.weather.is_loaded() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}
