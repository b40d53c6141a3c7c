//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

/// Normalized result of a successful WeatherAPI.com lookup
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReport {
    pub temperature_c: f64,
    pub condition: String,
    pub location_name: String,
}

/// How often a displayed report re-renders so the day/night qualifier
/// on the location line tracks the wall clock.
pub const CLOCK_TICK_SECS: u64 = 30;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Text currently in the search box
    #[debug(section = "Search", label = "Input")]
    pub location_input: String,

    /// Lookup lifecycle: Empty → Loading → Loaded/Failed
    #[debug(section = "Weather", label = "Report", debug_fmt)]
    pub weather: DataResource<WeatherReport>,

    /// Whether a resubmit is in flight (keeps showing the current report during fetch)
    #[debug(section = "Weather", label = "Refreshing")]
    pub is_refreshing: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            location_input: String::new(),
            weather: DataResource::Empty,
            is_refreshing: false,
        }
    }

    /// True between a submit and the resolution of its fetch
    pub fn is_loading(&self) -> bool {
        self.weather.is_loading() || self.is_refreshing
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
