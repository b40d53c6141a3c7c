//! Actions with automatic category inference

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherReport;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Search category =====
    /// Search box text changed
    SearchInputChange(String),

    /// Submit the search box contents (Enter)
    SearchSubmit(String),

    /// Reset input and report back to idle (Esc)
    SearchClear,

    // ===== Weather category =====
    /// Result: lookup succeeded
    WeatherDidLoad(WeatherReport),

    /// Result: lookup failed (carries the user-facing message)
    WeatherDidError(String),

    // ===== Uncategorized (global) =====
    /// Force a re-render (for cursor movement, etc.)
    Render,

    /// Periodic clock tick keeping the day/night qualifier current
    Tick,

    /// Exit the application
    Quit,
}
