use serde::Deserialize;

use crate::{Result, SchemeQuery};

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
const LIGHT_QUERY: &str = "(prefers-color-scheme: light)";
const TOGGLE_SELECTOR: &str = "[data-bs-toggle=\"mode\"]";
const CHECKBOX_SELECTOR: &str = ".form-check-input";

/// Selectors and media queries used by the watcher.
///
/// Every field may be omitted from the JSON form; missing fields keep the
/// Bootstrap-style defaults.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WatcherConfig {
    pub dark_query: String,
    pub light_query: String,
    /// Marker of the element wrapping the mode toggle.
    pub toggle_selector: String,
    /// Checkbox inside the toggle element.
    pub checkbox_selector: String,
    /// When false, change events only run the theme routine.
    pub sync_toggle: bool,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            dark_query: DARK_QUERY.to_string(),
            light_query: LIGHT_QUERY.to_string(),
            toggle_selector: TOGGLE_SELECTOR.to_string(),
            checkbox_selector: CHECKBOX_SELECTOR.to_string(),
            sync_toggle: true,
        }
    }
}

impl WatcherConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn media_query(&self, query: SchemeQuery) -> &str {
        match query {
            SchemeQuery::Dark => &self.dark_query,
            SchemeQuery::Light => &self.light_query,
        }
    }
}
