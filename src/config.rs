//! Board Configuration
//!
//! Read once at startup from `window.__BOARD_CONFIG__`; every field falls
//! back to its default.

use kanban_core::{TeamId, PLACEMENT_KEY_PREFIX};
use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Global the host page may define before the bundle loads
const CONFIG_GLOBAL: &str = "__BOARD_CONFIG__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// Base URL of the REST data source
    pub api_base_url: String,
    pub team_id: String,
    /// Pointer travel before a press becomes a drag
    pub drag_threshold_px: f64,
    /// Prefix for placement override keys in localStorage
    pub storage_prefix: String,
    /// error | warn | info | debug | trace | off
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            team_id: "default".to_string(),
            drag_threshold_px: leptos_dragdrop::DRAG_THRESHOLD_PX,
            storage_prefix: PLACEMENT_KEY_PREFIX.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl BoardConfig {
    /// Load from the page global, or defaults if absent or malformed
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
            Ok(value) if !value.is_undefined() && !value.is_null() => {
                serde_wasm_bindgen::from_value(value).unwrap_or_else(|e| {
                    web_sys::console::warn_1(&format!("[CONFIG] ignoring {}: {}", CONFIG_GLOBAL, e).into());
                    Self::default()
                })
            }
            _ => Self::default(),
        }
    }

    pub fn team(&self) -> TeamId {
        TeamId::new(self.team_id.clone())
    }

    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: BoardConfig = serde_json::from_str(r#"{"teamId":"ops","dragThresholdPx":12}"#).unwrap();
        assert_eq!(config.team(), TeamId::from("ops"));
        assert_eq!(config.drag_threshold_px, 12.0);
        assert_eq!(config.api_base_url, "/api");
        assert_eq!(config.storage_prefix, "taskListColumn");
    }

    #[test]
    fn test_default_threshold_is_eight_pixels() {
        assert_eq!(BoardConfig::default().drag_threshold_px, 8.0);
    }

    #[test]
    fn test_log_filter_parses_or_defaults() {
        let mut config = BoardConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.log_filter(), log::LevelFilter::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.log_filter(), log::LevelFilter::Info);
    }
}
