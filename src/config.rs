//! UI Configuration
//!
//! Timings and limits, with defaults overridable from the host page:
//! `<meta name="menu-planner:debounce_ms" content="250">`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

const META_PREFIX: &str = "menu-planner:";

/// Floor for `min_query_chars`: one-letter lookups are never sent
pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiConfig {
    /// Quiet period before a suggestion lookup
    pub debounce_ms: u32,
    /// Shorter (trimmed) queries never reach the server
    pub min_query_chars: usize,
    /// At least 1
    pub suggestion_limit: u32,
    /// Delay between a success notification and the view reload
    pub reload_delay_ms: u32,
    pub toast_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            min_query_chars: MIN_QUERY_CHARS,
            suggestion_limit: 10,
            reload_delay_ms: 1500,
            toast_ms: 3000,
        }
    }
}

impl UiConfig {
    /// Apply one `key = value` override. Returns false when the key is
    /// unknown or the value does not parse; the config is then unchanged.
    pub fn apply(&mut self, key: &str, value: &str) -> bool {
        let value = value.trim();
        match key {
            "debounce_ms" => parse_into(value, &mut self.debounce_ms),
            "min_query_chars" => parse_at_least(value, MIN_QUERY_CHARS, &mut self.min_query_chars),
            "suggestion_limit" => parse_at_least(value, 1, &mut self.suggestion_limit),
            "reload_delay_ms" => parse_into(value, &mut self.reload_delay_ms),
            "toast_ms" => parse_into(value, &mut self.toast_ms),
            _ => false,
        }
    }

    /// Defaults plus the `<meta name="menu-planner:*">` overrides of the page
    pub fn from_document() -> Self {
        let mut config = Self::default();
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return config;
        };
        let Ok(metas) = doc.query_selector_all("meta[name^='menu-planner:']") else {
            return config;
        };
        for i in 0..metas.length() {
            let Some(el) = metas.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
                continue;
            };
            let name = el.get_attribute("name").unwrap_or_default();
            let content = el.get_attribute("content").unwrap_or_default();
            let key = name.trim_start_matches(META_PREFIX);
            if !config.apply(key, &content) {
                web_sys::console::warn_1(&format!("[Config] Ignoring {}={:?}", name, content).into());
            }
        }
        config
    }
}

fn parse_into<T: std::str::FromStr>(value: &str, slot: &mut T) -> bool {
    match value.parse() {
        Ok(v) => {
            *slot = v;
            true
        }
        Err(_) => false,
    }
}

/// Like `parse_into`, raising values below `floor` to it
fn parse_at_least<T: std::str::FromStr + Ord + Copy>(value: &str, floor: T, slot: &mut T) -> bool {
    match value.parse::<T>() {
        Ok(v) => {
            *slot = v.max(floor);
            true
        }
        Err(_) => false,
    }
}

/// Get the UI config from context
pub fn use_config() -> UiConfig {
    use_context::<UiConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let mut config = UiConfig::default();
        assert!(config.apply("debounce_ms", " 120 "));
        assert!(config.apply("suggestion_limit", "5"));
        assert_eq!(config.debounce_ms, 120);
        assert_eq!(config.suggestion_limit, 5);
    }

    #[test]
    fn test_overrides_are_clamped() {
        let mut config = UiConfig::default();
        assert!(config.apply("min_query_chars", "0"));
        assert!(config.apply("suggestion_limit", "0"));
        assert_eq!(config.min_query_chars, 2);
        assert_eq!(config.suggestion_limit, 1);

        assert!(config.apply("min_query_chars", "3"));
        assert_eq!(config.min_query_chars, 3);
    }

    #[test]
    fn test_bad_overrides_leave_defaults() {
        let mut config = UiConfig::default();
        assert!(!config.apply("debounce_ms", "fast"));
        assert!(!config.apply("colour", "blue"));
        assert_eq!(config, UiConfig::default());
    }
}
