use crate::model::ViewMode;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Timing and geometry constants for page interactions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Widths at or below this count as mobile (logical pixels)
    pub mobile_breakpoint_px: u32,
    pub search_debounce_ms: u64,
    /// Delay before a shown card fades in
    pub show_delay_ms: u64,
    /// Delay before a faded card leaves the layout
    pub hide_delay_ms: u64,
    pub hide_offset_px: u32,
    pub header_scroll_threshold_px: u32,
    pub reveal_threshold: f32,
    pub reveal_bottom_margin_px: u32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 768,
            search_debounce_ms: 300,
            show_delay_ms: 100,
            hide_delay_ms: 300,
            hide_offset_px: 30,
            header_scroll_threshold_px: 100,
            reveal_threshold: 0.1,
            reveal_bottom_margin_px: 50,
        }
    }
}

impl InteractionConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn show_delay(&self) -> Duration {
        Duration::from_millis(self.show_delay_ms)
    }

    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON catalog of games; the built-in catalog is used when unset
    pub catalog_path: Option<String>,
    pub default_view: ViewMode,
    pub tick_rate_ms: u64,
    pub log_level: String,
    pub interaction: InteractionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_view: ViewMode::Grid,
            tick_rate_ms: 50,
            log_level: "info".to_string(),
            interaction: InteractionConfig::default(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".gamehub-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Option<Config> {
        serde_json::from_str(contents).ok()
    }

    /// Load the config file, falling back to defaults
    pub fn load_or_default() -> Config {
        Self::load().unwrap_or_default()
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_json(r#"{"default_view": "list", "interaction": {"search_debounce_ms": 150}}"#)
            .expect("config should parse");
        assert_eq!(config.default_view, ViewMode::List);
        assert_eq!(config.interaction.search_debounce_ms, 150);
        assert_eq!(config.interaction.mobile_breakpoint_px, 768);
        assert_eq!(config.tick_rate_ms, 50);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(Config::from_json("not json").is_none());
    }

    #[test]
    fn test_durations() {
        let interaction = InteractionConfig::default();
        assert_eq!(interaction.search_debounce(), Duration::from_millis(300));
        assert_eq!(interaction.show_delay(), Duration::from_millis(100));
        assert_eq!(interaction.hide_delay(), Duration::from_millis(300));
    }
}
