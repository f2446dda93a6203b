//! Timing and spacing configuration for the popover widget.
//!
//! Responsibilities:
//! - Define the tunable delays and margins with their historical defaults.
//! - Provide serialization so embedders can load settings from files.
//!
//! Invariants:
//! - Default values are provided via named constants, not magic numbers.
//! - Every field has a serde default, so partial config files work.

use serde::{Deserialize, Serialize};

/// Default delay before the reveal class is applied to a freshly attached
/// popover, in milliseconds. The gap lets the host paint the element in its
/// pre-transition style first so the class change actually animates.
pub const DEFAULT_SHOW_DELAY_MS: u64 = 10;

/// Default delay before a dismissed popover is detached, in milliseconds.
/// Matches the externally-styled fade-out duration.
pub const DEFAULT_HIDE_DELAY_MS: u64 = 300;

/// Default vertical gap between the popover and the top edge of its anchor,
/// in pixels.
pub const DEFAULT_ANCHOR_GAP: f64 = 10.0;

/// Default minimum distance kept between the popover and the viewport
/// edges, in pixels.
pub const DEFAULT_VIEWPORT_MARGIN: f64 = 10.0;

/// Tunable timing and spacing settings for the popover widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopoverConfig {
    /// Delay before the reveal class is applied (ms).
    #[serde(default = "default_show_delay_ms")]
    pub show_delay_ms: u64,
    /// Delay before a dismissed popover is detached (ms).
    #[serde(default = "default_hide_delay_ms")]
    pub hide_delay_ms: u64,
    /// Gap between the popover and its anchor (px).
    #[serde(default = "default_anchor_gap")]
    pub anchor_gap: f64,
    /// Minimum distance from the viewport edges (px).
    #[serde(default = "default_viewport_margin")]
    pub viewport_margin: f64,
}

fn default_show_delay_ms() -> u64 {
    DEFAULT_SHOW_DELAY_MS
}

fn default_hide_delay_ms() -> u64 {
    DEFAULT_HIDE_DELAY_MS
}

fn default_anchor_gap() -> f64 {
    DEFAULT_ANCHOR_GAP
}

fn default_viewport_margin() -> f64 {
    DEFAULT_VIEWPORT_MARGIN
}

impl Default for PopoverConfig {
    fn default() -> Self {
        Self {
            show_delay_ms: DEFAULT_SHOW_DELAY_MS,
            hide_delay_ms: DEFAULT_HIDE_DELAY_MS,
            anchor_gap: DEFAULT_ANCHOR_GAP,
            viewport_margin: DEFAULT_VIEWPORT_MARGIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = PopoverConfig::default();
        assert_eq!(config.show_delay_ms, 10);
        assert_eq!(config.hide_delay_ms, 300);
        assert_eq!(config.anchor_gap, 10.0);
        assert_eq!(config.viewport_margin, 10.0);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config: PopoverConfig = toml::from_str("hide_delay_ms = 150").unwrap();
        assert_eq!(config.hide_delay_ms, 150);
        assert_eq!(config.show_delay_ms, DEFAULT_SHOW_DELAY_MS);
        assert_eq!(config.viewport_margin, DEFAULT_VIEWPORT_MARGIN);
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = PopoverConfig {
            show_delay_ms: 20,
            hide_delay_ms: 500,
            anchor_gap: 8.0,
            viewport_margin: 16.0,
        };
        let rendered = toml::to_string(&config).unwrap();
        let parsed: PopoverConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
