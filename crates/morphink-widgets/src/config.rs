//! Menu tuning constants and configuration.

use serde::{Deserialize, Serialize};

/// Pixels the pointer must stray off the menu axis before the menu
/// slides. Suppresses jitter.
pub const JITTER_THRESHOLD: f64 = 2.0;

/// Perpendicular exit distance beyond which leaving an item closes the
/// whole menu instead of changing the active item.
pub const SIDE_EXIT_THRESHOLD: f64 = 10.0;

/// Item glyph size in screen pixels.
pub const ITEM_SIZE: f64 = 16.0;

/// Distance from the opening hotspot to the benchmark along the axis.
pub const BENCHMARK_OFFSET: f64 = ITEM_SIZE / 2.0;

/// Tunable menu behavior thresholds.
///
/// The defaults are the constants above; applications may deserialize an
/// override from their settings file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub jitter_threshold: f64,
    pub side_exit_threshold: f64,
    pub item_size: f64,
    pub benchmark_offset: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            jitter_threshold: JITTER_THRESHOLD,
            side_exit_threshold: SIDE_EXIT_THRESHOLD,
            item_size: ITEM_SIZE,
            benchmark_offset: BENCHMARK_OFFSET,
        }
    }
}
