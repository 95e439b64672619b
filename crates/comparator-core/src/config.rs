//! Runtime-tunable simulation parameters.
//!
//! Defaults mirror the values in [`crate::constants`]; the web frontend uses
//! `ComparatorConfig::default()` and tests build variants with struct update
//! syntax.

use crate::constants::*;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct ComparatorConfig {
    pub pixels_per_mm: f64,
    pub zero_block_height_mm: f64,
    pub movement_range_px: f64,
    pub double_tap_window: Duration,
    pub needle_decay_rate: f64,
    pub needle_snap_epsilon: f64,
    pub silhouette_samples: usize,
    pub min_shaft_height_px: f64,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            pixels_per_mm: PIXELS_PER_MM,
            zero_block_height_mm: ZERO_BLOCK_HEIGHT_MM,
            movement_range_px: MOVEMENT_RANGE_PX,
            double_tap_window: Duration::from_millis(DOUBLE_TAP_WINDOW_MS),
            needle_decay_rate: NEEDLE_DECAY_RATE,
            needle_snap_epsilon: NEEDLE_SNAP_EPSILON,
            silhouette_samples: SILHOUETTE_SAMPLES,
            min_shaft_height_px: MIN_SHAFT_HEIGHT_PX,
        }
    }
}

impl ComparatorConfig {
    #[inline]
    pub fn mm_to_px(&self, mm: f64) -> f64 {
        mm * self.pixels_per_mm
    }

    #[inline]
    pub fn px_to_mm(&self, px: f64) -> f64 {
        px / self.pixels_per_mm
    }
}
