//! Editor tunables.
//!
//! Every field has a default from [`crate::consts`]. The host may deserialize
//! a partial JSON object over the defaults; absent fields keep their default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, GRID_SIZE, MIN_ZOOM, STORAGE_KEY, ZOOM_STEP};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Unscaled grid cell size in pixels.
    pub grid_size: f64,
    /// Multiplier for one zoom-in step.
    pub zoom_step: f64,
    /// Lower bound for zoom-out.
    pub min_zoom: f64,
    /// Key-value key holding the saved shapes.
    pub storage_key: String,
    /// Drawing surface width in CSS pixels.
    pub canvas_width: f64,
    /// Drawing surface height in CSS pixels.
    pub canvas_height: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            zoom_step: ZOOM_STEP,
            min_zoom: MIN_ZOOM,
            storage_key: STORAGE_KEY.to_owned(),
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl EditorConfig {
    /// Replace non-positive sizes, a zoom step of 1.0 or less, and an empty
    /// storage key with their defaults.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            grid_size: positive_or(self.grid_size, defaults.grid_size),
            zoom_step: if self.zoom_step > 1.0 { self.zoom_step } else { defaults.zoom_step },
            min_zoom: positive_or(self.min_zoom, defaults.min_zoom),
            storage_key: if self.storage_key.is_empty() { defaults.storage_key } else { self.storage_key },
            canvas_width: positive_or(self.canvas_width, defaults.canvas_width),
            canvas_height: positive_or(self.canvas_height, defaults.canvas_height),
        }
    }
}

/// `value` when strictly positive, otherwise `fallback` (NaN included).
fn positive_or(value: f64, fallback: f64) -> f64 {
    if value > 0.0 { value } else { fallback }
}
