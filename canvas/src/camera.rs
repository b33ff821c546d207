#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::config::EditorConfig;

/// A point in screen space (CSS pixels relative to the canvas origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A grid cell index. Both axes are whole numbers stored as `f64` so they
/// flow straight into shape coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub x: f64,
    pub y: f64,
}

/// Zoom state for the grid canvas.
///
/// `zoom` is a scale factor (1.0 = no zoom). The grid origin is pinned to the
/// top-left of the surface; there is no panning.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub zoom: f64,
    pub grid_size: f64,
    pub zoom_step: f64,
    pub min_zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

impl Camera {
    #[must_use]
    pub fn from_config(config: &EditorConfig) -> Self {
        Self { zoom: 1.0, grid_size: config.grid_size, zoom_step: config.zoom_step, min_zoom: config.min_zoom }
    }

    /// Pixel size of one grid cell at the current zoom.
    #[must_use]
    pub fn cell_px(&self) -> f64 {
        self.grid_size * self.zoom
    }

    /// Grid cell under a screen point: `floor(px / cell_px)` per axis.
    #[must_use]
    pub fn screen_to_cell(&self, screen: Point) -> Cell {
        let step = self.cell_px();
        Cell { x: (screen.x / step).floor(), y: (screen.y / step).floor() }
    }

    /// Scale an unscaled grid-unit length to screen pixels.
    #[must_use]
    pub fn to_screen(&self, grid_units: f64) -> f64 {
        grid_units * self.zoom
    }

    pub fn zoom_in(&mut self) {
        self.zoom *= self.zoom_step;
    }

    /// Divide the zoom by one step, never going below `min_zoom`.
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / self.zoom_step).max(self.min_zoom);
    }
}
