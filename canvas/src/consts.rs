//! Shared constants for the canvas crate.

// ── Grid & zoom ─────────────────────────────────────────────────

/// Size of one grid cell in unscaled pixels.
pub const GRID_SIZE: f64 = 20.0;

/// Factor applied by one zoom-in (divided by one zoom-out).
pub const ZOOM_STEP: f64 = 1.25;

/// Zoom-out never goes below this factor. There is no upper bound.
pub const MIN_ZOOM: f64 = 0.5;

// ── Surface ─────────────────────────────────────────────────────

pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

// ── Colors ──────────────────────────────────────────────────────

/// Grid line stroke.
pub const GRID_COLOR: &str = "#eee";

/// Outline stroke for every shape.
pub const OUTLINE_COLOR: &str = "#000";

/// Fill used for shapes persisted without a color.
pub const FALLBACK_FILL: &str = "rgba(0, 150, 255, 0.4)";

/// Alpha channel of every derived layer color.
pub const LAYER_ALPHA: f64 = 0.4;

// ── Shapes & storage ────────────────────────────────────────────

/// Layer assigned when the layer field is left blank.
pub const DEFAULT_LAYER: &str = "Default";

/// Key under which the shape list is persisted.
pub const STORAGE_KEY: &str = "shapes";
