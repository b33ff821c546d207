use std::collections::HashSet;

use time::Date;

use crate::camera::{Camera, Cell, Point};
use crate::config::EditorConfig;
use crate::doc::{GridRect, Shape, ShapeStore};
use crate::error::EditorError;
use crate::input::{Button, InputState, ShapeForm, UiState};
use crate::render::{self, Scene, ViewFilter};
use crate::storage::{self, KeyValueStore};
use crate::timeline::Timeline;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A shape was appended to the store.
    ShapeCreated(Shape),
    /// The set of distinct layers changed; rebuild the layer toggles.
    LayersChanged,
    /// The timeline range or the simulated date changed.
    TimelineChanged,
    /// The canvas must be repainted.
    RenderNeeded,
}

/// Result of [`Engine::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing saved yet; the store is unchanged.
    NothingSaved,
    /// The store was replaced with this many shapes.
    Loaded(usize),
}

/// One entry of the layer filter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerToggle {
    pub name: String,
    pub visible: bool,
}

/// Axis-aligned rectangle between two grid cells.
///
/// Top-left is the per-axis minimum; width and height are the absolute
/// per-axis difference, so a click without drag yields a zero-size rectangle.
#[must_use]
pub fn drag_rect(anchor: Cell, release: Cell) -> GridRect {
    GridRect {
        x: anchor.x.min(release.x),
        y: anchor.y.min(release.y),
        width: (anchor.x - release.x).abs(),
        height: (anchor.y - release.y).abs(),
    }
}

/// Editor state and the operations the host drives it with.
///
/// Owns the shape store and every piece of view state (zoom, draw mode, the
/// draw gesture, visible layers, timeline position). Holds no browser handles,
/// so it runs natively under test.
pub struct Engine {
    pub doc: ShapeStore,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    visible_layers: HashSet<String>,
    timeline_offset: i64,
    config: EditorConfig,
    /// Set when the last load failed; saving is refused until cleared.
    overwrite_blocked: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        let config = config.sanitized();
        Self {
            doc: ShapeStore::new(),
            camera: Camera::from_config(&config),
            ui: UiState::default(),
            input: InputState::default(),
            visible_layers: HashSet::new(),
            timeline_offset: 0,
            config,
            overwrite_blocked: false,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    // --- Draw mode ---

    /// Flip draw mode, returning the new value.
    pub fn toggle_draw_mode(&mut self) -> bool {
        self.set_draw_mode(!self.ui.draw_mode);
        self.ui.draw_mode
    }

    pub fn set_draw_mode(&mut self, on: bool) {
        self.ui.draw_mode = on;
    }

    #[must_use]
    pub fn draw_mode(&self) -> bool {
        self.ui.draw_mode
    }

    // --- Pointer events ---

    /// Begin a draw at the grid cell under `screen_pt`.
    ///
    /// Ignored outside draw mode and for non-primary buttons. A pointer-down
    /// during an unfinished draw restarts it from the new anchor.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if !self.ui.draw_mode || button != Button::Primary {
            return Vec::new();
        }
        let anchor = self.camera.screen_to_cell(screen_pt);
        self.input = InputState::Drawing { anchor };
        Vec::new()
    }

    /// Finish the current draw at `screen_pt`, creating a shape from `form`.
    ///
    /// Returns no actions when no draw is in progress. The gesture ends even
    /// when the form is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidDate`] if either date input is not a
    /// `YYYY-MM-DD` date; no shape is created.
    pub fn on_pointer_up(&mut self, screen_pt: Point, form: &ShapeForm) -> Result<Vec<Action>, EditorError> {
        let InputState::Drawing { anchor } = std::mem::take(&mut self.input) else {
            return Ok(Vec::new());
        };
        let release = self.camera.screen_to_cell(screen_pt);
        let (start, end) = form.dates().inspect_err(|e| log::warn!("draw rejected: {e}"))?;
        let shape = Shape::new(drag_rect(anchor, release), start, end, form.layer_name());
        Ok(self.add_shape(shape))
    }

    /// Pointer left the canvas: abandon any draw in progress.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        if matches!(self.input, InputState::Drawing { .. }) {
            log::debug!("draw cancelled: pointer left canvas");
        }
        self.input = InputState::Idle;
        Vec::new()
    }

    /// Append a shape and refresh everything derived from the store.
    ///
    /// A layer seen for the first time starts visible; existing layers keep
    /// their toggle state.
    pub fn add_shape(&mut self, shape: Shape) -> Vec<Action> {
        let new_layer = !self.doc.all().iter().any(|s| s.layer == shape.layer);
        if new_layer {
            self.visible_layers.insert(shape.layer.clone());
        }
        log::debug!("shape created on layer {:?}: {:?}", shape.layer, shape.coords);
        self.doc.add(shape.clone());
        self.clamp_timeline_offset();

        let mut actions = vec![Action::ShapeCreated(shape)];
        if new_layer {
            actions.push(Action::LayersChanged);
        }
        actions.push(Action::TimelineChanged);
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Layers ---

    /// Show or hide every shape on `layer`.
    pub fn set_layer_visible(&mut self, layer: &str, visible: bool) -> Vec<Action> {
        if visible {
            self.visible_layers.insert(layer.to_owned());
        } else {
            self.visible_layers.remove(layer);
        }
        vec![Action::RenderNeeded]
    }

    #[must_use]
    pub fn is_layer_visible(&self, layer: &str) -> bool {
        self.visible_layers.contains(layer)
    }

    /// One toggle per distinct layer, in first-appearance order.
    #[must_use]
    pub fn layer_toggles(&self) -> Vec<LayerToggle> {
        self.doc
            .layers()
            .into_iter()
            .map(|name| {
                let visible = self.visible_layers.contains(&name);
                LayerToggle { name, visible }
            })
            .collect()
    }

    // --- Zoom ---

    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.camera.zoom_in();
        log::debug!("zoom in: {}", self.camera.zoom);
        vec![Action::RenderNeeded]
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.camera.zoom_out();
        log::debug!("zoom out: {}", self.camera.zoom);
        vec![Action::RenderNeeded]
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.camera.zoom
    }

    // --- Timeline ---

    /// Date range across all shapes; `None` when the store is empty.
    #[must_use]
    pub fn timeline(&self) -> Option<Timeline> {
        Timeline::from_shapes(self.doc.all())
    }

    /// Current slider value (days after the timeline minimum).
    #[must_use]
    pub fn timeline_offset(&self) -> i64 {
        self.timeline_offset
    }

    /// Move the slider. The offset is clamped to the timeline range.
    pub fn scrub(&mut self, offset: i64) -> Vec<Action> {
        self.timeline_offset = offset;
        self.clamp_timeline_offset();
        vec![Action::TimelineChanged, Action::RenderNeeded]
    }

    /// The simulated date shown on the timeline label.
    #[must_use]
    pub fn current_date(&self) -> Option<Date> {
        self.timeline()?.date_at(self.timeline_offset)
    }

    fn clamp_timeline_offset(&mut self) {
        self.timeline_offset = self
            .timeline()
            .map_or(0, |timeline| timeline.clamp_offset(self.timeline_offset));
    }

    // --- Rendering ---

    /// Build the scene for the current state.
    #[must_use]
    pub fn scene(&self) -> Scene {
        let filter = ViewFilter { visible_layers: &self.visible_layers, date: self.current_date() };
        render::build_scene(
            self.doc.all(),
            &self.camera,
            &filter,
            self.config.canvas_width,
            self.config.canvas_height,
        )
    }

    // --- Persistence ---

    /// Write every shape to `kv` under the configured key.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::OverwriteBlocked`] after a failed [`Engine::load`]
    /// until [`Engine::allow_overwrite`] is called. Returns
    /// [`EditorError::Serialize`] or [`EditorError::Storage`] when the write
    /// fails; the in-memory store is unaffected either way.
    pub fn save<S: KeyValueStore + ?Sized>(&self, kv: &mut S) -> Result<usize, EditorError> {
        if self.overwrite_blocked {
            log::warn!("save refused: saved shapes failed to load");
            return Err(EditorError::OverwriteBlocked);
        }
        let count = storage::save_shapes(kv, &self.config.storage_key, &self.doc)?;
        log::info!("saved {count} shapes");
        Ok(count)
    }

    /// Replace the store with the shapes saved in `kv`, if any.
    ///
    /// On success every layer becomes visible and the slider returns to the
    /// start of the timeline.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::MalformedSnapshot`] if the saved blob cannot be
    /// decoded, or [`EditorError::Storage`] if it cannot be read. The store and
    /// the saved blob are left untouched, and later saves are refused until
    /// [`Engine::allow_overwrite`].
    pub fn load<S: KeyValueStore + ?Sized>(&mut self, kv: &S) -> Result<LoadOutcome, EditorError> {
        let loaded = storage::load_shapes(kv, &self.config.storage_key).inspect_err(|e| {
            log::warn!("load failed: {e}");
            self.overwrite_blocked = true;
        })?;
        self.overwrite_blocked = false;
        let Some(shapes) = loaded else {
            return Ok(LoadOutcome::NothingSaved);
        };
        let count = shapes.len();
        let undated = shapes.iter().filter(|s| s.date_range().is_none()).count();
        if undated > 0 {
            log::warn!("{undated} loaded shapes have no usable date range and will not render");
        }
        self.doc.replace_all(shapes);
        self.visible_layers = self.doc.layers().into_iter().collect();
        self.timeline_offset = 0;
        self.input = InputState::Idle;
        log::info!("loaded {count} shapes");
        Ok(LoadOutcome::Loaded(count))
    }

    /// Let the next save replace a saved blob that failed to load.
    pub fn allow_overwrite(&mut self) {
        self.overwrite_blocked = false;
    }

    #[must_use]
    pub fn overwrite_blocked(&self) -> bool {
        self.overwrite_blocked
    }
}
