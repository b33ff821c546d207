//! Editor state shared by every component.
//!
//! ARCHITECTURE
//! ============
//! Wraps `canvas::engine::Engine` with the shape form drafts and the status
//! line. Engine actions are folded in here: `RenderNeeded` bumps
//! `render_seq`, which the canvas host watches to repaint.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use std::fmt;

use canvas::camera::Point;
use canvas::config::EditorConfig;
use canvas::engine::{Action, Engine, LoadOutcome};
use canvas::error::EditorError;
use canvas::input::{Button, ShapeForm};
use canvas::storage::KeyValueStore;
use canvas::timeline::format_date;

/// Confirmation shown after a successful save.
pub const SAVED_MESSAGE: &str = "Shapes saved!";

/// Shown when a save would replace saved shapes that failed to load.
pub const OVERWRITE_WARNING: &str =
    "Saved shapes could not be loaded. Press Save again to overwrite them with the current canvas.";

/// Severity of the status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One message on the status line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// Timeline slider attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderState {
    pub enabled: bool,
    pub max: i64,
    pub value: i64,
}

pub struct EditorState {
    pub engine: Engine,
    pub form: ShapeForm,
    pub status: Option<StatusMessage>,
    /// Incremented whenever the canvas must be repainted.
    pub render_seq: u64,
    /// The user was warned that the next save replaces unloadable shapes.
    overwrite_confirm_pending: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorState {
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
            form: ShapeForm::default(),
            status: None,
            render_seq: 0,
            overwrite_confirm_pending: false,
        }
    }

    fn apply(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::ShapeCreated(shape) => {
                    log::info!("shape added on layer {:?} ({} total)", shape.layer, self.engine.doc.len());
                }
                Action::LayersChanged => log::debug!("layers: {:?}", self.engine.doc.layers()),
                Action::TimelineChanged => {}
                Action::RenderNeeded => self.render_seq = self.render_seq.wrapping_add(1),
            }
        }
    }

    /// Put an error on the status line.
    pub fn report_error(&mut self, err: &dyn fmt::Display) {
        log::warn!("{err}");
        self.status = Some(StatusMessage { kind: StatusKind::Error, text: err.to_string() });
    }

    pub fn dismiss_status(&mut self) {
        self.status = None;
    }

    // --- Chrome ---

    pub fn toggle_draw_mode(&mut self) {
        self.engine.toggle_draw_mode();
    }

    pub fn zoom_in(&mut self) {
        let actions = self.engine.zoom_in();
        self.apply(actions);
    }

    pub fn zoom_out(&mut self) {
        let actions = self.engine.zoom_out();
        self.apply(actions);
    }

    pub fn set_layer_visible(&mut self, layer: &str, visible: bool) {
        let actions = self.engine.set_layer_visible(layer, visible);
        self.apply(actions);
    }

    /// Apply the raw value of the timeline slider. Non-numeric input is ignored.
    pub fn scrub_input(&mut self, raw: &str) {
        let Ok(offset) = raw.trim().parse::<i64>() else {
            return;
        };
        let actions = self.engine.scrub(offset);
        self.apply(actions);
    }

    // --- Canvas pointer ---

    pub fn pointer_down(&mut self, point: Point, button: Button) {
        let actions = self.engine.on_pointer_down(point, button);
        self.apply(actions);
    }

    /// Complete a draw using the current form values.
    pub fn pointer_up(&mut self, point: Point) {
        match self.engine.on_pointer_up(point, &self.form) {
            Ok(actions) => self.apply(actions),
            Err(err) => self.report_error(&err),
        }
    }

    pub fn pointer_leave(&mut self) {
        let actions = self.engine.on_pointer_leave();
        self.apply(actions);
    }

    // --- Persistence ---

    /// Save every shape and confirm on the status line.
    ///
    /// After a failed load the first save only warns; a second save confirms
    /// and replaces the unloadable blob.
    pub fn save_to<S: KeyValueStore + ?Sized>(&mut self, kv: &mut S) {
        if std::mem::take(&mut self.overwrite_confirm_pending) {
            self.engine.allow_overwrite();
        }
        match self.engine.save(kv) {
            Ok(_) => self.status = Some(StatusMessage { kind: StatusKind::Info, text: SAVED_MESSAGE.to_owned() }),
            Err(EditorError::OverwriteBlocked) => {
                self.overwrite_confirm_pending = true;
                self.report_error(&OVERWRITE_WARNING);
            }
            Err(err) => self.report_error(&err),
        }
    }

    /// Restore saved shapes, reporting a malformed or unreadable blob.
    pub fn load_from<S: KeyValueStore + ?Sized>(&mut self, kv: &S) {
        match self.engine.load(kv) {
            Ok(LoadOutcome::Loaded(_)) => self.apply(vec![Action::RenderNeeded]),
            Ok(LoadOutcome::NothingSaved) => {}
            Err(err) => self.report_error(&format_args!("Saved shapes could not be loaded: {err}")),
        }
    }

    // --- Derived views ---

    /// Timeline slider range and position; disabled with no shapes.
    #[must_use]
    pub fn slider(&self) -> SliderState {
        match self.engine.timeline() {
            Some(timeline) => {
                SliderState { enabled: true, max: timeline.span_days(), value: self.engine.timeline_offset() }
            }
            None => SliderState { enabled: false, max: 0, value: 0 },
        }
    }

    /// Current simulated date label.
    #[must_use]
    pub fn date_label(&self) -> String {
        self.engine
            .current_date()
            .map_or_else(|| "No shapes yet".to_owned(), format_date)
    }
}
