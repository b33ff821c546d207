//! Rendering: builds a scene from editor state and paints it to a 2D context.
//!
//! [`build_scene`] is a pure function of the shapes, camera, and view filter;
//! it decides which shapes are drawn and where. [`paint`] is the only place
//! that touches [`web_sys::CanvasRenderingContext2d`]. It clears the surface
//! and redraws everything; there is no damage tracking.
//!
//! Context lookup failures surface from [`paint_canvas`] as `Result<(), JsValue>`.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::collections::HashSet;

use time::Date;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::Camera;
use crate::consts::{GRID_COLOR, OUTLINE_COLOR};
use crate::doc::Shape;

/// Which shapes pass the layer and date filters.
#[derive(Debug, Clone, Copy)]
pub struct ViewFilter<'a> {
    /// Layers whose shapes may be drawn.
    pub visible_layers: &'a HashSet<String>,
    /// Simulated date; with none, no shape is drawn.
    pub date: Option<Date>,
}

impl ViewFilter<'_> {
    /// A shape is shown iff its layer is visible and the simulated date lies
    /// within its inclusive date range.
    #[must_use]
    pub fn shows(&self, shape: &Shape) -> bool {
        self.visible_layers.contains(&shape.layer) && self.date.is_some_and(|date| shape.is_active_on(date))
    }
}

/// One grid line, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridLine {
    /// Full-height line at `x`.
    Vertical(f64),
    /// Full-width line at `y`.
    Horizontal(f64),
}

/// A filled and outlined rectangle, in screen pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RectOp {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
}

/// Everything needed to paint one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub grid: Vec<GridLine>,
    /// Shapes in draw order (later paints over earlier).
    pub rects: Vec<RectOp>,
}

/// Build the frame for `shapes` on a `width` × `height` surface.
#[must_use]
pub fn build_scene(shapes: &[Shape], camera: &Camera, filter: &ViewFilter<'_>, width: f64, height: f64) -> Scene {
    let rects = shapes
        .iter()
        .filter(|shape| filter.shows(shape))
        .map(|shape| RectOp {
            x: camera.to_screen(shape.coords.x),
            y: camera.to_screen(shape.coords.y),
            width: camera.to_screen(shape.coords.width),
            height: camera.to_screen(shape.coords.height),
            fill: shape.fill().to_owned(),
        })
        .collect();

    Scene { width, height, grid: grid_lines(camera.cell_px(), width, height), rects }
}

/// Lines every `step` pixels from the origin while inside the surface.
fn grid_lines(step: f64, width: f64, height: f64) -> Vec<GridLine> {
    let mut lines = Vec::new();
    if step <= 0.0 {
        return lines;
    }
    let mut x = 0.0;
    while x < width {
        lines.push(GridLine::Vertical(x));
        x += step;
    }
    let mut y = 0.0;
    while y < height {
        lines.push(GridLine::Horizontal(y));
        y += step;
    }
    lines
}

/// Paint `scene` onto the 2D context of `canvas`.
///
/// # Errors
///
/// Returns `Err` if the canvas has no 2D context or a `Canvas2D` call fails.
pub fn paint_canvas(canvas: &HtmlCanvasElement, scene: &Scene) -> Result<(), JsValue> {
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)?;
    paint(&ctx, scene);
    Ok(())
}

/// Clear the surface, then draw the grid and the shapes.
pub fn paint(ctx: &CanvasRenderingContext2d, scene: &Scene) {
    ctx.clear_rect(0.0, 0.0, scene.width, scene.height);

    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0);
    for line in &scene.grid {
        ctx.begin_path();
        match *line {
            GridLine::Vertical(x) => {
                ctx.move_to(x, 0.0);
                ctx.line_to(x, scene.height);
            }
            GridLine::Horizontal(y) => {
                ctx.move_to(0.0, y);
                ctx.line_to(scene.width, y);
            }
        }
        ctx.stroke();
    }

    ctx.set_stroke_style_str(OUTLINE_COLOR);
    for rect in &scene.rects {
        ctx.set_fill_style_str(&rect.fill);
        ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
        ctx.stroke_rect(rect.x, rect.y, rect.width, rect.height);
    }
}
