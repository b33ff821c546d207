//! Document model: shape records and the ordered in-memory store.
//!
//! A [`Shape`] is a grid-aligned rectangle tagged with an inclusive date range,
//! a layer name, and a color derived from that layer when the shape was drawn.
//! The [`ShapeStore`] keeps shapes in insertion order, which is also draw
//! order: later shapes paint over earlier ones.
//!
//! Shapes serialize to the JSON layout the editor persists:
//! `{"coords":[x,y,w,h],"startDate":"YYYY-MM-DD","endDate":"YYYY-MM-DD","layer":"..","color":".."}`.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::color::layer_color;
use crate::consts::FALLBACK_FILL;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Axis-aligned rectangle in unscaled grid units.
///
/// Serialized as a four-element array `[x, y, width, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct GridRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl GridRect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

impl From<[f64; 4]> for GridRect {
    fn from([x, y, width, height]: [f64; 4]) -> Self {
        Self { x, y, width, height }
    }
}

impl From<GridRect> for [f64; 4] {
    fn from(rect: GridRect) -> Self {
        [rect.x, rect.y, rect.width, rect.height]
    }
}

/// A date as persisted in a shape record.
///
/// Text that is not a `YYYY-MM-DD` date (blank date inputs saved by older
/// pages) is kept verbatim so a save writes it back unchanged. Shapes with
/// such a date load but never render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShapeDate {
    Day(#[serde(with = "iso_date")] Date),
    Unparsed(String),
}

impl ShapeDate {
    /// The calendar date, if the stored text is one.
    #[must_use]
    pub fn day(&self) -> Option<Date> {
        match self {
            Self::Day(date) => Some(*date),
            Self::Unparsed(_) => None,
        }
    }
}

impl From<Date> for ShapeDate {
    fn from(date: Date) -> Self {
        Self::Day(date)
    }
}

/// A timestamped, layered rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    /// Position and size in grid units.
    pub coords: GridRect,
    /// First day the shape is visible.
    pub start_date: ShapeDate,
    /// Last day the shape is visible (inclusive).
    pub end_date: ShapeDate,
    /// Layer name controlling visibility.
    pub layer: String,
    /// CSS fill color, fixed at creation. Empty for shapes saved without one.
    #[serde(default)]
    pub color: String,
}

impl Shape {
    /// Create a shape, deriving its color from `layer`.
    #[must_use]
    pub fn new(coords: GridRect, start_date: Date, end_date: Date, layer: impl Into<String>) -> Self {
        let layer = layer.into();
        let color = layer_color(&layer);
        Self { coords, start_date: start_date.into(), end_date: end_date.into(), layer, color }
    }

    /// Start and end dates, or `None` if either is not a calendar date.
    #[must_use]
    pub fn date_range(&self) -> Option<(Date, Date)> {
        Some((self.start_date.day()?, self.end_date.day()?))
    }

    /// Whether `date` falls within `[start_date, end_date]`.
    #[must_use]
    pub fn is_active_on(&self, date: Date) -> bool {
        self.date_range().is_some_and(|(start, end)| start <= date && date <= end)
    }

    /// Fill color, or the fallback fill when none was stored.
    #[must_use]
    pub fn fill(&self) -> &str {
        if self.color.is_empty() { FALLBACK_FILL } else { &self.color }
    }
}

/// Ordered in-memory store of shapes.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Append a shape. No deduplication.
    pub fn add(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// All shapes in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Shape] {
        &self.shapes
    }

    /// Replace the full contents, e.g. with a loaded snapshot.
    pub fn replace_all(&mut self, shapes: Vec<Shape>) {
        self.shapes = shapes;
    }

    /// Distinct layer names in order of first appearance.
    #[must_use]
    pub fn layers(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for shape in &self.shapes {
            if !names.contains(&shape.layer) {
                names.push(shape.layer.clone());
            }
        }
        names
    }

    /// Encode all shapes as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if encoding fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.shapes)
    }

    /// Decode a JSON array of shapes.
    ///
    /// # Errors
    ///
    /// Returns the deserializer error if `raw` is not a valid shape list.
    pub fn from_json(raw: &str) -> Result<Vec<Shape>, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Number of shapes in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the store holds no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
