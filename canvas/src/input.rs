//! Input model: mouse buttons, the shape form, and the draw gesture state.
//!
//! `UiState` is the draw-mode toggle. `InputState` is the gesture tracked
//! between pointer-down and pointer-up. `ShapeForm` carries the raw values of
//! the date and layer inputs read when a draw completes.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use time::Date;

use crate::camera::Cell;
use crate::consts::DEFAULT_LAYER;
use crate::error::{DateField, EditorError};
use crate::timeline::parse_date;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// Persistent UI state visible to the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiState {
    /// Pointer drags create shapes while set.
    pub draw_mode: bool,
}

/// Draw gesture state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A rectangle is being drawn from `anchor`.
    Drawing {
        /// Grid cell under the pointer at pointer-down.
        anchor: Cell,
    },
}

/// Raw values of the shape form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeForm {
    /// Start date input (`YYYY-MM-DD`).
    pub start_date: String,
    /// End date input (`YYYY-MM-DD`).
    pub end_date: String,
    /// Layer name input; blank means [`DEFAULT_LAYER`].
    pub layer: String,
}

impl ShapeForm {
    /// Layer name to assign, defaulting when the input is empty.
    #[must_use]
    pub fn layer_name(&self) -> &str {
        if self.layer.is_empty() { DEFAULT_LAYER } else { &self.layer }
    }

    /// Parse both date inputs. The range itself is not validated.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidDate`] for the first input that is not a
    /// `YYYY-MM-DD` date.
    pub fn dates(&self) -> Result<(Date, Date), EditorError> {
        let start = parse_date(DateField::Start, &self.start_date)?;
        let end = parse_date(DateField::End, &self.end_date)?;
        Ok((start, end))
    }
}
