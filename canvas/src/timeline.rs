//! Timeline: the date range covered by all shapes and slider offset math.
//!
//! The slider's integer value is a day offset from the earliest start date.
//! Its maximum is the number of days between that date and the latest end
//! date. With no shapes there is no range, and the slider is disabled.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration};

use crate::doc::Shape;
use crate::error::{DateField, EditorError};

/// `YYYY-MM-DD`, the format of date inputs and persisted dates.
pub const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse the raw value of a date input.
///
/// # Errors
///
/// Returns [`EditorError::InvalidDate`] if `raw` is not a `YYYY-MM-DD` date.
pub fn parse_date(field: DateField, raw: &str) -> Result<Date, EditorError> {
    Date::parse(raw.trim(), ISO_DATE).map_err(|_| EditorError::InvalidDate { field, value: raw.to_owned() })
}

/// Render a date as `YYYY-MM-DD` for the current-date label.
#[must_use]
pub fn format_date(date: Date) -> String {
    date.format(ISO_DATE).unwrap_or_else(|e| {
        log::warn!("cannot format {date} as YYYY-MM-DD: {e}");
        date.to_string()
    })
}

/// Inclusive date range spanned by a set of shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    /// Earliest start date across all shapes; slider offset 0.
    pub min: Date,
    /// Latest end date across all shapes.
    pub max: Date,
}

impl Timeline {
    /// Compute the range across `shapes`, or `None` when no shape has a
    /// usable date range.
    #[must_use]
    pub fn from_shapes(shapes: &[Shape]) -> Option<Self> {
        let min = shapes.iter().filter_map(Shape::date_range).map(|(start, _)| start).min()?;
        let max = shapes.iter().filter_map(Shape::date_range).map(|(_, end)| end).max()?;
        Some(Self { min, max })
    }

    /// Slider maximum: whole days from `min` to `max`, never negative.
    #[must_use]
    pub fn span_days(&self) -> i64 {
        (self.max - self.min).whole_days().max(0)
    }

    /// Clamp a slider offset into `[0, span_days]`.
    #[must_use]
    pub fn clamp_offset(&self, offset: i64) -> i64 {
        offset.clamp(0, self.span_days())
    }

    /// The date `offset` days after `min`.
    ///
    /// The offset is not clamped to the range, so dates past `max` are
    /// reachable. Returns `None` only if the result leaves the supported
    /// calendar.
    #[must_use]
    pub fn date_at(&self, offset: i64) -> Option<Date> {
        self.min.checked_add(Duration::days(offset))
    }
}
