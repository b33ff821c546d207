use time::macros::date;

use super::*;
use crate::doc::{GridRect, ShapeDate};

fn shape(start: Date, end: Date) -> Shape {
    Shape::new(GridRect::new(0.0, 0.0, 5.0, 5.0), start, end, "A")
}

// --- parse / format ---

#[test]
fn parse_date_accepts_iso() {
    assert_eq!(parse_date(DateField::Start, "2024-01-16").unwrap(), date!(2024-01-16));
}

#[test]
fn parse_date_trims_whitespace() {
    assert_eq!(parse_date(DateField::End, " 2024-03-01 ").unwrap(), date!(2024-03-01));
}

#[test]
fn parse_date_rejects_blank_and_garbage() {
    for raw in ["", "yesterday", "2024-13-01", "2024-02-30", "01/02/2024"] {
        let err = parse_date(DateField::Start, raw).unwrap_err();
        assert!(
            matches!(&err, EditorError::InvalidDate { field: DateField::Start, value } if value == raw),
            "{raw}: {err}"
        );
    }
}

#[test]
fn invalid_date_message_names_the_field() {
    let err = parse_date(DateField::End, "nope").unwrap_err();
    assert_eq!(err.to_string(), "invalid end date: \"nope\" (expected YYYY-MM-DD)");
}

#[test]
fn format_date_pads_month_and_day() {
    assert_eq!(format_date(date!(2024-01-05)), "2024-01-05");
}

#[test]
fn format_date_pads_short_years_and_parses_back() {
    let early = Date::from_calendar_date(999, time::Month::December, 31).unwrap();
    assert_eq!(format_date(early), "0999-12-31");
    assert_eq!(parse_date(DateField::Start, &format_date(early)).unwrap(), early);
}

// --- Timeline ---

#[test]
fn no_shapes_no_timeline() {
    assert_eq!(Timeline::from_shapes(&[]), None);
}

#[test]
fn range_spans_earliest_start_to_latest_end() {
    let shapes = [
        shape(date!(2024-03-01), date!(2024-03-05)),
        shape(date!(2024-01-10), date!(2024-01-20)),
        shape(date!(2024-02-01), date!(2024-04-01)),
    ];
    let timeline = Timeline::from_shapes(&shapes).unwrap();
    assert_eq!(timeline.min, date!(2024-01-10));
    assert_eq!(timeline.max, date!(2024-04-01));
    assert_eq!(timeline.span_days(), 82);
}

#[test]
fn shapes_without_usable_dates_are_left_out_of_the_range() {
    let mut blank_end = shape(date!(2023-01-01), date!(2023-01-02));
    blank_end.end_date = ShapeDate::Unparsed(String::new());
    let shapes = [blank_end.clone(), shape(date!(2024-01-10), date!(2024-01-20))];
    let timeline = Timeline::from_shapes(&shapes).unwrap();
    assert_eq!(timeline.min, date!(2024-01-10));
    assert_eq!(timeline.max, date!(2024-01-20));
    assert_eq!(Timeline::from_shapes(&[blank_end]), None);
}

#[test]
fn single_day_shape_has_zero_span() {
    let timeline = Timeline::from_shapes(&[shape(date!(2024-01-01), date!(2024-01-01))]).unwrap();
    assert_eq!(timeline.span_days(), 0);
    assert_eq!(timeline.clamp_offset(5), 0);
}

#[test]
fn inverted_range_clamps_span_to_zero() {
    let timeline = Timeline::from_shapes(&[shape(date!(2024-02-01), date!(2024-01-01))]).unwrap();
    assert_eq!(timeline.span_days(), 0);
}

#[test]
fn clamp_offset_bounds_both_sides() {
    let timeline = Timeline::from_shapes(&[shape(date!(2024-01-01), date!(2024-01-10))]).unwrap();
    assert_eq!(timeline.clamp_offset(-3), 0);
    assert_eq!(timeline.clamp_offset(4), 4);
    assert_eq!(timeline.clamp_offset(15), 9);
}

#[test]
fn date_at_offsets_from_min() {
    let timeline = Timeline::from_shapes(&[shape(date!(2024-01-01), date!(2024-01-10))]).unwrap();
    assert_eq!(timeline.date_at(0), Some(date!(2024-01-01)));
    assert_eq!(timeline.date_at(15), Some(date!(2024-01-16)));
}

#[test]
fn date_at_crosses_month_and_leap_day() {
    let timeline = Timeline { min: date!(2024-02-27), max: date!(2024-03-05) };
    assert_eq!(timeline.date_at(2), Some(date!(2024-02-29)));
    assert_eq!(timeline.date_at(3), Some(date!(2024-03-01)));
}

#[test]
fn date_at_out_of_calendar_is_none() {
    let timeline = Timeline { min: date!(9999-12-31), max: date!(9999-12-31) };
    assert_eq!(timeline.date_at(1), None);
}
