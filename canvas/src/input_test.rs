use time::macros::date;

use super::*;

fn form(start: &str, end: &str, layer: &str) -> ShapeForm {
    ShapeForm { start_date: start.into(), end_date: end.into(), layer: layer.into() }
}

// =============================================================
// Button
// =============================================================

#[test]
fn button_from_dom_codes() {
    assert_eq!(Button::from_dom(0), Button::Primary);
    assert_eq!(Button::from_dom(1), Button::Middle);
    assert_eq!(Button::from_dom(2), Button::Secondary);
}

#[test]
fn button_from_unknown_code_is_primary() {
    assert_eq!(Button::from_dom(4), Button::Primary);
}

// =============================================================
// UiState / InputState
// =============================================================

#[test]
fn ui_state_starts_outside_draw_mode() {
    assert!(!UiState::default().draw_mode);
}

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
}

// =============================================================
// ShapeForm
// =============================================================

#[test]
fn blank_layer_defaults() {
    assert_eq!(form("", "", "").layer_name(), "Default");
}

#[test]
fn explicit_layer_is_kept_verbatim() {
    assert_eq!(form("", "", "Roads").layer_name(), "Roads");
    assert_eq!(form("", "", " ").layer_name(), " ");
}

#[test]
fn dates_parse_both_fields() {
    let (start, end) = form("2024-01-01", "2024-01-10", "A").dates().unwrap();
    assert_eq!(start, date!(2024-01-01));
    assert_eq!(end, date!(2024-01-10));
}

#[test]
fn dates_accept_inverted_range() {
    let (start, end) = form("2024-05-01", "2024-01-01", "A").dates().unwrap();
    assert!(start > end);
}

#[test]
fn dates_report_first_bad_field() {
    let err = form("", "also bad", "A").dates().unwrap_err();
    assert!(matches!(err, EditorError::InvalidDate { field: DateField::Start, .. }));

    let err = form("2024-01-01", "", "A").dates().unwrap_err();
    assert!(matches!(err, EditorError::InvalidDate { field: DateField::End, .. }));
}
