#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Defaults ---

#[test]
fn camera_default_zoom_is_one() {
    let cam = Camera::default();
    assert_eq!(cam.zoom, 1.0);
    assert_eq!(cam.grid_size, 20.0);
}

#[test]
fn cell_px_scales_with_zoom() {
    let mut cam = Camera::default();
    assert!(approx_eq(cam.cell_px(), 20.0));
    cam.zoom = 2.0;
    assert!(approx_eq(cam.cell_px(), 40.0));
}

// --- screen_to_cell ---

#[test]
fn screen_to_cell_floors_each_axis() {
    let cam = Camera::default();
    assert_eq!(cam.screen_to_cell(Point::new(0.0, 0.0)), Cell { x: 0.0, y: 0.0 });
    assert_eq!(cam.screen_to_cell(Point::new(19.9, 20.0)), Cell { x: 0.0, y: 1.0 });
    assert_eq!(cam.screen_to_cell(Point::new(105.0, 61.0)), Cell { x: 5.0, y: 3.0 });
}

#[test]
fn screen_to_cell_respects_zoom() {
    let cam = Camera { zoom: 2.0, ..Camera::default() };
    assert_eq!(cam.screen_to_cell(Point::new(79.0, 80.0)), Cell { x: 1.0, y: 2.0 });
}

#[test]
fn screen_to_cell_negative_point_floors_down() {
    let cam = Camera::default();
    assert_eq!(cam.screen_to_cell(Point::new(-1.0, -21.0)), Cell { x: -1.0, y: -2.0 });
}

#[test]
fn to_screen_multiplies_by_zoom() {
    let cam = Camera { zoom: 1.5, ..Camera::default() };
    assert!(approx_eq(cam.to_screen(4.0), 6.0));
}

// --- Zoom ---

#[test]
fn zoom_in_multiplies_by_step() {
    let mut cam = Camera::default();
    cam.zoom_in();
    assert!(approx_eq(cam.zoom, 1.25));
    cam.zoom_in();
    assert!(approx_eq(cam.zoom, 1.5625));
}

#[test]
fn zoom_in_has_no_upper_bound() {
    let mut cam = Camera::default();
    for _ in 0..100 {
        cam.zoom_in();
    }
    assert!(cam.zoom > 1_000_000.0);
}

#[test]
fn zoom_out_divides_by_step() {
    let mut cam = Camera::default();
    cam.zoom_out();
    assert!(approx_eq(cam.zoom, 0.8));
}

#[test]
fn zoom_out_clamps_at_minimum() {
    let mut cam = Camera::default();
    for _ in 0..20 {
        cam.zoom_out();
        assert!(cam.zoom >= 0.5);
    }
    assert_eq!(cam.zoom, 0.5);
}

#[test]
fn zoom_in_after_clamp_restarts_from_minimum() {
    let mut cam = Camera::default();
    for _ in 0..10 {
        cam.zoom_out();
    }
    cam.zoom_in();
    assert!(approx_eq(cam.zoom, 0.625));
}
