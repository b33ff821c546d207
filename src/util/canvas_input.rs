//! Pointer event helpers for the canvas host.

#[cfg(feature = "csr")]
use canvas::camera::Point as CanvasPoint;
#[cfg(feature = "csr")]
use canvas::input::Button as CanvasButton;

#[cfg(feature = "csr")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> CanvasPoint {
    CanvasPoint::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "csr")]
pub fn pointer_button(ev: &leptos::ev::PointerEvent) -> CanvasButton {
    CanvasButton::from_dom(ev.button())
}
