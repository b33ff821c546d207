//! Canvas engine for the timegrid editor.
//!
//! This crate is compiled to WebAssembly and runs in the browser, and builds
//! natively for tests. It owns everything behind the `<canvas>` element:
//! the shape store, per-layer colors, the timeline that maps slider offsets to
//! dates, the interaction state machine that turns pointer events into shapes,
//! and the renderer. The host Leptos app only wires DOM events to the
//! [`engine::Engine`] and asks for repaints.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Editor state and the event-driven operations on it |
//! | [`doc`] | Shape records and the ordered in-memory store |
//! | [`camera`] | Zoom state and pixel/grid-cell conversions |
//! | [`input`] | Pointer buttons, shape form input, and the draw gesture state |
//! | [`timeline`] | Date range across shapes and slider offset arithmetic |
//! | [`color`] | Deterministic layer-name colors |
//! | [`render`] | Scene building and painting to a 2D context |
//! | [`storage`] | Key-value persistence (`localStorage` or in-memory) |
//! | [`config`] | Editor tunables with defaults |
//! | [`error`] | Error types |
//! | [`consts`] | Shared constants (zoom limits, colors, keys) |

pub mod camera;
pub mod color;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod input;
pub mod render;
pub mod storage;
pub mod timeline;
