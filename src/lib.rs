//! Timegrid: a browser grid editor for time-bounded, layered rectangles.
//!
//! ARCHITECTURE
//! ============
//! The `canvas` crate holds the editor core. This crate is the Leptos
//! client-side-rendered shell around it:
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | `app` | Root component, config and saved-shape loading |
//! | `components` | Toolbar, shape form, layer filters, canvas, timeline, status line |
//! | `state` | `EditorState` signal payload wrapping the engine |
//! | `util` | localStorage and pointer-event glue |

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
