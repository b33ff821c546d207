//! Canvas element bridging DOM pointer events and the editor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pointer handlers forward into `EditorState`; an effect keyed on the
//! state's render sequence rebuilds the scene and repaints from scratch.
//! Everything browser-facing is compiled only with the `csr` feature.

use leptos::prelude::*;

use crate::state::editor::EditorState;
#[cfg(feature = "csr")]
use crate::util::canvas_input::{pointer_button, pointer_point};

#[component]
pub fn CanvasHost() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    let (width, height) = editor.with_untracked(|s| (s.engine.config().canvas_width, s.engine.config().canvas_height));
    let draw_mode = move || editor.with(|s| s.engine.draw_mode());
    let class = move || if draw_mode() { "canvas-host canvas-host--drawing" } else { "canvas-host" };

    #[cfg(feature = "csr")]
    {
        let render_seq = Memo::new(move |_| editor.with(|s| s.render_seq));
        Effect::new(move || {
            render_seq.track();
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            let scene = editor.with_untracked(|s| s.engine.scene());
            if let Err(err) = canvas::render::paint_canvas(&canvas, &scene) {
                log::error!("canvas paint failed: {err:?}");
            }
        });
    }

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "csr")]
        {
            ev.prevent_default();
            let point = pointer_point(&ev);
            let button = pointer_button(&ev);
            editor.update(|s| s.pointer_down(point, button));
        }
        #[cfg(not(feature = "csr"))]
        {
            drop(ev);
        }
    };

    let on_pointer_up = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "csr")]
        {
            let point = pointer_point(&ev);
            editor.update(|s| s.pointer_up(point));
        }
        #[cfg(not(feature = "csr"))]
        {
            drop(ev);
        }
    };

    let on_pointer_leave = move |_: leptos::ev::PointerEvent| {
        editor.update(EditorState::pointer_leave);
    };

    view! {
        <canvas
            class=class
            width=format!("{width:.0}")
            height=format!("{height:.0}")
            node_ref=canvas_ref
            on:pointerdown=on_pointer_down
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_leave
        >
            "Your browser does not support canvas."
        </canvas>
    }
}
