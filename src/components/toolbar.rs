//! Top bar with the draw-mode toggle, zoom buttons and save.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every button maps to one `EditorState` operation; the canvas host repaints
//! when the state's render sequence moves.

use leptos::prelude::*;

use crate::state::editor::EditorState;
use crate::util::ui_persistence::save_editor;

#[component]
pub fn Toolbar() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    let draw_mode = move || editor.with(|s| s.engine.draw_mode());
    let draw_class = move || if draw_mode() { "toolbar__btn toolbar__btn--active" } else { "toolbar__btn" };
    let draw_label = move || if draw_mode() { "Exit Draw Mode" } else { "Draw Mode" };

    view! {
        <div class="toolbar">
            <button class=draw_class on:click=move |_| editor.update(EditorState::toggle_draw_mode)>
                {draw_label}
            </button>
            <span class="toolbar__divider"></span>
            <button class="toolbar__btn" title="Zoom in" on:click=move |_| editor.update(EditorState::zoom_in)>
                "+"
            </button>
            <button class="toolbar__btn" title="Zoom out" on:click=move |_| editor.update(EditorState::zoom_out)>
                "−"
            </button>
            <span class="toolbar__divider"></span>
            <button class="toolbar__btn" on:click=move |_| save_editor(editor)>
                "Save"
            </button>
        </div>
    }
}
