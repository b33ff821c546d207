//! Bottom status line: save confirmations, errors, and canvas telemetry.

use leptos::prelude::*;

use crate::state::editor::{EditorState, StatusKind};

#[component]
pub fn StatusBar() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    let status = move || editor.with(|s| s.status.clone());
    let shape_count = move || editor.with(|s| s.engine.doc.len());
    let zoom_pct = move || editor.with(|s| format!("{:.0}%", s.engine.zoom() * 100.0));

    view! {
        <div class="status-bar">
            {move || {
                status()
                    .map(|message| {
                        let class = match message.kind {
                            StatusKind::Info => "status-bar__message",
                            StatusKind::Error => "status-bar__message status-bar__message--error",
                        };
                        view! {
                            <span class=class>
                                {message.text}
                                <button
                                    class="status-bar__dismiss"
                                    title="Dismiss"
                                    on:click=move |_| editor.update(EditorState::dismiss_status)
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    })
            }}
            <span class="status-bar__spacer"></span>
            <span class="status-bar__item">{shape_count} " shapes"</span>
            <span class="status-bar__item">{zoom_pct}</span>
        </div>
    }
}
