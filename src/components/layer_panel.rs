//! One checkbox per layer, in the order layers first appear.

use leptos::prelude::*;

use crate::state::editor::EditorState;

#[component]
pub fn LayerPanel() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    let toggles = Memo::new(move |_| editor.with(|s| s.engine.layer_toggles()));

    view! {
        <div class="layer-panel">
            <span class="layer-panel__title">"Layers"</span>
            {move || {
                toggles
                    .get()
                    .into_iter()
                    .map(|toggle| {
                        let name = toggle.name.clone();
                        let on_change = move |ev: leptos::ev::Event| {
                            let visible = event_target_checked(&ev);
                            editor.update(|s| s.set_layer_visible(&name, visible));
                        };
                        view! {
                            <label class="layer-panel__item">
                                <input type="checkbox" prop:checked=toggle.visible on:change=on_change />
                                {toggle.name}
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
