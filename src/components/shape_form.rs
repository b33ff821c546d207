//! Inputs for the dates and layer assigned to the next drawn shape.

use leptos::prelude::*;

use crate::state::editor::EditorState;

#[component]
pub fn ShapeFormPanel() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    let start_date = move || editor.with(|s| s.form.start_date.clone());
    let end_date = move || editor.with(|s| s.form.end_date.clone());
    let layer = move || editor.with(|s| s.form.layer.clone());

    view! {
        <div class="shape-form">
            <label class="shape-form__field">
                "Start"
                <input
                    type="date"
                    prop:value=start_date
                    on:input=move |ev| editor.update(|s| s.form.start_date = event_target_value(&ev))
                />
            </label>
            <label class="shape-form__field">
                "End"
                <input
                    type="date"
                    prop:value=end_date
                    on:input=move |ev| editor.update(|s| s.form.end_date = event_target_value(&ev))
                />
            </label>
            <label class="shape-form__field">
                "Layer"
                <input
                    type="text"
                    placeholder="Default"
                    prop:value=layer
                    on:input=move |ev| editor.update(|s| s.form.layer = event_target_value(&ev))
                />
            </label>
        </div>
    }
}
