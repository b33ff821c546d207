//! Timeline slider and the simulated date it selects.
//!
//! The slider counts days from the earliest start date; it is disabled until
//! the first shape exists.

use leptos::prelude::*;

use crate::state::editor::EditorState;

#[component]
pub fn TimelineBar() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    let slider = Memo::new(move |_| editor.with(EditorState::slider));
    let date_label = move || editor.with(EditorState::date_label);

    view! {
        <div class="timeline-bar">
            <input
                class="timeline-bar__slider"
                type="range"
                min="0"
                prop:max=move || slider.get().max.to_string()
                prop:value=move || slider.get().value.to_string()
                prop:disabled=move || !slider.get().enabled
                on:input=move |ev| editor.update(|s| s.scrub_input(&event_target_value(&ev)))
            />
            <span class="timeline-bar__date">{date_label}</span>
        </div>
    }
}
