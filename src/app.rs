//! Root component: builds the editor state and lays out the page.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use canvas::config::EditorConfig;

use crate::components::canvas_host::CanvasHost;
use crate::components::layer_panel::LayerPanel;
use crate::components::shape_form::ShapeFormPanel;
use crate::components::status_bar::StatusBar;
use crate::components::timeline_bar::TimelineBar;
use crate::components::toolbar::Toolbar;
use crate::state::editor::EditorState;
use crate::util::ui_persistence::{CONFIG_KEY, load_editor, load_json};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_json::<EditorConfig>(CONFIG_KEY).unwrap_or_default();
    let mut state = EditorState::new(config);
    load_editor(&mut state);
    provide_context(RwSignal::new(state));

    view! {
        <Title text="Timegrid" />
        <div class="app">
            <Toolbar />
            <div class="app__body">
                <aside class="app__sidebar">
                    <ShapeFormPanel />
                    <LayerPanel />
                </aside>
                <main class="app__main">
                    <CanvasHost />
                    <TimelineBar />
                </main>
            </div>
            <StatusBar />
        </div>
    }
}
