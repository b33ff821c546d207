pub mod canvas_host;
pub mod layer_panel;
pub mod shape_form;
pub mod status_bar;
pub mod timeline_bar;
pub mod toolbar;
