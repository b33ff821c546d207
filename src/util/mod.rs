pub mod canvas_input;
pub mod ui_persistence;
