//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The whole editor lives in one `RwSignal<EditorState>` provided by `App`.
//! Components read derived values from it and call its methods on input.

pub mod editor;
