//! Browser localStorage glue for the editor.
//!
//! SYSTEM CONTEXT
//! ==============
//! The canvas crate owns the storage format; these helpers only open
//! `window.localStorage` and hand it to the editor state, so components never
//! touch web-sys directly. Without the `csr` feature they are no-ops.

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::state::editor::EditorState;

/// `localStorage` key holding optional `EditorConfig` overrides.
pub const CONFIG_KEY: &str = "timegrid.config";

/// Load a JSON value from `localStorage` for `key`.
///
/// Missing storage, a missing key and undecodable JSON all yield `None`; the
/// decode failure is logged.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "csr")]
    {
        use canvas::storage::{KeyValueStore, LocalStorage};

        let raw = LocalStorage::open()
            .and_then(|storage| storage.get(key))
            .inspect_err(|e| log::warn!("localStorage read of {key:?} failed: {e}"))
            .unwrap_or_default()?;
        serde_json::from_str(&raw)
            .inspect_err(|e| log::warn!("ignoring malformed {key:?}: {e}"))
            .ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("no browser storage; {key:?} not read");
        None
    }
}

/// Restore saved shapes into `state` at startup.
pub fn load_editor(state: &mut EditorState) {
    #[cfg(feature = "csr")]
    {
        match canvas::storage::LocalStorage::open() {
            Ok(storage) => state.load_from(&storage),
            Err(err) => state.report_error(&err),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("no browser storage; {} shapes kept", state.engine.doc.len());
    }
}

/// Save every shape in `editor` to `localStorage`.
pub fn save_editor(editor: RwSignal<EditorState>) {
    #[cfg(feature = "csr")]
    {
        match canvas::storage::LocalStorage::open() {
            Ok(mut storage) => editor.update(|s| s.save_to(&mut storage)),
            Err(err) => editor.update(|s| s.report_error(&err)),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        editor.update(|s| s.report_error(&canvas::error::StorageError::Unavailable));
    }
}
