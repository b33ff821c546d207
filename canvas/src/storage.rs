//! Key-value persistence for the shape list.
//!
//! The whole store is written as one JSON blob under a single key. There is no
//! version field; the blob layout is the serde layout of [`Shape`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use wasm_bindgen::JsValue;

use crate::doc::{Shape, ShapeStore};
use crate::error::{EditorError, StorageError};

/// A string-to-string store such as the browser's `localStorage`.
pub trait KeyValueStore {
    /// Read the value under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store. Contents are lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// The browser's `window.localStorage`.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Open the page's local storage.
    ///
    /// Only meaningful on `wasm32` in a browser.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when there is no window or storage
    /// is disabled, and [`StorageError::Backend`] when access is denied.
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let storage = window
            .local_storage()
            .map_err(backend_error)?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(backend_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(backend_error)
    }
}

fn backend_error(value: JsValue) -> StorageError {
    StorageError::Backend(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Serialize every shape in `store` and write it under `key`.
///
/// Returns the number of shapes written.
///
/// # Errors
///
/// Returns [`EditorError::Serialize`] if encoding fails or
/// [`EditorError::Storage`] if the write is rejected.
pub fn save_shapes<S: KeyValueStore + ?Sized>(kv: &mut S, key: &str, store: &ShapeStore) -> Result<usize, EditorError> {
    let raw = store.to_json().map_err(EditorError::Serialize)?;
    kv.set(key, &raw)?;
    Ok(store.len())
}

/// Read and decode the shape list under `key`.
///
/// Returns `Ok(None)` when nothing has been saved yet.
///
/// # Errors
///
/// Returns [`EditorError::Storage`] if the read fails or
/// [`EditorError::MalformedSnapshot`] if the stored blob is not a shape list.
pub fn load_shapes<S: KeyValueStore + ?Sized>(kv: &S, key: &str) -> Result<Option<Vec<Shape>>, EditorError> {
    let Some(raw) = kv.get(key)? else {
        return Ok(None);
    };
    ShapeStore::from_json(&raw)
        .map(Some)
        .map_err(EditorError::MalformedSnapshot)
}
