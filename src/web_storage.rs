//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`.

use board_core::{KeyValueStore, StoreError};
use wasm_bindgen::{JsCast, JsValue};

/// Handle to `localStorage`, looked up on every access so it stays `Send + Sync`
#[derive(Debug, Clone, Copy, Default)]
pub struct WebStorage;

impl WebStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

fn js_error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StoreError::WriteRejected {
                key: key.to_string(),
                message: js_error_message(&err),
            })
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("[STORAGE] Cannot remove '{}': storage unavailable", key);
            return;
        };
        if let Err(err) = storage.remove_item(key) {
            log::warn!("[STORAGE] Failed to remove '{}': {}", key, js_error_message(&err));
        }
    }
}
