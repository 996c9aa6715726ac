//! # `localStorage`-backed storage — browser-side persistence
//!
//! [`LocalStorage`] is the [`KeyValueStorage`] implementation used on the
//! **web platform**. Sessions survive reloads under the same keys the rest
//! of the app expects (`user`/`token`, `admin`/`adminToken`).
//!
//! All methods silently swallow storage errors (returning `None` for reads,
//! doing nothing for writes). A blocked or unavailable `localStorage`
//! degrades to "no persisted session" rather than crashing the UI.

use crate::session::KeyValueStorage;

/// Browser `localStorage` adapter.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn backing() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::backing()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::backing() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::backing() {
            let _ = storage.remove_item(key);
        }
    }
}
