//! Local storage adapter.

use crate::core::platform::KeyValueStore;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};

/// [`KeyValueStore`] over `window.localStorage`.
///
/// Values are stored as raw strings so they stay readable by other tabs and
/// by earlier console builds.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            console::error!("storage operation failed", "set", key.to_string(), err);
        }
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}
