//! `localStorage` backed key-value store

use crate::error::{StoreError, StoreResult};
use crate::persistence::KeyValueStore;

/// Key-value store over `window.localStorage`
///
/// Storage can be missing (private mode, sandboxed iframes); reads then
/// return nothing and writes fail with [`StoreError::Unavailable`].
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage unavailable; invites will not persist");
        }
        Self { storage }
    }

    /// Whether a backing storage object was found
    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("localStorage".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|err| StoreError::WriteFailed {
                key: key.to_string(),
                reason: format!("{:?}", err),
            })
    }
}
