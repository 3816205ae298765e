//! String key-value stores backing the save record.

use std::collections::HashMap;

use crate::error::SaveError;

/// A string-keyed slot store (`localStorage` semantics).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, SaveError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SaveError>;
}

/// Session-only store. Used when browser storage is disabled, and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    /// Number of successful `set` calls.
    pub writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store that already holds `value` under `key`.
    #[cfg(test)]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SaveError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SaveError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Browser `window.localStorage`.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    /// Returns `None` when storage is disabled (private mode, sandboxed iframe).
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SaveError> {
        self.storage
            .get_item(key)
            .map_err(|e| SaveError::Storage(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SaveError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| SaveError::Storage(format!("{e:?}")))
    }
}
