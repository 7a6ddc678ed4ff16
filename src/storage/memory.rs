//! In-memory key-value store
//!
//! Backs unit tests and ephemeral sessions. Clones share the same
//! underlying map, mirroring how cloned file stores see the same files.

use crate::error::{AppError, Result};
use crate::storage::KeyValueStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared in-memory string store
#[derive(Clone, Default)]
pub struct MemoryStore {
    map: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        self.map
            .lock()
            .map_err(|_| AppError::Store("memory store mutex poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.lock()?.keys().cloned().collect())
    }
}
