// lib/src/storage_engine/inmemory_storage.rs

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::storage_engine::StorageEngine;
use crate::errors::{Result, StoreError};

/// Process-local storage. Cloning shares the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage::default()
    }

    pub fn len(&self) -> Result<usize> {
        let entries = self.entries.read().map_err(lock_error)?;
        Ok(entries.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

fn lock_error<T>(err: std::sync::PoisonError<T>) -> StoreError {
    StoreError::StorageUnavailable(format!("in-memory storage lock poisoned: {}", err))
}

impl StorageEngine for InMemoryStorage {
    fn insert(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut entries = self.entries.write().map_err(lock_error)?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let entries = self.entries.read().map_err(lock_error)?;
        Ok(entries.get(key).cloned())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(lock_error)?;
        entries.remove(key);
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn get_type(&self) -> &'static str {
        "InMemory"
    }
}
