// lib/src/storage_engine/storage_engine.rs

use std::fmt::Debug;

use crate::errors::Result;

/// A byte-level key-value backend.
///
/// Each call either lands fully or fails; there are no transactions spanning
/// several keys.
pub trait StorageEngine: Debug + Send + Sync {
    fn insert(&self, key: &str, value: &[u8]) -> Result<()>;
    fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn delete(&self, key: &str) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn get_type(&self) -> &'static str;
}
