// lib/src/storage_engine/mod.rs

pub mod inmemory_storage;
#[cfg(feature = "sled-datastore")]
pub mod sled_storage;
pub mod storage_engine;
pub mod storage_utils;

pub use inmemory_storage::InMemoryStorage;
#[cfg(feature = "sled-datastore")]
pub use sled_storage::{open_sled_db, SledStorage};
pub use storage_engine::StorageEngine;

use std::sync::Arc;

use log::info;

use crate::config::{StorageEngineType, StoreConfig};
use crate::errors::Result;

/// Creates the storage engine named by the configuration.
///
/// Sled is the default. InMemory keeps everything in the process and loses
/// it on drop.
pub fn create_storage(config: &StoreConfig) -> Result<Arc<dyn StorageEngine>> {
    info!("Creating {:?} storage engine", config.storage_engine_type);
    match config.storage_engine_type {
        StorageEngineType::Sled => {
            #[cfg(feature = "sled-datastore")]
            {
                let db = open_sled_db(config)?;
                Ok(Arc::new(SledStorage::new(db)?))
            }
            #[cfg(not(feature = "sled-datastore"))]
            {
                Err(crate::errors::StoreError::ConfigurationError(
                    "Sled support is not enabled. Enable the 'sled-datastore' feature or use InMemory."
                        .to_string(),
                ))
            }
        }
        StorageEngineType::InMemory => Ok(Arc::new(InMemoryStorage::new())),
    }
}
