// lib/src/config/config_structs.rs

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::config_defaults::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageEngineType {
    Sled,
    InMemory,
}

/// What a collection read does when the stored value does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptionPolicy {
    /// Log a warning and treat the collection as empty.
    Recover,
    /// Return `StoreError::Corrupted` to the caller.
    Fail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_storage_engine_type")]
    pub storage_engine_type: StorageEngineType,
    #[serde(default = "default_data_directory")]
    pub data_directory: PathBuf,
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
    #[serde(default = "default_corruption_policy")]
    pub corruption_policy: CorruptionPolicy,
    #[serde(default = "default_password_hash_cost")]
    pub password_hash_cost: u32,
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
    #[serde(default = "default_use_compression")]
    pub use_compression: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            storage_engine_type: default_storage_engine_type(),
            data_directory: default_data_directory(),
            key_prefix: default_key_prefix(),
            corruption_policy: default_corruption_policy(),
            password_hash_cost: default_password_hash_cost(),
            cache_capacity: default_cache_capacity(),
            use_compression: default_use_compression(),
        }
    }
}

impl StoreConfig {
    /// An in-memory configuration, otherwise default.
    pub fn in_memory() -> Self {
        StoreConfig {
            storage_engine_type: StorageEngineType::InMemory,
            ..StoreConfig::default()
        }
    }

    /// A sled configuration rooted at `data_directory`.
    pub fn sled(data_directory: impl Into<PathBuf>) -> Self {
        StoreConfig {
            storage_engine_type: StorageEngineType::Sled,
            data_directory: data_directory.into(),
            ..StoreConfig::default()
        }
    }

    /// The physical key for a logical store key.
    pub fn key(&self, logical: &str) -> String {
        format!("{}{}", self.key_prefix, logical)
    }
}
