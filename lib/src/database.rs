// lib/src/database.rs

use std::sync::Arc;

use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use models::{Incident, Patient, User};

use crate::config::{
    CorruptionPolicy, StoreConfig, CORRUPT_KEY_SUFFIX, INCIDENTS_KEY, INITIALIZED_KEY,
    INITIALIZED_MARKER, PATIENTS_KEY, USERS_KEY,
};
use crate::errors::{Result, StoreError};
use crate::repository::Repository;
use crate::seed::seed_data;
use crate::storage_engine::storage_utils::{decode_collection, encode_collection};
use crate::storage_engine::{create_storage, StorageEngine};

/// The record store: three JSON collections and an initialized flag kept
/// in a `StorageEngine`.
///
/// Every read parses the whole collection and every save replaces it. Backend
/// failures surface as `StoreError::StorageUnavailable`; an unparsable stored
/// value is handled per `StoreConfig::corruption_policy`.
#[derive(Debug, Clone)]
pub struct RecordStore {
    storage_engine: Arc<dyn StorageEngine>,
    config: StoreConfig,
}

impl RecordStore {
    /// Opens the engine named by `config`.
    pub fn open(config: StoreConfig) -> Result<Self> {
        let storage_engine = create_storage(&config)?;
        Ok(RecordStore::new(storage_engine, config))
    }

    /// Wraps an existing engine.
    pub fn new(storage_engine: Arc<dyn StorageEngine>, config: StoreConfig) -> Self {
        RecordStore {
            storage_engine,
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage_engine(&self) -> &Arc<dyn StorageEngine> {
        &self.storage_engine
    }

    fn read_collection<T: DeserializeOwned>(&self, logical: &str) -> Result<Vec<T>> {
        let key = self.config.key(logical);
        let Some(bytes) = self.storage_engine.retrieve(&key)? else {
            return Ok(Vec::new());
        };
        match decode_collection(&bytes) {
            Ok(records) => Ok(records),
            Err(e) => match self.config.corruption_policy {
                CorruptionPolicy::Recover => {
                    let moved_to = self.quarantine(&key, &bytes)?;
                    warn!(
                        "Stored collection {} is corrupted, moved it to {} and treating it as empty: {}",
                        key, moved_to, e
                    );
                    Ok(Vec::new())
                }
                CorruptionPolicy::Fail => Err(StoreError::Corrupted {
                    key,
                    reason: e.to_string(),
                }),
            },
        }
    }

    /// Moves an unreadable value from `key` to the first free
    /// `<key>.corrupt`, `<key>.corrupt.1`, ... key so later saves cannot
    /// overwrite it.
    fn quarantine(&self, key: &str, bytes: &[u8]) -> Result<String> {
        let base = format!("{}{}", key, CORRUPT_KEY_SUFFIX);
        let mut target = base.clone();
        let mut n = 0;
        while self.storage_engine.retrieve(&target)?.is_some() {
            n += 1;
            target = format!("{}.{}", base, n);
        }
        self.storage_engine.insert(&target, bytes)?;
        self.storage_engine.delete(key)?;
        self.storage_engine.flush()?;
        Ok(target)
    }

    fn write_collection<T: Serialize>(&self, logical: &str, records: &[T]) -> Result<()> {
        let key = self.config.key(logical);
        let bytes = encode_collection(records)?;
        self.storage_engine.insert(&key, &bytes)?;
        self.storage_engine.flush()?;
        debug!("Replaced {} with {} records", key, records.len());
        Ok(())
    }

    /// Writes a seed collection unless the key already holds a value.
    fn seed_if_absent<T: Serialize>(&self, logical: &str, records: &[T]) -> Result<()> {
        let key = self.config.key(logical);
        if self.storage_engine.retrieve(&key)?.is_some() {
            debug!("{} already has a value, not seeding it", key);
            return Ok(());
        }
        self.storage_engine.insert(&key, &encode_collection(records)?)
    }
}

impl Repository for RecordStore {
    fn initialize(&self) -> Result<()> {
        if self.is_initialized()? {
            debug!("Store already initialized");
            return Ok(());
        }

        let seed = seed_data(self.config.password_hash_cost)?;
        self.seed_if_absent(USERS_KEY, &seed.users)?;
        self.seed_if_absent(PATIENTS_KEY, &seed.patients)?;
        self.seed_if_absent(INCIDENTS_KEY, &seed.incidents)?;
        self.storage_engine
            .insert(&self.config.key(INITIALIZED_KEY), INITIALIZED_MARKER)?;
        self.storage_engine.flush()?;
        info!("Seeded {} store", self.storage_engine.get_type());
        Ok(())
    }

    fn is_initialized(&self) -> Result<bool> {
        let flag = self
            .storage_engine
            .retrieve(&self.config.key(INITIALIZED_KEY))?;
        Ok(flag.as_deref() == Some(INITIALIZED_MARKER))
    }

    fn get_users(&self) -> Result<Vec<User>> {
        self.read_collection(USERS_KEY)
    }

    fn get_patients(&self) -> Result<Vec<Patient>> {
        self.read_collection(PATIENTS_KEY)
    }

    fn get_incidents(&self) -> Result<Vec<Incident>> {
        self.read_collection(INCIDENTS_KEY)
    }

    fn save_users(&self, users: &[User]) -> Result<()> {
        self.write_collection(USERS_KEY, users)
    }

    fn save_patients(&self, patients: &[Patient]) -> Result<()> {
        self.write_collection(PATIENTS_KEY, patients)
    }

    fn save_incidents(&self, incidents: &[Incident]) -> Result<()> {
        self.write_collection(INCIDENTS_KEY, incidents)
    }
}
