// lib/src/storage_engine/sled_storage.rs

use std::fs;

use log::{debug, error, info};
use sled::{Db, Tree};

use super::storage_engine::StorageEngine;
use crate::config::StoreConfig;
use crate::errors::{Result, StoreError};

const RECORDS_TREE: &str = "records";

/// Opens (creating if needed) the sled database under the configured data
/// directory.
pub fn open_sled_db(config: &StoreConfig) -> Result<Db> {
    let db_path = config.data_directory.join("sled");

    if !db_path.exists() {
        info!("Creating database directory at {:?}", db_path);
        fs::create_dir_all(&db_path).map_err(|e| {
            error!("Failed to create database directory at {:?}: {}", db_path, e);
            StoreError::StorageUnavailable(format!(
                "Failed to create database directory at {:?}: {}",
                db_path, e
            ))
        })?;
    } else if !db_path.is_dir() {
        error!("Path {:?} exists but is not a directory", db_path);
        return Err(StoreError::StorageUnavailable(format!(
            "Path {:?} is not a directory",
            db_path
        )));
    }

    let db = sled::Config::new()
        .path(&db_path)
        .use_compression(config.use_compression)
        .cache_capacity(config.cache_capacity)
        .open()
        .map_err(|e| {
            error!("Failed to open Sled database at {:?}: {}", db_path, e);
            StoreError::StorageUnavailable(format!(
                "Failed to open Sled database at {:?}: {}",
                db_path, e
            ))
        })?;
    info!("Opened Sled database at {:?}", db_path);
    Ok(db)
}

/// Sled-backed storage. All keys live in one tree.
#[derive(Debug, Clone)]
pub struct SledStorage {
    db: Db,
    tree: Tree,
}

impl SledStorage {
    pub fn new(db: Db) -> Result<Self> {
        let tree = db.open_tree(RECORDS_TREE)?;
        Ok(SledStorage { db, tree })
    }
}

impl StorageEngine for SledStorage {
    fn insert(&self, key: &str, value: &[u8]) -> Result<()> {
        self.tree.insert(key.as_bytes(), value)?;
        debug!("Wrote {} bytes to {}", value.len(), key);
        Ok(())
    }

    fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.tree.get(key.as_bytes())?.map(|value| value.to_vec()))
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.tree.remove(key.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.tree.flush()?;
        self.db.flush()?;
        Ok(())
    }

    fn get_type(&self) -> &'static str {
        "Sled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn persists_across_reopen() {
        let dir = tempdir().unwrap();
        let config = StoreConfig::sled(dir.path());

        {
            let storage = SledStorage::new(open_sled_db(&config).unwrap()).unwrap();
            storage.insert("dental_patients", b"[]").unwrap();
            storage.flush().unwrap();
        }

        let reopened = SledStorage::new(open_sled_db(&config).unwrap()).unwrap();
        assert_eq!(reopened.retrieve("dental_patients").unwrap(), Some(b"[]".to_vec()));
        reopened.delete("dental_patients").unwrap();
        assert_eq!(reopened.retrieve("dental_patients").unwrap(), None);
    }

    #[test]
    fn refuses_a_file_as_data_directory() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path()).unwrap();
        std::fs::write(dir.path().join("sled"), b"not a directory").unwrap();
        let err = open_sled_db(&StoreConfig::sled(dir.path())).unwrap_err();
        assert!(matches!(err, StoreError::StorageUnavailable(_)));
    }
}
