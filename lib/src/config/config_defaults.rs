// lib/src/config/config_defaults.rs

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

pub use crate::config::config_constants::*;
use crate::config::config_structs::{CorruptionPolicy, StorageEngineType, StoreConfig};
use crate::errors::{Result, StoreError};

pub fn default_storage_engine_type() -> StorageEngineType { StorageEngineType::Sled }
pub fn default_data_directory() -> PathBuf { PathBuf::from(DEFAULT_DATA_DIRECTORY) }
pub fn default_key_prefix() -> String { DEFAULT_KEY_PREFIX.to_string() }
pub fn default_corruption_policy() -> CorruptionPolicy { CorruptionPolicy::Recover }
pub fn default_password_hash_cost() -> u32 { bcrypt::DEFAULT_COST }
pub fn default_cache_capacity() -> u64 { DEFAULT_SLED_CACHE_CAPACITY }
pub fn default_use_compression() -> bool { false }

/// Loads the store configuration from a YAML file.
///
/// With no path the defaults are returned. Missing keys in the file take
/// their default values.
pub fn load_store_config(path: Option<&Path>) -> Result<StoreConfig> {
    let Some(path) = path else {
        debug!("No store config file given, using defaults");
        return Ok(StoreConfig::default());
    };

    let content = fs::read_to_string(path).map_err(|e| {
        StoreError::ConfigurationError(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: StoreConfig = serde_yaml::from_str(&content)?;
    validate_store_config(&config)?;
    info!(
        "Loaded store config from {:?}: engine {:?}, prefix '{}'",
        path, config.storage_engine_type, config.key_prefix
    );
    Ok(config)
}

pub fn validate_store_config(config: &StoreConfig) -> Result<()> {
    if !(MIN_PASSWORD_HASH_COST..=MAX_PASSWORD_HASH_COST).contains(&config.password_hash_cost) {
        return Err(StoreError::ConfigurationError(format!(
            "password_hash_cost must be between {} and {}, got {}",
            MIN_PASSWORD_HASH_COST, MAX_PASSWORD_HASH_COST, config.password_hash_cost
        )));
    }
    if config.storage_engine_type == StorageEngineType::Sled
        && config.data_directory.as_os_str().is_empty()
    {
        return Err(StoreError::ConfigurationError(
            "Sled storage requires a data directory path.".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn no_path_gives_defaults() {
        let config = load_store_config(None).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.key("patients"), "dental_patients");
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "storage_engine_type: inmemory").unwrap();
        writeln!(file, "corruption_policy: fail").unwrap();
        writeln!(file, "password_hash_cost: 6").unwrap();

        let config = load_store_config(Some(file.path())).unwrap();
        assert_eq!(config.storage_engine_type, StorageEngineType::InMemory);
        assert_eq!(config.corruption_policy, CorruptionPolicy::Fail);
        assert_eq!(config.password_hash_cost, 6);
        assert_eq!(config.key_prefix, DEFAULT_KEY_PREFIX);
    }

    #[test]
    fn rejects_out_of_range_hash_cost() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "password_hash_cost: 2").unwrap();
        assert!(matches!(
            load_store_config(Some(file.path())),
            Err(StoreError::ConfigurationError(_))
        ));
    }

    #[test]
    fn rejects_unknown_engine() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "storage_engine_type: rocksdb").unwrap();
        assert!(matches!(
            load_store_config(Some(file.path())),
            Err(StoreError::ConfigurationError(_))
        ));
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let err = load_store_config(Some(Path::new("/definitely/not/here.yaml"))).unwrap_err();
        assert!(matches!(err, StoreError::ConfigurationError(_)));
    }
}
