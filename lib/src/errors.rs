// lib/src/errors.rs

use thiserror::Error;

use bcrypt::BcryptError;
use models::errors::ValidationError;
use serde_json::Error as SerdeJsonError;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached or refused a read or write.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A stored collection is not valid JSON of the expected shape.
    #[error("Stored collection '{key}' is corrupted: {reason}")]
    Corrupted { key: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Invalid input or data: {0}")]
    InvalidData(String),

    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("Password hashing error: {0}")]
    PasswordHashingError(#[from] BcryptError),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(feature = "sled-datastore")]
impl From<sled::Error> for StoreError {
    fn from(err: sled::Error) -> Self {
        StoreError::StorageUnavailable(err.to_string())
    }
}

impl From<SerdeJsonError> for StoreError {
    fn from(err: SerdeJsonError) -> Self {
        StoreError::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for StoreError {
    fn from(err: serde_yaml::Error) -> Self {
        StoreError::ConfigurationError(format!("Invalid YAML: {}", err))
    }
}
