// lib/src/storage_engine/storage_utils.rs

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::Result;

/// Serializes a whole collection to its stored JSON form.
pub fn encode_collection<T: Serialize>(records: &[T]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(records)?)
}

/// Parses a stored collection. The raw serde error is returned so the caller
/// can apply its corruption policy.
pub fn decode_collection<T: DeserializeOwned>(bytes: &[u8]) -> serde_json::Result<Vec<T>> {
    serde_json::from_slice(bytes)
}
