// models/src/identifiers.rs

use uuid::Uuid;

use crate::errors::{ValidationError, ValidationResult};

/// A record that lives in a collection keyed by its string id.
pub trait Record {
    fn id(&self) -> &str;
}

/// Generates a new record identifier.
///
/// Identifiers are UUID v7 strings: a 48-bit millisecond timestamp followed
/// by random bits. Ids generated by one process sort in creation order. Two
/// unsynchronized processes can still, in principle, collide, so callers must
/// not treat the id as a global uniqueness guarantee.
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}

/// Checks that a value can serve as a record identifier.
///
/// Ids are opaque; seed ids such as `"p1"` are as valid as generated ones.
/// The value must be between 1 and 255 bytes and not only whitespace.
pub fn validate_id(value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() || value.len() > u8::MAX as usize {
        return Err(ValidationError::InvalidIdentifier(value.to_string()));
    }
    Ok(())
}
