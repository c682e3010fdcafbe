// models/src/errors.rs

pub use thiserror::Error;

/// A validation error. Raised for a rejected submission before anything is
/// written to the store.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field was empty or absent.
    #[error("required field '{0}' is missing")]
    MissingField(&'static str),
    /// A record identifier is empty or longer than 255 bytes.
    #[error("identifier '{0}' is invalid")]
    InvalidIdentifier(String),
    /// A date or timestamp did not match the accepted formats.
    #[error("invalid date format: {0}")]
    InvalidDateFormat(String),
    /// A cost was negative, NaN or infinite.
    #[error("invalid cost: {0}")]
    InvalidCost(f64),
    /// An attachment exceeds the size ceiling.
    #[error("attachment '{name}' is {size} bytes, the limit is {limit} bytes")]
    AttachmentTooLarge { name: String, size: u64, limit: u64 },
    /// An attachment's MIME type is not on the allow-list.
    #[error("attachment '{name}' has disallowed type '{mime}'")]
    DisallowedAttachmentType { name: String, mime: String },
    /// A user's role and patient link disagree.
    #[error("role/patient link mismatch: {0}")]
    RoleLinkMismatch(String),
    /// Password hashing failed.
    #[error("password hashing failed")]
    PasswordHashingFailed,
}

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Returns the trimmed value, or `MissingField` when nothing is left.
pub(crate) fn require<'a>(field: &'static str, value: &'a str) -> ValidationResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed)
}
