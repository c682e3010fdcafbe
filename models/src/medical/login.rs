// models/src/medical/login.rs
use serde::{Deserialize, Serialize};

/// A login attempt. Holds the plaintext password only for the duration of
/// the check; it is never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Login {
    pub email: String,
    pub password: String,
}

impl Login {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Login {
            email: email.into(),
            password: password.into(),
        }
    }
}
