// models/src/medical/user.rs

use bcrypt::{hash, verify, BcryptError};
use serde::{Deserialize, Serialize};

use crate::errors::{require, ValidationError, ValidationResult};
use crate::identifiers::{generate_id, Record};
use crate::medical::Role;

// --- DTO for new user registration ---
// Carries the plaintext password until it is hashed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub role: Role,
    pub email: String,
    pub password: String,
    pub patient_id: Option<String>,
    pub name: Option<String>,
}

// --- Stored user ---
// Holds the bcrypt hash, never the plaintext password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub role: Role,
    pub email: String,
    pub password_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    /// Hashes a plaintext password with the given bcrypt cost.
    pub fn hash_password(password: &str, cost: u32) -> Result<String, BcryptError> {
        hash(password, cost)
    }

    /// Verifies a plaintext password against a stored hash.
    pub fn verify_password(password: &str, hash: &str) -> Result<bool, BcryptError> {
        verify(password, hash)
    }

    /// Creates a `User` from a `NewUser` DTO, hashing the password.
    ///
    /// An `Admin` must not carry a patient link; a `Patient` must carry one.
    /// Whether the linked patient exists is checked when the user is turned
    /// into a [`Viewer`](crate::Viewer).
    pub fn from_new_user(new_user: NewUser, cost: u32) -> ValidationResult<Self> {
        let email = require("email", &new_user.email)?.to_string();
        require("password", &new_user.password)?;

        let patient_id = new_user
            .patient_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());
        match (new_user.role, &patient_id) {
            (Role::Admin, Some(id)) => {
                return Err(ValidationError::RoleLinkMismatch(format!(
                    "admin {email} cannot be linked to patient {id}"
                )));
            }
            (Role::Patient, None) => {
                return Err(ValidationError::RoleLinkMismatch(format!(
                    "patient user {email} has no patient link"
                )));
            }
            _ => {}
        }

        let password_hash = Self::hash_password(&new_user.password, cost)
            .map_err(|_| ValidationError::PasswordHashingFailed)?;

        Ok(User {
            id: generate_id(),
            role: new_user.role,
            email,
            password_hash,
            patient_id,
            name: new_user.name.filter(|name| !name.trim().is_empty()),
        })
    }
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4;

    fn new_user(role: Role, patient_id: Option<&str>) -> NewUser {
        NewUser {
            role,
            email: "someone@clinic.test".to_string(),
            password: "secret".to_string(),
            patient_id: patient_id.map(str::to_string),
            name: None,
        }
    }

    #[test]
    fn hashes_instead_of_storing_plaintext() {
        let user = User::from_new_user(new_user(Role::Admin, None), TEST_COST).unwrap();
        assert_ne!(user.password_hash, "secret");
        assert!(User::verify_password("secret", &user.password_hash).unwrap());
        assert!(!User::verify_password("wrong", &user.password_hash).unwrap());
    }

    #[test]
    fn admin_cannot_have_patient_link() {
        let err = User::from_new_user(new_user(Role::Admin, Some("p1")), TEST_COST).unwrap_err();
        assert!(matches!(err, ValidationError::RoleLinkMismatch(_)));
    }

    #[test]
    fn patient_user_needs_patient_link() {
        let err = User::from_new_user(new_user(Role::Patient, Some("  ")), TEST_COST).unwrap_err();
        assert!(matches!(err, ValidationError::RoleLinkMismatch(_)));

        let user = User::from_new_user(new_user(Role::Patient, Some("p1")), TEST_COST).unwrap();
        assert_eq!(user.patient_id.as_deref(), Some("p1"));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let user = User::from_new_user(new_user(Role::Patient, Some("p1")), TEST_COST).unwrap();
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["patientId"], "p1");
        assert_eq!(json["role"], "Patient");
        assert!(json.get("name").is_none());
        assert!(json.get("password").is_none());
    }
}
