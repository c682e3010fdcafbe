// models/src/medical/viewer.rs

use crate::errors::{ValidationError, ValidationResult};
use crate::medical::{Incident, Patient, Role, User};

/// The identity dashboards are scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Viewer {
    Admin,
    Patient { patient_id: String },
}

impl Viewer {
    pub fn patient(patient_id: impl Into<String>) -> Self {
        Viewer::Patient {
            patient_id: patient_id.into(),
        }
    }

    /// Resolves a stored user into a viewer.
    ///
    /// A patient-role user must link to a patient present in `patients`; an
    /// admin must carry no link.
    pub fn for_user(user: &User, patients: &[Patient]) -> ValidationResult<Self> {
        match (user.role, user.patient_id.as_deref()) {
            (Role::Admin, None) => Ok(Viewer::Admin),
            (Role::Admin, Some(patient_id)) => Err(ValidationError::RoleLinkMismatch(format!(
                "admin {} is linked to patient {}",
                user.email, patient_id
            ))),
            (Role::Patient, Some(patient_id)) => {
                if patients.iter().any(|p| p.id == patient_id) {
                    Ok(Viewer::patient(patient_id))
                } else {
                    Err(ValidationError::RoleLinkMismatch(format!(
                        "user {} links to missing patient {}",
                        user.email, patient_id
                    )))
                }
            }
            (Role::Patient, None) => Err(ValidationError::RoleLinkMismatch(format!(
                "patient user {} has no patient link",
                user.email
            ))),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Viewer::Admin => Role::Admin,
            Viewer::Patient { .. } => Role::Patient,
        }
    }

    pub fn patient_id(&self) -> Option<&str> {
        match self {
            Viewer::Admin => None,
            Viewer::Patient { patient_id } => Some(patient_id.as_str()),
        }
    }

    /// Whether the incident is visible to this viewer.
    pub fn can_see(&self, incident: &Incident) -> bool {
        match self {
            Viewer::Admin => true,
            Viewer::Patient { patient_id } => incident.patient_id == *patient_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn user(role: Role, patient_id: Option<&str>) -> User {
        User {
            id: "u1".to_string(),
            role,
            email: "u@clinic.test".to_string(),
            password_hash: String::new(),
            patient_id: patient_id.map(str::to_string),
            name: None,
        }
    }

    fn patient(id: &str) -> Patient {
        Patient {
            id: id.to_string(),
            name: "Someone".to_string(),
            dob: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            contact: "1".to_string(),
            email: None,
            health_info: String::new(),
            created_at: Some(Utc::now()),
        }
    }

    #[test]
    fn resolves_admin_and_linked_patient() {
        let patients = vec![patient("p1")];
        assert_eq!(Viewer::for_user(&user(Role::Admin, None), &patients), Ok(Viewer::Admin));
        assert_eq!(
            Viewer::for_user(&user(Role::Patient, Some("p1")), &patients),
            Ok(Viewer::patient("p1"))
        );
    }

    #[test]
    fn rejects_dangling_or_inconsistent_links() {
        let patients = vec![patient("p1")];
        assert!(Viewer::for_user(&user(Role::Patient, Some("p2")), &patients).is_err());
        assert!(Viewer::for_user(&user(Role::Patient, None), &patients).is_err());
        assert!(Viewer::for_user(&user(Role::Admin, Some("p1")), &patients).is_err());
    }
}
