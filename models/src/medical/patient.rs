// models/src/medical/patient.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::dates::parse_birth_date;
use crate::errors::{require, ValidationResult};
use crate::identifiers::{generate_id, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub dob: NaiveDate,
    pub contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub health_info: String,
    /// Absent on records written before creation times were kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Patient form submission. Used both for creating and for editing a patient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub name: String,
    pub dob: String,
    pub contact: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub health_info: String,
}

struct ValidPatient {
    name: String,
    dob: NaiveDate,
    contact: String,
    email: Option<String>,
    health_info: String,
}

impl NewPatient {
    fn validate(self) -> ValidationResult<ValidPatient> {
        let name = require("name", &self.name)?.to_string();
        require("dob", &self.dob)?;
        let dob = parse_birth_date(&self.dob)?;
        let contact = require("contact", &self.contact)?.to_string();
        Ok(ValidPatient {
            name,
            dob,
            contact,
            email: self
                .email
                .map(|email| email.trim().to_string())
                .filter(|email| !email.is_empty()),
            health_info: self.health_info.trim().to_string(),
        })
    }
}

impl Patient {
    /// Builds a new patient record with a fresh id and creation timestamp.
    pub fn from_new_patient(new_patient: NewPatient) -> ValidationResult<Self> {
        let valid = new_patient.validate()?;
        Ok(Patient {
            id: generate_id(),
            name: valid.name,
            dob: valid.dob,
            contact: valid.contact,
            email: valid.email,
            health_info: valid.health_info,
            created_at: Some(Utc::now()),
        })
    }

    /// Replaces every editable field. `id` and `created_at` are kept.
    /// On error the patient is left untouched.
    pub fn apply_update(&mut self, update: NewPatient) -> ValidationResult<()> {
        let valid = update.validate()?;
        self.name = valid.name;
        self.dob = valid.dob;
        self.contact = valid.contact;
        self.email = valid.email;
        self.health_info = valid.health_info;
        Ok(())
    }
}

impl Record for Patient {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;

    fn form() -> NewPatient {
        NewPatient {
            name: "Jane Roe".to_string(),
            dob: "1985-02-14".to_string(),
            contact: "5550100".to_string(),
            email: Some("".to_string()),
            health_info: "Penicillin allergy".to_string(),
        }
    }

    #[test]
    fn creates_patient_with_generated_id() {
        let patient = Patient::from_new_patient(form()).unwrap();
        assert!(!patient.id.is_empty());
        assert_eq!(patient.dob, NaiveDate::from_ymd_opt(1985, 2, 14).unwrap());
        assert_eq!(patient.email, None);
    }

    #[test]
    fn rejects_missing_required_fields() {
        let mut missing_name = form();
        missing_name.name = " ".to_string();
        assert_eq!(
            Patient::from_new_patient(missing_name),
            Err(ValidationError::MissingField("name"))
        );

        let mut missing_contact = form();
        missing_contact.contact.clear();
        assert_eq!(
            Patient::from_new_patient(missing_contact),
            Err(ValidationError::MissingField("contact"))
        );

        let mut bad_dob = form();
        bad_dob.dob = "yesterday".to_string();
        assert!(matches!(
            Patient::from_new_patient(bad_dob),
            Err(ValidationError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn update_keeps_identity_and_creation_time() {
        let mut patient = Patient::from_new_patient(form()).unwrap();
        let (id, created_at) = (patient.id.clone(), patient.created_at);

        let mut update = form();
        update.name = "Jane Doe".to_string();
        update.email = Some("jane@clinic.test".to_string());
        patient.apply_update(update).unwrap();

        assert_eq!(patient.id, id);
        assert_eq!(patient.created_at, created_at);
        assert_eq!(patient.name, "Jane Doe");
        assert_eq!(patient.email.as_deref(), Some("jane@clinic.test"));
    }

    #[test]
    fn failed_update_leaves_patient_untouched() {
        let mut patient = Patient::from_new_patient(form()).unwrap();
        let before = patient.clone();
        let mut update = form();
        update.name.clear();
        assert!(patient.apply_update(update).is_err());
        assert_eq!(patient, before);
    }

    #[test]
    fn dob_serializes_as_calendar_date() {
        let patient = Patient::from_new_patient(form()).unwrap();
        let json = serde_json::to_value(&patient).unwrap();
        assert_eq!(json["dob"], "1985-02-14");
        assert_eq!(json["healthInfo"], "Penicillin allergy");
    }

    #[test]
    fn reads_records_without_creation_time() {
        let json = r#"{"id":"p1","name":"John Doe","dob":"1990-05-10","contact":"1234567890","healthInfo":"No allergies"}"#;
        let patient: Patient = serde_json::from_str(json).unwrap();
        assert_eq!(patient.id, "p1");
        assert_eq!(patient.created_at, None);

        let written = serde_json::to_value(&patient).unwrap();
        assert!(written.get("createdAt").is_none());
    }
}
