// models/src/medical/incident.rs

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dates::parse_appointment_date;
use crate::errors::{require, ValidationError, ValidationResult};
use crate::identifiers::{generate_id, validate_id, Record};
use crate::medical::FileAttachment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IncidentStatus {
    Scheduled,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
}

impl IncidentStatus {
    pub const ALL: [IncidentStatus; 4] = [
        IncidentStatus::Scheduled,
        IncidentStatus::InProgress,
        IncidentStatus::Completed,
        IncidentStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::Scheduled => "Scheduled",
            IncidentStatus::InProgress => "In Progress",
            IncidentStatus::Completed => "Completed",
            IncidentStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An appointment or treatment episode. Owns its attachments.
///
/// `appointment_date` is kept exactly as stored; use [`Incident::scheduled_at`]
/// to read it as an instant. Records loaded from storage may hold a value that
/// does not parse, which is why the raw text is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: String,
    pub patient_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: String,
    pub appointment_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treatment: Option<String>,
    pub status: IncidentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_date: Option<String>,
    #[serde(default)]
    pub files: Vec<FileAttachment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Appointment form submission.
///
/// On update, an empty `files` list keeps the attachments already on the
/// incident; a non-empty list replaces them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIncident {
    pub patient_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: String,
    pub appointment_date: String,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub treatment: Option<String>,
    pub status: IncidentStatus,
    #[serde(default)]
    pub next_date: Option<String>,
    #[serde(default)]
    pub files: Vec<FileAttachment>,
}

impl NewIncident {
    /// Checks the submission without consuming it.
    pub fn validate(&self) -> ValidationResult<()> {
        let patient_id = require("patientId", &self.patient_id)?;
        validate_id(patient_id)?;
        require("title", &self.title)?;
        require("appointmentDate", &self.appointment_date)?;
        parse_appointment_date(&self.appointment_date)?;
        if let Some(cost) = self.cost {
            if !cost.is_finite() || cost < 0.0 {
                return Err(ValidationError::InvalidCost(cost));
            }
        }
        if let Some(next) = non_blank(&self.next_date) {
            parse_appointment_date(next)?;
        }
        self.files.iter().try_for_each(FileAttachment::validate)
    }
}

impl Incident {
    /// Builds a new incident with a fresh id and creation timestamp.
    pub fn from_new_incident(new_incident: NewIncident) -> ValidationResult<Self> {
        new_incident.validate()?;
        Ok(Incident {
            id: generate_id(),
            patient_id: new_incident.patient_id.trim().to_string(),
            title: new_incident.title.trim().to_string(),
            description: new_incident.description,
            comments: new_incident.comments,
            appointment_date: new_incident.appointment_date.trim().to_string(),
            cost: new_incident.cost,
            treatment: non_blank(&new_incident.treatment).map(str::to_string),
            status: new_incident.status,
            next_date: non_blank(&new_incident.next_date).map(str::to_string),
            files: new_incident.files,
            created_at: Some(Utc::now()),
        })
    }

    /// Replaces every editable field, keeping `id` and `created_at`.
    /// On error the incident is left untouched.
    pub fn apply_update(&mut self, update: NewIncident) -> ValidationResult<()> {
        update.validate()?;
        self.patient_id = update.patient_id.trim().to_string();
        self.title = update.title.trim().to_string();
        self.description = update.description;
        self.comments = update.comments;
        self.appointment_date = update.appointment_date.trim().to_string();
        self.cost = update.cost;
        self.treatment = non_blank(&update.treatment).map(str::to_string);
        self.status = update.status;
        self.next_date = non_blank(&update.next_date).map(str::to_string);
        if !update.files.is_empty() {
            self.files = update.files;
        }
        Ok(())
    }

    /// The appointment as a UTC instant, or the parse failure.
    pub fn scheduled_at(&self) -> ValidationResult<DateTime<Utc>> {
        parse_appointment_date(&self.appointment_date)
    }

    /// Cost with an absent value counted as zero.
    pub fn cost_or_zero(&self) -> f64 {
        self.cost.unwrap_or(0.0)
    }
}

impl Record for Incident {
    fn id(&self) -> &str {
        &self.id
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> NewIncident {
        NewIncident {
            patient_id: "p1".to_string(),
            title: "Cleaning".to_string(),
            description: "Routine cleaning".to_string(),
            comments: String::new(),
            appointment_date: "2030-01-15T09:30".to_string(),
            cost: Some(45.0),
            treatment: Some("  ".to_string()),
            status: IncidentStatus::Scheduled,
            next_date: None,
            files: Vec::new(),
        }
    }

    #[test]
    fn status_uses_display_names_on_the_wire() {
        let json = serde_json::to_string(&IncidentStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let parsed: IncidentStatus = serde_json::from_str("\"Cancelled\"").unwrap();
        assert_eq!(parsed, IncidentStatus::Cancelled);
    }

    #[test]
    fn creates_incident_from_valid_form() {
        let incident = Incident::from_new_incident(form()).unwrap();
        assert_eq!(incident.patient_id, "p1");
        assert_eq!(incident.treatment, None);
        assert!(incident.scheduled_at().is_ok());
    }

    #[test]
    fn rejects_missing_required_fields() {
        let mut no_patient = form();
        no_patient.patient_id.clear();
        assert_eq!(no_patient.validate(), Err(ValidationError::MissingField("patientId")));

        let mut no_title = form();
        no_title.title = "   ".to_string();
        assert_eq!(no_title.validate(), Err(ValidationError::MissingField("title")));

        let mut no_date = form();
        no_date.appointment_date.clear();
        assert_eq!(no_date.validate(), Err(ValidationError::MissingField("appointmentDate")));
    }

    #[test]
    fn rejects_unparsable_dates_and_bad_costs() {
        let mut bad_date = form();
        bad_date.appointment_date = "next tuesday".to_string();
        assert!(matches!(bad_date.validate(), Err(ValidationError::InvalidDateFormat(_))));

        let mut bad_next = form();
        bad_next.next_date = Some("soon".to_string());
        assert!(bad_next.validate().is_err());

        let mut negative = form();
        negative.cost = Some(-1.0);
        assert_eq!(negative.validate(), Err(ValidationError::InvalidCost(-1.0)));

        let mut nan = form();
        nan.cost = Some(f64::NAN);
        assert!(nan.validate().is_err());
    }

    #[test]
    fn rejects_oversized_attachments() {
        let mut with_file = form();
        with_file.files.push(FileAttachment {
            name: "huge.pdf".to_string(),
            url: "data:application/pdf;base64,".to_string(),
            mime_type: "application/pdf".to_string(),
            size: crate::MAX_ATTACHMENT_BYTES + 1,
        });
        assert!(matches!(
            with_file.validate(),
            Err(ValidationError::AttachmentTooLarge { .. })
        ));
    }

    #[test]
    fn update_without_files_keeps_existing_attachments() {
        let mut create = form();
        create.files.push(FileAttachment::from_bytes("a.pdf", "application/pdf", b"%PDF").unwrap());
        let mut incident = Incident::from_new_incident(create).unwrap();
        let id = incident.id.clone();

        let mut update = form();
        update.status = IncidentStatus::Completed;
        update.cost = None;
        incident.apply_update(update).unwrap();

        assert_eq!(incident.id, id);
        assert_eq!(incident.status, IncidentStatus::Completed);
        assert_eq!(incident.cost, None);
        assert_eq!(incident.files.len(), 1);

        let mut replace = form();
        replace.files.push(FileAttachment::from_bytes("b.png", "image/png", b"png").unwrap());
        incident.apply_update(replace).unwrap();
        assert_eq!(incident.files[0].name, "b.png");
    }

    #[test]
    fn missing_cost_counts_as_zero() {
        let json = r#"{"id":"i9","patientId":"p1","title":"Check","appointmentDate":"2025-01-01T10:00",
            "status":"Scheduled","createdAt":"2025-01-01T00:00:00Z"}"#;
        let incident: Incident = serde_json::from_str(json).unwrap();
        assert_eq!(incident.cost, None);
        assert_eq!(incident.cost_or_zero(), 0.0);
        assert!(incident.files.is_empty());
    }

    #[test]
    fn reads_records_without_creation_time_or_attachment_types() {
        let json = r#"{
            "id": "i1",
            "patientId": "p1",
            "title": "Toothache",
            "description": "Upper molar pain",
            "comments": "Sensitive to cold",
            "appointmentDate": "2025-07-01T10:00:00",
            "cost": 80,
            "status": "Completed",
            "files": [
                { "name": "invoice.pdf", "url": "base64string-or-blob-url" },
                { "name": "xray.png", "url": "base64string-or-blob-url" }
            ]
        }"#;
        let incident: Incident = serde_json::from_str(json).unwrap();
        assert_eq!(incident.created_at, None);
        assert_eq!(incident.cost, Some(80.0));
        assert_eq!(incident.status, IncidentStatus::Completed);
        assert_eq!(incident.files.len(), 2);
        assert!(incident.files.iter().all(|f| f.validate().is_ok()));
    }
}
