// lib/src/repository.rs

use log::info;

use models::{Incident, NewIncident, NewPatient, Patient, Record, User};

use crate::errors::{Result, StoreError};

/// The record store interface.
///
/// Implementors provide whole-collection reads and replacements; the
/// per-record operations default to read-modify-write over the whole
/// collection and may be overridden by adapters that can do better.
pub trait Repository {
    /// Seeds the store on first run. Later calls change nothing.
    fn initialize(&self) -> Result<()>;
    fn is_initialized(&self) -> Result<bool>;

    fn get_users(&self) -> Result<Vec<User>>;
    fn get_patients(&self) -> Result<Vec<Patient>>;
    fn get_incidents(&self) -> Result<Vec<Incident>>;

    fn save_users(&self, users: &[User]) -> Result<()>;
    fn save_patients(&self, patients: &[Patient]) -> Result<()>;
    fn save_incidents(&self, incidents: &[Incident]) -> Result<()>;

    fn find_patient(&self, id: &str) -> Result<Option<Patient>> {
        Ok(self.get_patients()?.into_iter().find(|p| p.id == id))
    }

    /// Replaces the patient with the same id in place, or appends it.
    fn upsert_patient(&self, patient: Patient) -> Result<()> {
        let mut patients = self.get_patients()?;
        upsert_record(&mut patients, patient);
        self.save_patients(&patients)
    }

    /// Removes the patient. Incidents referencing it are left as they are.
    fn delete_patient(&self, id: &str) -> Result<bool> {
        let mut patients = self.get_patients()?;
        let removed = remove_record(&mut patients, id);
        if removed {
            self.save_patients(&patients)?;
        }
        Ok(removed)
    }

    fn find_incident(&self, id: &str) -> Result<Option<Incident>> {
        Ok(self.get_incidents()?.into_iter().find(|i| i.id == id))
    }

    fn upsert_incident(&self, incident: Incident) -> Result<()> {
        let mut incidents = self.get_incidents()?;
        upsert_record(&mut incidents, incident);
        self.save_incidents(&incidents)
    }

    /// Removes the incident together with its attachments.
    fn delete_incident(&self, id: &str) -> Result<bool> {
        let mut incidents = self.get_incidents()?;
        let removed = remove_record(&mut incidents, id);
        if removed {
            self.save_incidents(&incidents)?;
        }
        Ok(removed)
    }

    fn create_patient(&self, new_patient: NewPatient) -> Result<Patient> {
        let patient = Patient::from_new_patient(new_patient)?;
        self.upsert_patient(patient.clone())?;
        info!("Created patient {}", patient.id);
        Ok(patient)
    }

    fn update_patient(&self, id: &str, update: NewPatient) -> Result<Patient> {
        let mut patient = self
            .find_patient(id)?
            .ok_or_else(|| StoreError::NotFound(format!("patient {}", id)))?;
        patient.apply_update(update)?;
        self.upsert_patient(patient.clone())?;
        Ok(patient)
    }

    /// Creates an incident for an existing patient.
    fn create_incident(&self, new_incident: NewIncident) -> Result<Incident> {
        new_incident.validate()?;
        self.require_patient(new_incident.patient_id.trim())?;
        let incident = Incident::from_new_incident(new_incident)?;
        self.upsert_incident(incident.clone())?;
        info!("Created incident {} for patient {}", incident.id, incident.patient_id);
        Ok(incident)
    }

    fn update_incident(&self, id: &str, update: NewIncident) -> Result<Incident> {
        let mut incident = self
            .find_incident(id)?
            .ok_or_else(|| StoreError::NotFound(format!("incident {}", id)))?;
        update.validate()?;
        if update.patient_id.trim() != incident.patient_id {
            self.require_patient(update.patient_id.trim())?;
        }
        incident.apply_update(update)?;
        self.upsert_incident(incident.clone())?;
        Ok(incident)
    }

    fn require_patient(&self, patient_id: &str) -> Result<()> {
        match self.find_patient(patient_id)? {
            Some(_) => Ok(()),
            None => Err(StoreError::InvalidData(format!(
                "incident references unknown patient {}",
                patient_id
            ))),
        }
    }
}

pub(crate) fn upsert_record<T: Record>(records: &mut Vec<T>, record: T) {
    match records.iter_mut().find(|existing| existing.id() == record.id()) {
        Some(slot) => *slot = record,
        None => records.push(record),
    }
}

pub(crate) fn remove_record<T: Record>(records: &mut Vec<T>, id: &str) -> bool {
    let before = records.len();
    records.retain(|record| record.id() != id);
    records.len() != before
}
