// lib/src/engine/mod.rs

//! Derived views over the patient and incident collections. Nothing here
//! mutates its input; every call recomputes from the raw collections.

pub mod calendar;
pub mod dashboard;
pub mod history;

pub use calendar::{appointments_on, dates_with_appointments, status_counts};
pub use dashboard::{compute_dashboard_stats, load_dashboard, DashboardStats, PatientSpend};
pub use history::{patient_history, PatientHistory};

use chrono::{DateTime, Utc};
use log::debug;

use models::{Incident, Patient};

/// Label shown for an incident whose patient no longer exists.
pub const UNKNOWN_PATIENT: &str = "Unknown Patient";

/// The patient's name, or [`UNKNOWN_PATIENT`] when the id resolves to nothing.
pub fn patient_name<'a>(patients: &'a [Patient], patient_id: &str) -> &'a str {
    patients
        .iter()
        .find(|p| p.id == patient_id)
        .map(|p| p.name.as_str())
        .unwrap_or(UNKNOWN_PATIENT)
}

/// Pairs each incident with its parsed appointment instant, dropping the ones
/// whose date does not parse. Input order is preserved.
pub(crate) fn scheduled<'a, I>(incidents: I) -> Vec<(DateTime<Utc>, &'a Incident)>
where
    I: IntoIterator<Item = &'a Incident>,
{
    incidents
        .into_iter()
        .filter_map(|incident| match incident.scheduled_at() {
            Ok(at) => Some((at, incident)),
            Err(e) => {
                debug!("Skipping incident {} in date ordering: {}", incident.id, e);
                None
            }
        })
        .collect()
}
