// lib/src/engine/history.rs

use chrono::{DateTime, Utc};
use serde::Serialize;

use models::{Incident, IncidentStatus};

use super::scheduled;

/// A single patient's appointments split around `now`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientHistory {
    pub patient_id: String,
    /// After now, soonest first.
    pub upcoming: Vec<Incident>,
    /// At or before now, most recent first.
    pub past: Vec<Incident>,
    /// Cost of completed treatments only.
    pub total_spent: f64,
    pub total_appointments: usize,
}

pub fn patient_history(incidents: &[Incident], patient_id: &str, now: DateTime<Utc>) -> PatientHistory {
    let own: Vec<&Incident> = incidents.iter().filter(|i| i.patient_id == patient_id).collect();

    let total_spent: f64 = own
        .iter()
        .filter(|i| i.status == IncidentStatus::Completed)
        .map(|i| i.cost_or_zero())
        .sum();

    let (mut upcoming, mut past): (Vec<_>, Vec<_>) = scheduled(own.iter().copied())
        .into_iter()
        .partition(|(at, _)| *at > now);
    upcoming.sort_by_key(|(at, _)| *at);
    past.sort_by(|(a, _), (b, _)| b.cmp(a));

    PatientHistory {
        patient_id: patient_id.to_string(),
        upcoming: upcoming.into_iter().map(|(_, i)| i.clone()).collect(),
        past: past.into_iter().map(|(_, i)| i.clone()).collect(),
        total_spent,
        total_appointments: own.len(),
    }
}
