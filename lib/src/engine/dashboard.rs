// lib/src/engine/dashboard.rs

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use models::{Incident, IncidentStatus, Patient, Viewer};

use super::scheduled;
use crate::errors::Result;
use crate::repository::Repository;

pub const ADMIN_UPCOMING_LIMIT: usize = 10;
pub const PATIENT_UPCOMING_LIMIT: usize = 5;
pub const TOP_PATIENTS_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientSpend {
    pub patient: Patient,
    pub appointment_count: usize,
    pub total_spent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_patients: usize,
    pub total_appointments: usize,
    pub completed_treatments: usize,
    pub pending_appointments: usize,
    pub total_revenue: f64,
    pub upcoming_appointments: Vec<Incident>,
    pub top_patients: Vec<PatientSpend>,
}

/// Computes the dashboard for `viewer` as of `now`.
///
/// Admins see every incident, the next ten appointments and the five
/// highest-spending patients. A patient sees only their own incidents, their
/// next five appointments and no ranking. Ordering is stable: equal dates keep
/// collection order, and so do equal spends.
pub fn compute_dashboard_stats(
    patients: &[Patient],
    incidents: &[Incident],
    viewer: &Viewer,
    now: DateTime<Utc>,
) -> DashboardStats {
    let visible: Vec<&Incident> = incidents.iter().filter(|i| viewer.can_see(i)).collect();

    let (total_patients, upcoming_limit, top_patients) = match viewer {
        Viewer::Admin => (
            patients.len(),
            ADMIN_UPCOMING_LIMIT,
            top_patients(patients, incidents, TOP_PATIENTS_LIMIT),
        ),
        Viewer::Patient { .. } => (1, PATIENT_UPCOMING_LIMIT, Vec::new()),
    };

    DashboardStats {
        total_patients,
        total_appointments: visible.len(),
        completed_treatments: count_status(&visible, IncidentStatus::Completed),
        pending_appointments: count_status(&visible, IncidentStatus::Scheduled),
        total_revenue: visible.iter().map(|i| i.cost_or_zero()).sum(),
        upcoming_appointments: upcoming(&visible, now, upcoming_limit),
        top_patients,
    }
}

/// Loads both collections from the store and computes the dashboard.
pub fn load_dashboard<R: Repository + ?Sized>(
    repository: &R,
    viewer: &Viewer,
    now: DateTime<Utc>,
) -> Result<DashboardStats> {
    let patients = repository.get_patients()?;
    let incidents = repository.get_incidents()?;
    Ok(compute_dashboard_stats(&patients, &incidents, viewer, now))
}

fn count_status(incidents: &[&Incident], status: IncidentStatus) -> usize {
    incidents.iter().filter(|i| i.status == status).count()
}

fn upcoming(incidents: &[&Incident], now: DateTime<Utc>, limit: usize) -> Vec<Incident> {
    let mut future: Vec<_> = scheduled(incidents.iter().copied())
        .into_iter()
        .filter(|(at, _)| *at > now)
        .collect();
    future.sort_by_key(|(at, _)| *at);
    future
        .into_iter()
        .take(limit)
        .map(|(_, incident)| incident.clone())
        .collect()
}

/// Ranks patients by total cost across all of their incidents.
fn top_patients(patients: &[Patient], incidents: &[Incident], limit: usize) -> Vec<PatientSpend> {
    let mut totals: HashMap<&str, (usize, f64)> = HashMap::new();
    for incident in incidents {
        let entry = totals.entry(incident.patient_id.as_str()).or_default();
        entry.0 += 1;
        entry.1 += incident.cost_or_zero();
    }

    let mut ranked: Vec<PatientSpend> = patients
        .iter()
        .map(|patient| {
            let (appointment_count, total_spent) =
                totals.get(patient.id.as_str()).copied().unwrap_or_default();
            PatientSpend {
                patient: patient.clone(),
                appointment_count,
                total_spent,
            }
        })
        .collect();
    ranked.sort_by(|a, b| b.total_spent.total_cmp(&a.total_spent));
    ranked.truncate(limit);
    ranked
}
