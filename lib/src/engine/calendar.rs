// lib/src/engine/calendar.rs

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};

use models::{Incident, IncidentStatus};

use super::scheduled;

/// Incidents on the given calendar day (UTC), earliest first.
pub fn appointments_on(incidents: &[Incident], date: NaiveDate) -> Vec<Incident> {
    let mut on_day: Vec<_> = scheduled(incidents)
        .into_iter()
        .filter(|(at, _)| at.date_naive() == date)
        .collect();
    on_day.sort_by_key(|(at, _)| *at);
    on_day.into_iter().map(|(_, i)| i.clone()).collect()
}

/// Days of `month` in `year` that have at least one appointment.
pub fn dates_with_appointments(incidents: &[Incident], year: i32, month: u32) -> BTreeSet<NaiveDate> {
    scheduled(incidents)
        .into_iter()
        .map(|(at, _)| at.date_naive())
        .filter(|day| day.year() == year && day.month() == month)
        .collect()
}

/// Incident count per status. Every status is present, possibly with zero.
pub fn status_counts(incidents: &[Incident]) -> BTreeMap<IncidentStatus, usize> {
    let mut counts: BTreeMap<IncidentStatus, usize> =
        IncidentStatus::ALL.iter().map(|status| (*status, 0)).collect();
    for incident in incidents {
        *counts.entry(incident.status).or_insert(0) += 1;
    }
    counts
}
