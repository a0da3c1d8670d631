// --- File: crates/salon_schedule/src/filters.rs ---
use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::{Appointment, Worker};

/// Which staff columns the day view shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WorkerFilter {
    #[default]
    All,
    Only(String),
}

impl WorkerFilter {
    /// `"all"` (or nothing) selects every worker, anything else a worker id.
    pub fn from_selection(selection: &str) -> Self {
        match selection.trim() {
            "" | "all" => WorkerFilter::All,
            id => WorkerFilter::Only(id.to_string()),
        }
    }

    pub fn matches(&self, worker: &Worker) -> bool {
        match self {
            WorkerFilter::All => true,
            WorkerFilter::Only(id) => worker.id == *id,
        }
    }
}

/// Workers that take part in the grid, in input order.
pub fn active_workers(workers: &[Worker]) -> Vec<&Worker> {
    workers.iter().filter(|w| w.is_active()).collect()
}

/// Active workers narrowed by the staff filter. Selecting an inactive or
/// unknown worker yields no columns.
pub fn workers_to_display<'a>(workers: &'a [Worker], filter: &WorkerFilter) -> Vec<&'a Worker> {
    workers
        .iter()
        .filter(|w| w.is_active() && filter.matches(w))
        .collect()
}

/// Appointments starting on `date`.
pub fn appointments_on(date: NaiveDate, appointments: &[Appointment]) -> Vec<&Appointment> {
    appointments.iter().filter(|a| a.date() == date).collect()
}

/// Appointments keyed by start date, each day in input order.
pub fn group_by_date(appointments: &[Appointment]) -> BTreeMap<NaiveDate, Vec<&Appointment>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<&Appointment>> = BTreeMap::new();
    for appointment in appointments {
        grouped.entry(appointment.date()).or_default().push(appointment);
    }
    grouped
}
