//! Shared fixtures for the unit tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{
    catalog_from, Appointment, AppointmentStatus, Service, ServiceCatalog, Worker, WorkerStatus,
};
use crate::recurrence::IdGenerator;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).expect("valid time")
}

pub fn service(id: &str, name: &str, duration_minutes: u32, price: i64) -> Service {
    Service {
        id: id.to_string(),
        name: name.to_string(),
        category_id: "sc1".to_string(),
        duration_minutes,
        price,
    }
}

/// Haircut 30 min, Classic Shave 45 min, Hair Dye 90 min.
pub fn services() -> ServiceCatalog {
    catalog_from(vec![
        service("s1", "Haircut", 30, 2500),
        service("s2", "Classic Shave", 45, 3000),
        service("s3", "Hair Dye", 90, 7500),
    ])
}

pub fn worker(id: &str, name: &str, status: WorkerStatus) -> Worker {
    Worker {
        id: id.to_string(),
        name: name.to_string(),
        specialty: "Stylist".to_string(),
        email: None,
        status,
    }
}

/// w1, w2, w4 active; w3 inactive.
pub fn workers() -> Vec<Worker> {
    vec![
        worker("w1", "Carlos", WorkerStatus::Active),
        worker("w2", "Sofia", WorkerStatus::Active),
        worker("w3", "Miguel", WorkerStatus::Inactive),
        worker("w4", "Lucia", WorkerStatus::Active),
    ]
}

pub fn appointment(
    id: &str,
    service: &Service,
    worker_id: &str,
    start: NaiveDateTime,
) -> Appointment {
    Appointment {
        id: id.to_string(),
        client_name: format!("Client {}", id),
        service_id: service.id.clone(),
        worker_id: worker_id.to_string(),
        start_time: start,
        end_time: start + service.duration(),
        status: AppointmentStatus::Confirmed,
        recurrence_id: None,
    }
}

/// Predictable ids: `appt-1`, `appt-2`, ... and `rec-1`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    appointments: u32,
    recurrences: u32,
}

impl IdGenerator for SequentialIds {
    fn appointment_id(&mut self) -> String {
        self.appointments += 1;
        format!("appt-{}", self.appointments)
    }

    fn recurrence_id(&mut self) -> String {
        self.recurrences += 1;
        format!("rec-{}", self.recurrences)
    }
}
