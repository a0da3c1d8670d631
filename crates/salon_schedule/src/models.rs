// --- File: crates/salon_schedule/src/models.rs ---
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;

/// Services indexed by id.
pub type ServiceCatalog = HashMap<String, Service>;

/// Builds a [`ServiceCatalog`] from a list of services. Later duplicates win.
pub fn catalog_from<I>(services: I) -> ServiceCatalog
where
    I: IntoIterator<Item = Service>,
{
    services
        .into_iter()
        .map(|service| (service.id.clone(), service))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub duration_minutes: u32,
    pub price: i64, // minor units, e.g. 2500 = 25.00
}

impl Service {
    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.duration_minutes))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub specialty: String,
    #[serde(default)]
    pub email: Option<String>,
    pub status: WorkerStatus,
}

impl Worker {
    pub fn is_active(&self) -> bool {
        self.status == WorkerStatus::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Confirmed appointments can be completed or cancelled; nothing else moves.
    pub fn can_become(self, next: AppointmentStatus) -> bool {
        matches!(
            (self, next),
            (AppointmentStatus::Confirmed, AppointmentStatus::Completed)
                | (AppointmentStatus::Confirmed, AppointmentStatus::Cancelled)
        )
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

/// A booked slot. Times are shop-local wall-clock times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub client_name: String,
    pub service_id: String,
    pub worker_id: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_id: Option<String>,
}

impl Appointment {
    /// Half-open containment: `start_time <= at < end_time`.
    pub fn covers(&self, at: NaiveDateTime) -> bool {
        self.start_time <= at && at < self.end_time
    }

    pub fn date(&self) -> NaiveDate {
        self.start_time.date()
    }

    pub fn is_recurring(&self) -> bool {
        self.recurrence_id.is_some()
    }
}

/// Repetition rule of a booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recurrence {
    #[default]
    None,
    Weekly,
    BiWeekly,
    Monthly,
}

impl Recurrence {
    pub fn is_recurring(self) -> bool {
        self != Recurrence::None
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Recurrence::None => "none",
            Recurrence::Weekly => "weekly",
            Recurrence::BiWeekly => "bi-weekly",
            Recurrence::Monthly => "monthly",
        };
        f.write_str(label)
    }
}

impl FromStr for Recurrence {
    type Err = ScheduleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "" | "none" => Ok(Recurrence::None),
            "weekly" => Ok(Recurrence::Weekly),
            "bi-weekly" => Ok(Recurrence::BiWeekly),
            "monthly" => Ok(Recurrence::Monthly),
            other => Err(ScheduleError::Validation(format!(
                "unknown recurrence '{}'",
                other
            ))),
        }
    }
}
