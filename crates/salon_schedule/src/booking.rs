// --- File: crates/salon_schedule/src/booking.rs ---
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::grid::parse_clock;
use crate::models::Recurrence;

/// Raw values of the "New Appointment" form, as typed by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingForm {
    pub client_name: String,
    pub service_id: String,
    pub worker_id: String,
    pub date: String, // YYYY-MM-DD
    pub time: String, // HH:MM
    #[serde(default)]
    pub recurrence: String, // none | weekly | bi-weekly | monthly
    #[serde(default)]
    pub recurrence_end_date: Option<String>, // YYYY-MM-DD, inclusive
}

/// A validated booking request, input of the recurrence expander.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointmentRequest {
    pub client_name: String,
    pub service_id: String,
    pub worker_id: String,
    pub start_time: NaiveDateTime,
    #[serde(default)]
    pub recurrence: Recurrence,
    #[serde(default)]
    pub recurrence_end_date: Option<NaiveDate>,
}

impl NewAppointmentRequest {
    /// A one-off booking.
    pub fn single(
        client_name: impl Into<String>,
        service_id: impl Into<String>,
        worker_id: impl Into<String>,
        start_time: NaiveDateTime,
    ) -> Self {
        Self {
            client_name: client_name.into(),
            service_id: service_id.into(),
            worker_id: worker_id.into(),
            start_time,
            recurrence: Recurrence::None,
            recurrence_end_date: None,
        }
    }

    /// Repeats the booking until `until` (inclusive).
    pub fn repeating(mut self, recurrence: Recurrence, until: NaiveDate) -> Self {
        self.recurrence = recurrence;
        self.recurrence_end_date = Some(until);
        self
    }

    /// Validates and converts the raw form values.
    ///
    /// The end date is only read for recurring bookings, like the form which
    /// hides the field otherwise. An end date before the start date is not
    /// rejected here; it simply expands to nothing.
    pub fn from_form(form: &BookingForm) -> Result<Self, ScheduleError> {
        let client_name = form.client_name.trim();
        if client_name.is_empty() {
            return Err(ScheduleError::Validation(
                "client name is required".to_string(),
            ));
        }
        let service_id = required(&form.service_id, "service")?;
        let worker_id = required(&form.worker_id, "staff member")?;

        let date = parse_date(&form.date)?;
        let time = parse_clock(&form.time)?;
        let recurrence: Recurrence = form.recurrence.parse()?;

        let recurrence_end_date = match form.recurrence_end_date.as_deref().map(str::trim) {
            Some(end) if recurrence.is_recurring() && !end.is_empty() => Some(parse_date(end)?),
            _ => None,
        };

        Ok(Self {
            client_name: client_name.to_string(),
            service_id,
            worker_id,
            start_time: date.and_time(time),
            recurrence,
            recurrence_end_date,
        })
    }
}

fn required(value: &str, what: &str) -> Result<String, ScheduleError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ScheduleError::Validation(format!("{} is required", what)));
    }
    Ok(value.to_string())
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ScheduleError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| ScheduleError::TimeParseError(format!("'{}': {}", value, e)))
}
