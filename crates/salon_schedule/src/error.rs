// --- File: crates/salon_schedule/src/error.rs ---
use crate::models::AppointmentStatus;
use salon_common::{config_error, conflict, not_found, validation_error, SalonError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ScheduleError {
    #[error("Failed to parse time: {0}")]
    TimeParseError(String),
    #[error("Invalid time grid: {0}")]
    InvalidGrid(String),
    #[error("Invalid booking request: {0}")]
    Validation(String),
    #[error("Appointment not found: {0}")]
    AppointmentNotFound(String),
    #[error("Appointment {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),
}

impl From<ScheduleError> for SalonError {
    fn from(err: ScheduleError) -> Self {
        match err {
            ScheduleError::TimeParseError(_) => SalonError::ParseError(err.to_string()),
            ScheduleError::InvalidGrid(_) | ScheduleError::UnknownTimeZone(_) => config_error(err),
            ScheduleError::Validation(_) => validation_error(err),
            ScheduleError::AppointmentNotFound(_) => not_found(err),
            ScheduleError::InvalidTransition { .. } => conflict(err),
        }
    }
}
