// --- File: crates/salon_schedule/src/lib.rs ---
pub mod book;
pub mod booking;
pub mod calendar;
pub mod error;
pub mod filters;
pub mod grid;
#[cfg(test)]
mod grid_proptest;
pub mod models;
pub mod recurrence;
#[cfg(test)]
mod recurrence_proptest;
#[cfg(test)]
mod test_support;

pub use book::{AppointmentBook, BookData};
pub use booking::{BookingForm, NewAppointmentRequest};
pub use calendar::{month_overview, shift_month, today_in, CalendarDay, MonthOverview};
pub use error::ScheduleError;
pub use filters::{active_workers, appointments_on, group_by_date, workers_to_display, WorkerFilter};
pub use grid::{resolve_day_grid, DayGrid, Placement, TimeGrid, TimeSlot, WorkerColumn};
pub use models::{
    catalog_from, Appointment, AppointmentStatus, Recurrence, Service, ServiceCatalog, Worker,
    WorkerStatus,
};
pub use recurrence::{expand_recurrence, IdGenerator, UuidIds};
