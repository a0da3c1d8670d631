// --- File: crates/salon_schedule/src/book.rs ---
//! The appointment book: canonical owner of staff, services and appointments.
//!
//! The calculators in [`crate::grid`] and [`crate::recurrence`] are pure; the
//! book feeds them and swaps in their results.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

use crate::booking::{BookingForm, NewAppointmentRequest};
use crate::calendar::{month_overview, MonthOverview};
use crate::error::ScheduleError;
use crate::filters::{self, WorkerFilter};
use crate::grid::{resolve_day_grid, DayGrid, TimeGrid};
use crate::models::{
    catalog_from, Appointment, AppointmentStatus, Service, ServiceCatalog, Worker,
};
use crate::recurrence::{expand_recurrence, IdGenerator};

/// Serialized form of a book, e.g. a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookData {
    #[serde(default)]
    pub workers: Vec<Worker>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

#[derive(Debug, Clone, Default)]
pub struct AppointmentBook {
    workers: Vec<Worker>,
    services: ServiceCatalog,
    appointments: Vec<Appointment>,
}

impl AppointmentBook {
    pub fn new(workers: Vec<Worker>, services: Vec<Service>, appointments: Vec<Appointment>) -> Self {
        Self {
            workers,
            services: catalog_from(services),
            appointments,
        }
    }

    pub fn from_data(data: BookData) -> Self {
        Self::new(data.workers, data.services, data.appointments)
    }

    /// Snapshot of the book; services sorted by id.
    pub fn to_data(&self) -> BookData {
        let mut services: Vec<Service> = self.services.values().cloned().collect();
        services.sort_by(|a, b| a.id.cmp(&b.id));
        BookData {
            workers: self.workers.clone(),
            services,
            appointments: self.appointments.clone(),
        }
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn services(&self) -> &ServiceCatalog {
        &self.services
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn find(&self, appointment_id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == appointment_id)
    }

    pub fn active_workers(&self) -> Vec<&Worker> {
        filters::active_workers(&self.workers)
    }

    pub fn workers_to_display(&self, filter: &WorkerFilter) -> Vec<&Worker> {
        filters::workers_to_display(&self.workers, filter)
    }

    pub fn appointments_on(&self, date: NaiveDate) -> Vec<&Appointment> {
        filters::appointments_on(date, &self.appointments)
    }

    pub fn appointments_by_date(&self) -> BTreeMap<NaiveDate, Vec<&Appointment>> {
        filters::group_by_date(&self.appointments)
    }

    /// All instances generated from one recurring booking, in start order.
    pub fn series(&self, recurrence_id: &str) -> Vec<&Appointment> {
        let mut series: Vec<&Appointment> = self
            .appointments
            .iter()
            .filter(|a| a.recurrence_id.as_deref() == Some(recurrence_id))
            .collect();
        series.sort_by_key(|a| a.start_time);
        series
    }

    /// Expands `request` and appends the instances. Returns the new instances;
    /// empty when nothing could be booked (unknown service, empty window).
    pub fn book<G: IdGenerator + ?Sized>(
        &mut self,
        request: &NewAppointmentRequest,
        ids: &mut G,
    ) -> &[Appointment] {
        let created = expand_recurrence(request, &self.services, ids);
        let added = created.len();
        if added > 0 {
            info!(
                "Booked {} appointment(s) for {} with {}",
                added, request.client_name, request.worker_id
            );
        }
        self.appointments.extend(created);
        &self.appointments[self.appointments.len() - added..]
    }

    /// Validates a raw form and books it.
    pub fn book_form<G: IdGenerator + ?Sized>(
        &mut self,
        form: &BookingForm,
        ids: &mut G,
    ) -> Result<&[Appointment], ScheduleError> {
        let request = NewAppointmentRequest::from_form(form)?;
        Ok(self.book(&request, ids))
    }

    /// Moves an appointment to `status`. Only confirmed appointments move, to
    /// completed or cancelled; the book is unchanged on error.
    pub fn set_status(
        &mut self,
        appointment_id: &str,
        status: AppointmentStatus,
    ) -> Result<&Appointment, ScheduleError> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.id == appointment_id)
            .ok_or_else(|| ScheduleError::AppointmentNotFound(appointment_id.to_string()))?;

        if !appointment.status.can_become(status) {
            return Err(ScheduleError::InvalidTransition {
                id: appointment.id.clone(),
                from: appointment.status,
                to: status,
            });
        }
        info!(
            "Appointment {} moved from {} to {}",
            appointment.id, appointment.status, status
        );
        appointment.status = status;
        Ok(&*appointment)
    }

    pub fn cancel(&mut self, appointment_id: &str) -> Result<&Appointment, ScheduleError> {
        self.set_status(appointment_id, AppointmentStatus::Cancelled)
    }

    pub fn complete(&mut self, appointment_id: &str) -> Result<&Appointment, ScheduleError> {
        self.set_status(appointment_id, AppointmentStatus::Completed)
    }

    /// Daily view: active workers matching `filter`, the day's appointments.
    pub fn day_grid<'a>(
        &'a self,
        grid: &TimeGrid,
        date: NaiveDate,
        filter: &WorkerFilter,
    ) -> DayGrid<'a> {
        resolve_day_grid(
            grid,
            date,
            self.workers_to_display(filter),
            self.appointments_on(date),
            &self.services,
        )
    }

    pub fn month_overview(
        &self,
        year: i32,
        month: u32,
        today: NaiveDate,
    ) -> Result<MonthOverview, ScheduleError> {
        month_overview(year, month, today, &self.appointments)
    }
}
