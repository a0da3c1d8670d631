// --- File: crates/salon_schedule/src/recurrence.rs ---
use chrono::{Days, Months, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::booking::NewAppointmentRequest;
use crate::models::{Appointment, AppointmentStatus, Recurrence, ServiceCatalog};

/// Source of identifiers for generated appointments.
pub trait IdGenerator {
    fn appointment_id(&mut self) -> String;
    fn recurrence_id(&mut self) -> String;
}

/// Random v4 identifiers, `appt-<uuid>` and `rec-<uuid>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn appointment_id(&mut self) -> String {
        format!("appt-{}", Uuid::new_v4())
    }

    fn recurrence_id(&mut self) -> String {
        format!("rec-{}", Uuid::new_v4())
    }
}

/// Start of the `k`-th occurrence (`k = 0` is the seed).
///
/// Every occurrence is computed from the seed, not from the previous one, so
/// monthly series keep their day of month: a series starting Jan 31 goes
/// Feb 28/29, Mar 31, Apr 30, ... (clamped to the month's last day, never
/// rolled into the next month). Returns `None` past the calendar range, and
/// for `k > 0` when the request does not repeat.
pub fn occurrence_start(
    seed: NaiveDateTime,
    recurrence: Recurrence,
    k: u32,
) -> Option<NaiveDateTime> {
    match recurrence {
        Recurrence::None => (k == 0).then_some(seed),
        Recurrence::Weekly => seed.checked_add_days(Days::new(7 * u64::from(k))),
        Recurrence::BiWeekly => seed.checked_add_days(Days::new(14 * u64::from(k))),
        Recurrence::Monthly => seed.checked_add_months(Months::new(k)),
    }
}

/// Last instant an occurrence may start at.
///
/// The end date is inclusive (its last millisecond). Without an end date, or
/// for a one-off booking, only the seed itself fits.
pub fn recurrence_boundary(request: &NewAppointmentRequest) -> NaiveDateTime {
    match request.recurrence_end_date {
        Some(end) if request.recurrence.is_recurring() => end_of_day(end),
        _ => request.start_time,
    }
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| date.and_time(NaiveTime::default()))
}

/// Expands a booking request into concrete appointments.
///
/// All instances are `confirmed`, last as long as the service and, for
/// repeating requests, share one recurrence id. An unknown service yields no
/// instances; so does an end date before the first start. Expansion stops at
/// the end of the calendar range, including an instance that would end past it.
pub fn expand_recurrence<G: IdGenerator + ?Sized>(
    request: &NewAppointmentRequest,
    services: &ServiceCatalog,
    ids: &mut G,
) -> Vec<Appointment> {
    let Some(service) = services.get(&request.service_id) else {
        warn!(
            "Booking for {} references unknown service {}; nothing booked",
            request.client_name, request.service_id
        );
        return Vec::new();
    };

    let boundary = recurrence_boundary(request);
    let recurrence_id = request
        .recurrence
        .is_recurring()
        .then(|| ids.recurrence_id());

    let mut instances = Vec::new();
    for k in 0u32.. {
        let Some(start_time) = occurrence_start(request.start_time, request.recurrence, k) else {
            break;
        };
        if start_time > boundary {
            break;
        }
        let Some(end_time) = start_time.checked_add_signed(service.duration()) else {
            break;
        };
        instances.push(Appointment {
            id: ids.appointment_id(),
            client_name: request.client_name.clone(),
            service_id: request.service_id.clone(),
            worker_id: request.worker_id.clone(),
            start_time,
            end_time,
            status: AppointmentStatus::Confirmed,
            recurrence_id: recurrence_id.clone(),
        });
    }

    debug!(
        "Expanded {} booking for {} from {} until {}: {} instance(s)",
        request.recurrence,
        request.client_name,
        request.start_time,
        boundary,
        instances.len()
    );
    instances
}
