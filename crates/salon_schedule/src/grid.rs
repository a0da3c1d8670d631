// --- File: crates/salon_schedule/src/grid.rs ---
//! Day grid placement.
//!
//! A day is cut into fixed slots (09:00–19:30 every 30 minutes by default).
//! [`resolve_day_grid`] decides, for every worker and every slot, whether an
//! appointment block opens there, whether the slot is already covered by a
//! block opened above it, or whether the cell is free. Renderers walk the
//! result and never have to redo the overlap arithmetic themselves.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use salon_config::{SchedulingConfig, StartSlotPolicy};
use tracing::{debug, warn};

use crate::error::ScheduleError;
use crate::models::{Appointment, Service, ServiceCatalog, Worker};

/// One row of the day grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub index: usize,
    pub time: NaiveTime,
}

impl TimeSlot {
    /// Absolute timestamp of this slot on `date`.
    pub fn at(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.time)
    }

    /// Row label as shown in the agenda, e.g. `9:00`, `13:30`.
    pub fn label(&self) -> String {
        format!("{}:{:02}", self.time.hour(), self.time.minute())
    }
}

/// The fixed sequence of slots a day is rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeGrid {
    slots: Vec<TimeSlot>,
    slot_length: Duration,
    policy: StartSlotPolicy,
}

impl TimeGrid {
    /// Builds a grid from `first` to `last` (both inclusive when `last` lies
    /// on the step) every `slot_minutes`.
    pub fn new(
        first: NaiveTime,
        last: NaiveTime,
        slot_minutes: u32,
        policy: StartSlotPolicy,
    ) -> Result<Self, ScheduleError> {
        if slot_minutes == 0 {
            return Err(ScheduleError::InvalidGrid(
                "slot length must be positive".to_string(),
            ));
        }
        if last < first {
            return Err(ScheduleError::InvalidGrid(format!(
                "last slot {} is before first slot {}",
                last, first
            )));
        }
        let slot_length = Duration::minutes(i64::from(slot_minutes));
        Ok(Self {
            slots: build_slots(first, last, slot_length),
            slot_length,
            policy,
        })
    }

    /// Builds the grid described by the `[scheduling]` config section.
    pub fn from_config(config: &SchedulingConfig) -> Result<Self, ScheduleError> {
        let first = parse_clock(&config.first_slot)?;
        let last = parse_clock(&config.last_slot)?;
        Self::new(first, last, config.slot_minutes, config.start_slot_policy)
    }

    /// The shop's standard day: 22 half-hour slots from 09:00 to 19:30.
    pub fn salon_day() -> Self {
        let slot_length = Duration::minutes(30);
        Self {
            slots: build_slots(
                NaiveTime::default() + Duration::hours(9),
                NaiveTime::default() + Duration::hours(19) + Duration::minutes(30),
                slot_length,
            ),
            slot_length,
            policy: StartSlotPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: StartSlotPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot_length(&self) -> Duration {
        self.slot_length
    }

    pub fn policy(&self) -> StartSlotPolicy {
        self.policy
    }

    /// Number of slots a block of `duration` occupies: `ceil(duration / slot)`,
    /// never less than one.
    pub fn span_slots(&self, duration: Duration) -> usize {
        let slot_secs = self.slot_length.num_seconds().max(1);
        let secs = duration.num_seconds();
        let span = (secs + slot_secs - 1).div_euclid(slot_secs);
        span.max(1) as usize
    }
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self::salon_day()
    }
}

fn build_slots(first: NaiveTime, last: NaiveTime, step: Duration) -> Vec<TimeSlot> {
    let mut slots = Vec::new();
    let mut time = first;
    loop {
        slots.push(TimeSlot {
            index: slots.len(),
            time,
        });
        let (next, wrapped) = time.overflowing_add_signed(step);
        if wrapped != 0 || next > last {
            break;
        }
        time = next;
    }
    slots
}

/// Parses an `HH:MM` clock time.
pub fn parse_clock(value: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|e| ScheduleError::TimeParseError(format!("'{}': {}", value, e)))
}

/// What a single (worker, slot) cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement<'a> {
    /// An appointment block opens here and covers `span_slots` rows.
    Start {
        appointment: &'a Appointment,
        service: &'a Service,
        span_slots: usize,
    },
    /// Covered by a block opened in an earlier row; render nothing new.
    Continuation { appointment: &'a Appointment },
    Empty,
}

impl<'a> Placement<'a> {
    pub fn appointment(&self) -> Option<&'a Appointment> {
        match *self {
            Placement::Start { appointment, .. } | Placement::Continuation { appointment } => {
                Some(appointment)
            }
            Placement::Empty => None,
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, Placement::Start { .. })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Placement::Empty)
    }
}

/// One worker's cells, aligned with the grid's slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerColumn<'a> {
    pub worker: &'a Worker,
    pub cells: Vec<Placement<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGrid<'a> {
    pub date: NaiveDate,
    pub slots: Vec<TimeSlot>,
    pub columns: Vec<WorkerColumn<'a>>,
}

impl<'a> DayGrid<'a> {
    pub fn column(&self, worker_id: &str) -> Option<&WorkerColumn<'a>> {
        self.columns.iter().find(|c| c.worker.id == worker_id)
    }

    pub fn placement(&self, worker_id: &str, slot_index: usize) -> Option<&Placement<'a>> {
        self.column(worker_id)
            .and_then(|column| column.cells.get(slot_index))
    }

    /// Row-major view: each slot with its cells in column order.
    pub fn rows<'g>(&'g self) -> impl Iterator<Item = (TimeSlot, Vec<&'g Placement<'a>>)> + 'g {
        self.slots.iter().map(move |slot| {
            let cells = self
                .columns
                .iter()
                .filter_map(|column| column.cells.get(slot.index))
                .collect();
            (*slot, cells)
        })
    }

    /// Number of blocks drawn on this day.
    pub fn block_count(&self) -> usize {
        self.columns
            .iter()
            .flat_map(|column| column.cells.iter())
            .filter(|cell| cell.is_start())
            .count()
    }
}

/// Places a day's appointments onto the grid for each worker.
///
/// `workers` is expected to be filtered already (active, optionally a single
/// worker) and `appointments` to belong to `date`; appointments of other days
/// simply never cover a slot. An appointment whose service is missing from
/// `services` is not drawn. If two appointments of the same worker cover the
/// same slot the first one in input order wins.
pub fn resolve_day_grid<'a, W, A>(
    grid: &TimeGrid,
    date: NaiveDate,
    workers: W,
    appointments: A,
    services: &'a ServiceCatalog,
) -> DayGrid<'a>
where
    W: IntoIterator<Item = &'a Worker>,
    A: IntoIterator<Item = &'a Appointment>,
{
    let appointments: Vec<&'a Appointment> = appointments.into_iter().collect();
    for appointment in &appointments {
        if !services.contains_key(&appointment.service_id) {
            warn!(
                "Appointment {} references unknown service {}; not drawn",
                appointment.id, appointment.service_id
            );
        }
    }

    let columns: Vec<WorkerColumn<'a>> = workers
        .into_iter()
        .map(|worker| {
            let own: Vec<&'a Appointment> = appointments
                .iter()
                .copied()
                .filter(|a| a.worker_id == worker.id)
                .collect();
            let cells = grid
                .slots()
                .iter()
                .map(|slot| place(grid, date, slot, &own, services))
                .collect();
            WorkerColumn { worker, cells }
        })
        .collect();

    let day = DayGrid {
        date,
        slots: grid.slots().to_vec(),
        columns,
    };
    debug!(
        "Resolved grid for {}: {} workers x {} slots, {} blocks",
        date,
        day.columns.len(),
        day.slots.len(),
        day.block_count()
    );
    day
}

fn place<'a>(
    grid: &TimeGrid,
    date: NaiveDate,
    slot: &TimeSlot,
    appointments: &[&'a Appointment],
    services: &'a ServiceCatalog,
) -> Placement<'a> {
    let at = slot.at(date);
    let Some(appointment) = appointments.iter().copied().find(|a| a.covers(at)) else {
        return Placement::Empty;
    };
    let Some(service) = services.get(&appointment.service_id) else {
        return Placement::Empty;
    };

    let opens_here = match grid.policy() {
        StartSlotPolicy::ExactMatch => at == appointment.start_time,
        StartSlotPolicy::FirstCovered => match slot.index.checked_sub(1) {
            None => true,
            Some(prev) => !appointment.covers(grid.slots()[prev].at(date)),
        },
    };
    if !opens_here {
        return Placement::Continuation { appointment };
    }

    // aligned starts give ceil(duration / slot); later first rows only count what is left
    let end = appointment
        .start_time
        .checked_add_signed(service.duration())
        .unwrap_or(appointment.end_time);
    let remaining = end - at;
    Placement::Start {
        appointment,
        service,
        span_slots: grid.span_slots(remaining),
    }
}
