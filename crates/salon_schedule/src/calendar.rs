// --- File: crates/salon_schedule/src/calendar.rs ---
use chrono::{Datelike, Days, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::ScheduleError;
use crate::filters::group_by_date;
use crate::models::Appointment;

/// Six full weeks, Sunday first.
pub const CALENDAR_CELLS: usize = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub is_today: bool,
    pub appointment_count: usize, // always 0 outside the displayed month
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthOverview {
    pub year: i32,
    pub month: u32,
    pub days: Vec<CalendarDay>,
}

impl MonthOverview {
    pub fn weeks(&self) -> std::slice::Chunks<'_, CalendarDay> {
        self.days.chunks(7)
    }

    pub fn day(&self, date: NaiveDate) -> Option<&CalendarDay> {
        self.days.iter().find(|d| d.date == date)
    }

    pub fn total_appointments(&self) -> usize {
        self.days.iter().map(|d| d.appointment_count).sum()
    }
}

/// Builds the month view: 42 days starting on the Sunday on or before the
/// 1st, with the number of appointments starting on each day of the month.
pub fn month_overview(
    year: i32,
    month: u32,
    today: NaiveDate,
    appointments: &[Appointment],
) -> Result<MonthOverview, ScheduleError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ScheduleError::Validation(format!("invalid month {}-{}", year, month)))?;
    let lead = u64::from(first.weekday().num_days_from_sunday());
    let grid_start = first
        .checked_sub_days(Days::new(lead))
        .ok_or_else(|| ScheduleError::Validation(format!("month {}-{} out of range", year, month)))?;

    let by_date = group_by_date(appointments);
    let days = (0..CALENDAR_CELLS as u64)
        .filter_map(|offset| grid_start.checked_add_days(Days::new(offset)))
        .map(|date| {
            let in_current_month = date.year() == year && date.month() == month;
            let appointment_count = if in_current_month {
                by_date.get(&date).map_or(0, Vec::len)
            } else {
                0
            };
            CalendarDay {
                date,
                in_current_month,
                is_today: date == today,
                appointment_count,
            }
        })
        .collect();

    Ok(MonthOverview { year, month, days })
}

/// Moves `offset` months from (`year`, `month`), e.g. `(2024, 12, 1)` gives `(2025, 1)`.
pub fn shift_month(year: i32, month: u32, offset: i32) -> (i32, u32) {
    let index = year * 12 + (month as i32 - 1) + offset;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

/// Current calendar date in the given IANA time zone.
pub fn today_in(time_zone: &str) -> Result<NaiveDate, ScheduleError> {
    let tz: Tz = time_zone
        .trim()
        .parse()
        .map_err(|_| ScheduleError::UnknownTimeZone(time_zone.to_string()))?;
    Ok(Utc::now().with_timezone(&tz).date_naive())
}
