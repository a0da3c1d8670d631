// File: services/salon_agenda/src/render.rs
use salon_schedule::{AppointmentStatus, DayGrid, Placement};

const TIME_WIDTH: usize = 6;
const CELL_WIDTH: usize = 24;

/// Renders a day grid as a fixed-width text table, one row per slot.
///
/// A block shows client and service on its first row and a `|` marker on the
/// rows it continues through. Cancelled and completed blocks show their
/// status instead of the service.
pub fn render_day(day: &DayGrid<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!("Agenda for {}\n", day.date.format("%A, %Y-%m-%d")));

    if day.columns.is_empty() {
        out.push_str("No staff members to show\n");
        return out;
    }

    out.push_str(&format!("{:<w$}", "Time", w = TIME_WIDTH));
    for column in &day.columns {
        out.push_str(&format!("| {:<w$}", truncate(&column.worker.name), w = CELL_WIDTH));
    }
    out.push('\n');

    for (slot, cells) in day.rows() {
        out.push_str(&format!("{:<w$}", slot.label(), w = TIME_WIDTH));
        for cell in cells {
            out.push_str(&format!("| {:<w$}", truncate(&cell_text(cell)), w = CELL_WIDTH));
        }
        out.push('\n');
    }

    out.push_str(&format!("{} appointment(s)\n", day.block_count()));
    out
}

fn cell_text(cell: &Placement<'_>) -> String {
    match cell {
        Placement::Start {
            appointment,
            service,
            ..
        } => match appointment.status {
            AppointmentStatus::Confirmed => {
                format!("{} - {}", appointment.client_name, service.name)
            }
            status => format!("{} ({})", appointment.client_name, status),
        },
        Placement::Continuation { .. } => "|".to_string(),
        Placement::Empty => String::new(),
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= CELL_WIDTH {
        return text.to_string();
    }
    let mut short: String = text.chars().take(CELL_WIDTH - 1).collect();
    short.push('~');
    short
}
