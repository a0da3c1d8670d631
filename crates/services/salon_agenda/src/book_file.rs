// File: services/salon_agenda/src/book_file.rs
use salon_common::{Context, SalonError};
use salon_schedule::{AppointmentBook, BookData};
use std::fs;
use std::path::Path;
use tracing::info;

/// Reads a JSON book file (`workers`, `services`, `appointments`).
pub fn load_book(path: &Path) -> Result<AppointmentBook, SalonError> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading book {}", path.display()))?;
    let data: BookData = serde_json::from_str(&raw)?;
    info!(
        "Loaded {} worker(s), {} service(s), {} appointment(s) from {}",
        data.workers.len(),
        data.services.len(),
        data.appointments.len(),
        path.display()
    );
    Ok(AppointmentBook::from_data(data))
}
