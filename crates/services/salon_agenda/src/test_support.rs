// File: services/salon_agenda/src/test_support.rs
use std::io::Write;
use tempfile::NamedTempFile;

pub const SAMPLE_BOOK: &str = r#"{
    "workers": [
        { "id": "w1", "name": "Carlos", "specialty": "Barber", "status": "active" },
        { "id": "w2", "name": "Sofia", "specialty": "Colorist", "email": "sofia@example.com", "status": "active" },
        { "id": "w3", "name": "Miguel", "specialty": "Barber", "status": "inactive" }
    ],
    "services": [
        { "id": "s1", "name": "Haircut", "category_id": "sc1", "duration_minutes": 30, "price": 2500 },
        { "id": "s3", "name": "Hair Dye", "category_id": "sc2", "duration_minutes": 90, "price": 7500 }
    ],
    "appointments": [
        {
            "id": "a1", "client_name": "Juan", "service_id": "s1", "worker_id": "w1",
            "start_time": "2024-06-03T10:00:00", "end_time": "2024-06-03T10:30:00",
            "status": "confirmed"
        },
        {
            "id": "a2", "client_name": "Elena", "service_id": "s3", "worker_id": "w2",
            "start_time": "2024-06-03T14:00:00", "end_time": "2024-06-03T15:30:00",
            "status": "cancelled", "recurrence_id": "rec-1"
        }
    ]
}"#;

pub fn write_book(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}
