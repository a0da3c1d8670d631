// --- File: crates/salon_config/src/models.rs ---

use serde::{Deserialize, Serialize};

/// How the day grid decides which slot opens an appointment block.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StartSlotPolicy {
    /// A block opens only where the slot time equals the appointment start.
    /// Appointments off the slot boundary never open a block.
    ExactMatch,
    /// A block opens on the first grid slot the appointment covers.
    #[default]
    FirstCovered,
}

// --- Scheduling Grid Config ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SchedulingConfig {
    pub first_slot: String, // "HH:MM", clock time of the first grid row
    pub last_slot: String,  // "HH:MM", clock time of the last grid row (inclusive)
    pub slot_minutes: u32,
    pub start_slot_policy: StartSlotPolicy,
    pub time_zone: String, // IANA name, used to resolve "today"
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            first_slot: "09:00".to_string(),
            last_slot: "19:30".to_string(),
            slot_minutes: 30,
            start_slot_policy: StartSlotPolicy::default(),
            time_zone: "Europe/Zurich".to_string(),
        }
    }
}

// --- Logging Config ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String, // trace | debug | info | warn | error
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

// --- Agenda (printing tool) Config ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct AgendaConfig {
    pub data_path: Option<String>, // JSON book file; can be overridden by the first CLI argument
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub scheduling: SchedulingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub agenda: AgendaConfig,
}
