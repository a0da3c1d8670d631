// --- File: crates/salon_common/src/lib.rs ---

pub mod error; // Error handling
pub mod logging; // Logging utilities


// Re-export error types and utilities for easier access
pub use error::{
    config_error, conflict, not_found, validation_error, Context, SalonError,
};

// Re-export logging utilities for easier access
pub use logging::{init, init_from_config, init_with_level, log_error, log_result};
