// --- File: crates/salon_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type shared by the salon crates.
///
/// Crates with their own error enum implement `From<TheirError> for SalonError`
/// so binaries can propagate everything with `?`.
#[derive(Error, Debug)]
pub enum SalonError {
    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred because the request conflicts with current state
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Attaches a description of the failed step to a foreign error, turning it
/// into [`SalonError::InternalError`].
pub trait Context<T> {
    fn context(self, step: impl fmt::Display) -> Result<T, SalonError>;

    /// Like [`Context::context`], building the description only on error.
    fn with_context<C: fmt::Display>(self, step: impl FnOnce() -> C) -> Result<T, SalonError>;
}

impl<T, E: std::error::Error> Context<T> for Result<T, E> {
    fn context(self, step: impl fmt::Display) -> Result<T, SalonError> {
        self.map_err(|error| SalonError::InternalError(format!("{}: {}", step, error)))
    }

    fn with_context<C: fmt::Display>(self, step: impl FnOnce() -> C) -> Result<T, SalonError> {
        self.map_err(|error| SalonError::InternalError(format!("{}: {}", step(), error)))
    }
}

impl From<serde_json::Error> for SalonError {
    fn from(err: serde_json::Error) -> Self {
        SalonError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for SalonError {
    fn from(err: std::io::Error) -> Self {
        SalonError::InternalError(err.to_string())
    }
}

impl From<salon_config::ConfigError> for SalonError {
    fn from(err: salon_config::ConfigError) -> Self {
        SalonError::ConfigError(err.to_string())
    }
}

pub fn config_error<T: fmt::Display>(message: T) -> SalonError {
    SalonError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> SalonError {
    SalonError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> SalonError {
    SalonError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> SalonError {
    SalonError::ConflictError(message.to_string())
}
