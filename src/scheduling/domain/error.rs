//! Error types for scheduling domain construction and parsing.

use thiserror::Error;

/// Errors returned while constructing scheduling domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchedulingDomainError {
    /// The window's end does not come strictly after its start.
    #[error("appointment window must end after it starts")]
    InvalidWindow,

    /// The listing range's start comes after its end.
    #[error("date range must not start after it ends")]
    InvalidDateRange,

    /// The owner email is blank or not a plausible address.
    #[error("invalid owner email address: {0}")]
    InvalidOwnerEmail(String),

    /// The animal name is empty after trimming.
    #[error("animal name must not be empty")]
    EmptyAnimalName,
}

/// Error returned while parsing appointment statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown appointment status: {0}")]
pub struct ParseAppointmentStatusError(pub String);
