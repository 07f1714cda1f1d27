//! Veterinarian schedule listing types.

use super::{AppointmentStatus, DateRange, TimeWindow, VeterinarianId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Untrusted request to list a veterinarian's appointments in a range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VetScheduleQuery {
    /// Veterinarian whose schedule is requested, if supplied.
    pub veterinarian_id: Option<VeterinarianId>,
    /// First day of the range, if supplied.
    pub start_date: Option<DateTime<Utc>>,
    /// Last day of the range, if supplied.
    pub end_date: Option<DateTime<Utc>>,
}

/// Validated schedule listing parameters produced by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleRange {
    /// Veterinarian whose schedule is listed.
    pub veterinarian_id: VeterinarianId,
    /// Inclusive range matched against appointment start times.
    pub range: DateRange,
}

/// One row of a veterinarian's schedule.
///
/// A denormalized read model: the animal and owner names are joined in so
/// the schedule can be displayed without further lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VetScheduleEntry {
    /// Occupied time window.
    pub window: TimeWindow,
    /// Name of the animal being seen.
    pub animal_name: String,
    /// Display name of the animal's owner.
    pub owner_name: String,
    /// Appointment status.
    pub status: AppointmentStatus,
}
