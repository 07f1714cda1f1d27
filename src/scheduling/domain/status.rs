//! Appointment status taxonomy.

use super::ParseAppointmentStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Appointment lifecycle status.
///
/// All five values are valid taxonomy members, but only
/// [`AppointmentStatus::Scheduled`], [`AppointmentStatus::Completed`], and
/// [`AppointmentStatus::Cancelled`] are reachable through the update path;
/// `InProgress` and `NoShow` are reserved for flows outside this core.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    /// Appointment is booked and upcoming.
    #[default]
    Scheduled,
    /// The consultation is currently underway.
    InProgress,
    /// The consultation took place.
    Completed,
    /// The appointment was called off.
    Cancelled,
    /// The customer did not show up.
    NoShow,
}

impl AppointmentStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::NoShow => "no_show",
        }
    }

    /// Returns whether the status is an accepted update target.
    ///
    /// The update path only accepts `Scheduled`, `Completed`, and
    /// `Cancelled`; this is a deliberate restriction, not an omission.
    #[must_use]
    pub const fn is_update_target(self) -> bool {
        matches!(self, Self::Scheduled | Self::Completed | Self::Cancelled)
    }
}

impl TryFrom<&str> for AppointmentStatus {
    type Error = ParseAppointmentStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "scheduled" => Ok(Self::Scheduled),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            "no_show" => Ok(Self::NoShow),
            _ => Err(ParseAppointmentStatusError(value.to_owned())),
        }
    }
}

/// Human-readable form used in policy messages, e.g. `InProgress`.
impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Scheduled => "Scheduled",
            Self::InProgress => "InProgress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::NoShow => "NoShow",
        };
        f.write_str(name)
    }
}
