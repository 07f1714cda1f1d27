//! Request drafts and their validated, resolved forms.
//!
//! A draft is the already-parsed shape the transport layer hands to the
//! core: every field optional or raw, nothing trusted yet. Create and
//! update consume the same [`AppointmentDraft`] field-set; there is no
//! request subtype hierarchy. The validator turns a draft into the
//! corresponding `*Fields` value, which is the only form the services
//! build aggregates from.

use super::{
    AnimalId, AppointmentStatus, CustomerId, OwnerEmail, OwnerId, TimeWindow, VeterinarianId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Untrusted appointment booking request, shared by create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentDraft {
    /// Requested start instant, if supplied.
    pub start_time: Option<DateTime<Utc>>,
    /// Requested end instant, if supplied.
    pub end_time: Option<DateTime<Utc>>,
    /// Referenced animal, if supplied.
    pub animal_id: Option<AnimalId>,
    /// Booking customer, if supplied.
    pub customer_id: Option<CustomerId>,
    /// Assigned veterinarian, if supplied.
    pub veterinarian_id: Option<VeterinarianId>,
    /// Requested status; `None` defaults to [`AppointmentStatus::Scheduled`].
    pub status: Option<AppointmentStatus>,
    /// Free-text notes, if supplied.
    pub notes: Option<String>,
}

impl AppointmentDraft {
    /// Returns the requested status, defaulting to `Scheduled`.
    #[must_use]
    pub fn status_or_default(&self) -> AppointmentStatus {
        self.status.unwrap_or_default()
    }
}

/// Fully validated booking fields produced by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingFields {
    /// Validated time window.
    pub window: TimeWindow,
    /// Animal known to exist in the store.
    pub animal_id: AnimalId,
    /// Booking customer.
    pub customer_id: CustomerId,
    /// Assigned veterinarian.
    pub veterinarian_id: VeterinarianId,
    /// Requested status.
    pub status: AppointmentStatus,
    /// Notes within the configured length bound.
    pub notes: Option<String>,
}

/// Untrusted animal registration request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalDraft {
    /// Animal name as supplied.
    pub name: String,
    /// Owner contact address as supplied.
    pub owner_email: String,
    /// Owner display name; may be empty.
    pub owner_name: String,
    /// Animal birth date.
    pub birth_date: Option<DateTime<Utc>>,
    /// Owning customer, if supplied.
    pub owner_id: Option<OwnerId>,
}

/// Fully validated animal registration fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalFields {
    /// Trimmed, non-empty animal name.
    pub name: String,
    /// Validated, store-unique owner contact address.
    pub owner_email: OwnerEmail,
    /// Owner display name; may be empty.
    pub owner_name: String,
    /// Animal birth date.
    pub birth_date: DateTime<Utc>,
    /// Owning customer.
    pub owner_id: OwnerId,
}
