//! Appointment aggregate root.

use super::{
    AnimalId, AppointmentId, AppointmentStatus, BookingFields, CustomerId, TimeWindow,
    VeterinarianId,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Appointment aggregate root.
///
/// Appointments are created in whatever status the validated booking
/// carries (`Scheduled` when the draft left it unset) and mutate only
/// through [`Appointment::apply`], which replaces every caller-editable
/// field at once. Policy decisions (status legality, cancellation window,
/// conflicts) live in the validator and the lifecycle service, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    id: AppointmentId,
    window: TimeWindow,
    animal_id: AnimalId,
    customer_id: CustomerId,
    veterinarian_id: VeterinarianId,
    status: AppointmentStatus,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted appointment aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAppointmentData {
    /// Persisted appointment identifier.
    pub id: AppointmentId,
    /// Persisted time window.
    pub window: TimeWindow,
    /// Persisted animal reference.
    pub animal_id: AnimalId,
    /// Persisted customer reference.
    pub customer_id: CustomerId,
    /// Persisted veterinarian reference.
    pub veterinarian_id: VeterinarianId,
    /// Persisted status.
    pub status: AppointmentStatus,
    /// Persisted free-text notes, if any.
    pub notes: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    /// Creates a new appointment from validated booking fields.
    #[must_use]
    pub fn new(fields: BookingFields, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: AppointmentId::new(),
            window: fields.window,
            animal_id: fields.animal_id,
            customer_id: fields.customer_id,
            veterinarian_id: fields.veterinarian_id,
            status: fields.status,
            notes: fields.notes,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs an appointment from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedAppointmentData) -> Self {
        Self {
            id: data.id,
            window: data.window,
            animal_id: data.animal_id,
            customer_id: data.customer_id,
            veterinarian_id: data.veterinarian_id,
            status: data.status,
            notes: data.notes,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the appointment identifier.
    #[must_use]
    pub const fn id(&self) -> AppointmentId {
        self.id
    }

    /// Returns the occupied time window.
    #[must_use]
    pub const fn window(&self) -> TimeWindow {
        self.window
    }

    /// Returns the animal reference.
    #[must_use]
    pub const fn animal_id(&self) -> AnimalId {
        self.animal_id
    }

    /// Returns the customer reference.
    #[must_use]
    pub const fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// Returns the veterinarian reference.
    #[must_use]
    pub const fn veterinarian_id(&self) -> VeterinarianId {
        self.veterinarian_id
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> AppointmentStatus {
        self.status
    }

    /// Returns the free-text notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns whether the booking fields match this record exactly.
    ///
    /// Used for no-op detection: a field-for-field identical update skips
    /// persistence entirely.
    #[must_use]
    pub fn matches(&self, fields: &BookingFields) -> bool {
        self.window == fields.window
            && self.animal_id == fields.animal_id
            && self.customer_id == fields.customer_id
            && self.veterinarian_id == fields.veterinarian_id
            && self.status == fields.status
            && self.notes == fields.notes
    }

    /// Replaces every caller-editable field with the given booking fields.
    pub fn apply(&mut self, fields: BookingFields, clock: &impl Clock) {
        self.window = fields.window;
        self.animal_id = fields.animal_id;
        self.customer_id = fields.customer_id;
        self.veterinarian_id = fields.veterinarian_id;
        self.status = fields.status;
        self.notes = fields.notes;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
