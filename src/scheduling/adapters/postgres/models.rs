//! Diesel row models for scheduling persistence.

use super::schema::{animals, appointments};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for animal records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = animals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AnimalRow {
    /// Animal identifier.
    pub id: uuid::Uuid,
    /// Animal name.
    pub name: String,
    /// Animal birth date.
    pub birth_date: DateTime<Utc>,
    /// Owner identifier.
    pub owner_id: uuid::Uuid,
    /// Owner display name, possibly empty.
    pub owner_name: String,
    /// Owner contact address, if any.
    pub owner_email: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for animal records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = animals)]
pub struct NewAnimalRow {
    /// Animal identifier.
    pub id: uuid::Uuid,
    /// Animal name.
    pub name: String,
    /// Animal birth date.
    pub birth_date: DateTime<Utc>,
    /// Owner identifier.
    pub owner_id: uuid::Uuid,
    /// Owner display name, possibly empty.
    pub owner_name: String,
    /// Owner contact address, if any.
    pub owner_email: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for appointment records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = appointments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AppointmentRow {
    /// Appointment identifier.
    pub id: uuid::Uuid,
    /// Window start instant.
    pub start_time: DateTime<Utc>,
    /// Window end instant.
    pub end_time: DateTime<Utc>,
    /// Referenced animal.
    pub animal_id: uuid::Uuid,
    /// Booking customer.
    pub customer_id: uuid::Uuid,
    /// Assigned veterinarian.
    pub veterinarian_id: uuid::Uuid,
    /// Status in canonical storage form.
    pub status: String,
    /// Optional free-text notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for appointment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = appointments)]
pub struct NewAppointmentRow {
    /// Appointment identifier.
    pub id: uuid::Uuid,
    /// Window start instant.
    pub start_time: DateTime<Utc>,
    /// Window end instant.
    pub end_time: DateTime<Utc>,
    /// Referenced animal.
    pub animal_id: uuid::Uuid,
    /// Booking customer.
    pub customer_id: uuid::Uuid,
    /// Assigned veterinarian.
    pub veterinarian_id: uuid::Uuid,
    /// Status in canonical storage form.
    pub status: String,
    /// Optional free-text notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
