//! `PostgreSQL` adapters for the scheduling ports.
//!
//! The database carries the constraints the core treats as the final
//! authority: primary keys, the unique owner-email index, the foreign key
//! from appointments to animals, and the no-double-booking exclusion
//! constraint over the appointment window. The repositories translate
//! named-constraint violations into the typed repository errors.

mod models;
mod repository;
pub mod schema;

pub use repository::{PostgresAnimalRepository, PostgresAppointmentRepository, SchedulingPgPool};
