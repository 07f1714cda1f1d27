//! Domain model for appointment scheduling.
//!
//! The scheduling domain models appointments, the animals they are booked
//! for, the time windows they occupy, and the request drafts the core
//! consumes, while keeping all infrastructure concerns outside of the
//! domain boundary.

mod animal;
mod appointment;
mod draft;
mod error;
mod ids;
mod schedule;
mod status;
mod window;

pub use animal::{Animal, OwnerEmail, PersistedAnimalData};
pub use appointment::{Appointment, PersistedAppointmentData};
pub use draft::{AnimalDraft, AnimalFields, AppointmentDraft, BookingFields};
pub use error::{ParseAppointmentStatusError, SchedulingDomainError};
pub use ids::{AnimalId, AppointmentId, CustomerId, OwnerId, VeterinarianId};
pub use schedule::{ScheduleRange, VetScheduleEntry, VetScheduleQuery};
pub use status::AppointmentStatus;
pub use window::{DateRange, TimeWindow};
