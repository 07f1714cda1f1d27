//! Repository ports for appointment and animal persistence.

use crate::scheduling::domain::{
    Animal, AnimalId, Appointment, AppointmentId, DateRange, OwnerEmail, TimeWindow,
    VeterinarianId,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for appointment repository operations.
pub type AppointmentRepositoryResult<T> = Result<T, AppointmentRepositoryError>;

/// Appointment persistence contract.
///
/// The conflict queries here are the validator's fast path; the store
/// itself must still carry the overlap constraint so that two racing
/// writers cannot both commit. Adapters surface that constraint as
/// [`AppointmentRepositoryError::WindowConflict`].
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Stores a new appointment.
    ///
    /// # Errors
    ///
    /// Returns [`AppointmentRepositoryError::DuplicateAppointment`] when
    /// the identifier already exists, or
    /// [`AppointmentRepositoryError::WindowConflict`] when the store's
    /// overlap constraint rejects the window.
    async fn insert(&self, appointment: &Appointment) -> AppointmentRepositoryResult<()>;

    /// Persists changes to an existing appointment.
    ///
    /// # Errors
    ///
    /// Returns [`AppointmentRepositoryError::NotFound`] when the
    /// appointment does not exist, or
    /// [`AppointmentRepositoryError::WindowConflict`] when the store's
    /// overlap constraint rejects the new window.
    async fn update(&self, appointment: &Appointment) -> AppointmentRepositoryResult<()>;

    /// Finds an appointment by identifier.
    ///
    /// Returns `None` when the appointment does not exist.
    async fn find_by_id(
        &self,
        id: AppointmentId,
    ) -> AppointmentRepositoryResult<Option<Appointment>>;

    /// Returns all appointments whose window overlaps the given one and
    /// which reference the given animal **or** veterinarian.
    ///
    /// When `exclude` is set, the named appointment is omitted so an
    /// update is never compared against itself.
    async fn find_overlapping(
        &self,
        window: TimeWindow,
        animal_id: AnimalId,
        veterinarian_id: VeterinarianId,
        exclude: Option<AppointmentId>,
    ) -> AppointmentRepositoryResult<Vec<Appointment>>;

    /// Returns the veterinarian's appointments whose start time falls
    /// inside the inclusive range, ordered by start time.
    async fn list_for_veterinarian(
        &self,
        veterinarian_id: VeterinarianId,
        range: DateRange,
    ) -> AppointmentRepositoryResult<Vec<Appointment>>;

    /// Returns whether any appointment references the given animal.
    ///
    /// This is the explicit referential-integrity pre-check consulted
    /// before an animal record may be deleted.
    async fn exists_for_animal(&self, animal_id: AnimalId) -> AppointmentRepositoryResult<bool>;
}

/// Errors returned by appointment repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AppointmentRepositoryError {
    /// An appointment with the same identifier already exists.
    #[error("duplicate appointment identifier: {0}")]
    DuplicateAppointment(AppointmentId),

    /// The appointment was not found.
    #[error("appointment not found: {0}")]
    NotFound(AppointmentId),

    /// The store's overlap constraint rejected the window.
    #[error("appointment window conflicts with an existing booking")]
    WindowConflict,

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AppointmentRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

/// Result type for animal repository operations.
pub type AnimalRepositoryResult<T> = Result<T, AnimalRepositoryError>;

/// Animal persistence contract.
#[async_trait]
pub trait AnimalRepository: Send + Sync {
    /// Stores a new animal.
    ///
    /// # Errors
    ///
    /// Returns [`AnimalRepositoryError::DuplicateAnimal`] when the
    /// identifier already exists, or
    /// [`AnimalRepositoryError::DuplicateOwnerEmail`] when the store's
    /// unique owner-email constraint rejects the record.
    async fn insert(&self, animal: &Animal) -> AnimalRepositoryResult<()>;

    /// Finds an animal by identifier.
    ///
    /// Returns `None` when the animal does not exist.
    async fn find_by_id(&self, id: AnimalId) -> AnimalRepositoryResult<Option<Animal>>;

    /// Returns whether an animal record exists for the identifier.
    async fn exists(&self, id: AnimalId) -> AnimalRepositoryResult<bool>;

    /// Returns whether any animal record carries the given owner email.
    async fn owner_email_exists(&self, email: &OwnerEmail) -> AnimalRepositoryResult<bool>;

    /// Deletes an animal record.
    ///
    /// # Errors
    ///
    /// Returns [`AnimalRepositoryError::NotFound`] when the animal does
    /// not exist, or [`AnimalRepositoryError::ReferencedByAppointments`]
    /// when the store's foreign key rejects the delete — the final
    /// authority behind the service-level pre-check.
    async fn delete(&self, id: AnimalId) -> AnimalRepositoryResult<()>;
}

/// Errors returned by animal repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AnimalRepositoryError {
    /// An animal with the same identifier already exists.
    #[error("duplicate animal identifier: {0}")]
    DuplicateAnimal(AnimalId),

    /// An animal record already carries this owner email.
    #[error("duplicate owner email: {0}")]
    DuplicateOwnerEmail(OwnerEmail),

    /// The animal was not found.
    #[error("animal not found: {0}")]
    NotFound(AnimalId),

    /// The animal is still referenced by appointment records.
    #[error("animal {0} is referenced by existing appointments")]
    ReferencedByAppointments(AnimalId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AnimalRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
