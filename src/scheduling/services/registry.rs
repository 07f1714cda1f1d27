//! Service layer for the animal registry.
//!
//! Animals are onboarded here and referenced by bookings thereafter.
//! Removal is guarded by an explicit referential pre-check against the
//! appointment store; the database foreign key remains the final
//! authority when two requests race.

use crate::scheduling::domain::{Animal, AnimalDraft, AnimalId};
use crate::scheduling::error::ValidationError;
use crate::scheduling::ports::{
    AnimalRepository, AnimalRepositoryError, AppointmentRepository, AppointmentRepositoryError,
    ScheduleValidationError, ScheduleValidator, ValidationConfig,
};
use crate::scheduling::validation::DefaultScheduleValidator;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for animal registry operations.
#[derive(Debug, Clone, Error)]
pub enum AnimalRegistryError {
    /// The request violated one or more validation rules.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No animal exists with the given identifier.
    #[error("animal not found: {0}")]
    NotFound(AnimalId),

    /// The animal is referenced by appointment records and may not be
    /// removed until they are.
    #[error("Cannot delete animal because it is referenced by other records.")]
    Referenced(AnimalId),

    /// Animal store operation failed.
    #[error(transparent)]
    Animals(#[from] AnimalRepositoryError),

    /// Appointment store operation failed.
    #[error(transparent)]
    Appointments(#[from] AppointmentRepositoryError),
}

impl From<ScheduleValidationError> for AnimalRegistryError {
    fn from(err: ScheduleValidationError) -> Self {
        match err {
            ScheduleValidationError::Invalid(inner) => Self::Validation(inner),
            ScheduleValidationError::Appointments(inner) => Self::Appointments(inner),
            ScheduleValidationError::Animals(inner) => Self::Animals(inner),
        }
    }
}

/// Result type for animal registry operations.
pub type AnimalRegistryResult<T> = Result<T, AnimalRegistryError>;

/// Animal registry orchestration service.
#[derive(Clone)]
pub struct AnimalRegistryService<AP, AN, C>
where
    AP: AppointmentRepository,
    AN: AnimalRepository,
    C: Clock + Send + Sync,
{
    animals: Arc<AN>,
    appointments: Arc<AP>,
    clock: Arc<C>,
    validator: DefaultScheduleValidator<AP, AN>,
}

impl<AP, AN, C> AnimalRegistryService<AP, AN, C>
where
    AP: AppointmentRepository,
    AN: AnimalRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new animal registry service.
    #[must_use]
    pub fn new(animals: Arc<AN>, appointments: Arc<AP>, clock: Arc<C>) -> Self {
        let validator =
            DefaultScheduleValidator::new(Arc::clone(&appointments), Arc::clone(&animals));
        Self {
            animals,
            appointments,
            clock,
            validator,
        }
    }

    /// Creates a service with custom validation configuration.
    #[must_use]
    pub fn with_config(
        animals: Arc<AN>,
        appointments: Arc<AP>,
        clock: Arc<C>,
        config: ValidationConfig,
    ) -> Self {
        let validator = DefaultScheduleValidator::with_config(
            Arc::clone(&appointments),
            Arc::clone(&animals),
            config,
        );
        Self {
            animals,
            appointments,
            clock,
            validator,
        }
    }

    /// Registers a new animal.
    ///
    /// # Errors
    ///
    /// Returns [`AnimalRegistryError::Validation`] with the accumulated
    /// violations (including a duplicate owner email), or store errors
    /// when persistence fails.
    pub async fn create(&self, draft: &AnimalDraft) -> AnimalRegistryResult<Animal> {
        let fields = self.validator.validate_animal(draft).await?;
        let animal = Animal::new(fields, &*self.clock);
        self.animals.insert(&animal).await?;
        Ok(animal)
    }

    /// Retrieves an animal by identifier.
    ///
    /// Returns `Ok(None)` when no such animal exists.
    ///
    /// # Errors
    ///
    /// Returns store errors when the lookup fails.
    pub async fn get(&self, id: AnimalId) -> AnimalRegistryResult<Option<Animal>> {
        Ok(self.animals.find_by_id(id).await?)
    }

    /// Removes an animal that no appointment references.
    ///
    /// # Errors
    ///
    /// Returns [`AnimalRegistryError::NotFound`] when no animal has the
    /// given identifier, [`AnimalRegistryError::Referenced`] when
    /// appointment records still reference it, or store errors.
    pub async fn remove(&self, id: AnimalId) -> AnimalRegistryResult<()> {
        let Some(animal) = self.animals.find_by_id(id).await? else {
            return Err(AnimalRegistryError::NotFound(id));
        };

        if self.appointments.exists_for_animal(id).await? {
            debug!(animal_id = %id, "refused removal of referenced animal");
            return Err(AnimalRegistryError::Referenced(id));
        }

        self.animals.delete(animal.id()).await?;
        Ok(())
    }
}
