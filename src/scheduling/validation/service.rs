//! Store-backed validation service.
//!
//! Provides the default implementation of the `ScheduleValidator` port,
//! combining the pure field rules with the checks that need to read the
//! store: animal existence, booking conflicts, and owner-email
//! uniqueness.

use crate::scheduling::domain::{
    AnimalDraft, AnimalFields, AppointmentDraft, AppointmentId, BookingFields, OwnerEmail,
    ScheduleRange, VetScheduleQuery,
};
use crate::scheduling::error::{ValidationError, ValidationResult};
use crate::scheduling::ports::{
    AnimalRepository, AppointmentRepository, ScheduleValidationResult, ScheduleValidator,
    ValidationConfig,
};
use crate::scheduling::validation::rules;
use async_trait::async_trait;
use std::sync::Arc;

/// Default implementation of the schedule validator.
///
/// Field checks run first and accumulate; the store-dependent tier only
/// runs when every field check passed, so a request with a malformed
/// window never costs a conflict query and error sets stay deterministic.
#[derive(Clone)]
pub struct DefaultScheduleValidator<AP, AN>
where
    AP: AppointmentRepository,
    AN: AnimalRepository,
{
    appointments: Arc<AP>,
    animals: Arc<AN>,
    config: ValidationConfig,
}

impl<AP, AN> DefaultScheduleValidator<AP, AN>
where
    AP: AppointmentRepository,
    AN: AnimalRepository,
{
    /// Creates a validator with default configuration.
    #[must_use]
    pub fn new(appointments: Arc<AP>, animals: Arc<AN>) -> Self {
        Self {
            appointments,
            animals,
            config: ValidationConfig::default(),
        }
    }

    /// Creates a validator with custom configuration.
    #[must_use]
    pub const fn with_config(
        appointments: Arc<AP>,
        animals: Arc<AN>,
        config: ValidationConfig,
    ) -> Self {
        Self {
            appointments,
            animals,
            config,
        }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    async fn booking_store_errors(
        &self,
        fields: &BookingFields,
        exclude: Option<AppointmentId>,
    ) -> ScheduleValidationResult<Vec<ValidationError>> {
        let mut errors = Vec::new();

        if !self.animals.exists(fields.animal_id).await? {
            errors.push(ValidationError::AnimalNotFound);
        }

        let conflicting = self
            .appointments
            .find_overlapping(
                fields.window,
                fields.animal_id,
                fields.veterinarian_id,
                exclude,
            )
            .await?;

        if conflicting
            .iter()
            .any(|existing| existing.animal_id() == fields.animal_id)
        {
            errors.push(ValidationError::AnimalAlreadyBooked);
        }
        if conflicting
            .iter()
            .any(|existing| existing.veterinarian_id() == fields.veterinarian_id)
        {
            errors.push(ValidationError::VeterinarianAlreadyBooked);
        }

        Ok(errors)
    }
}

#[async_trait]
impl<AP, AN> ScheduleValidator for DefaultScheduleValidator<AP, AN>
where
    AP: AppointmentRepository,
    AN: AnimalRepository,
{
    async fn validate_booking(
        &self,
        draft: &AppointmentDraft,
        exclude: Option<AppointmentId>,
    ) -> ScheduleValidationResult<BookingFields> {
        let field_errors = rules::booking_field_errors(draft, &self.config);
        let Some(fields) = rules::resolve_booking(draft) else {
            return Err(ValidationError::multiple(field_errors).into());
        };
        if !field_errors.is_empty() {
            return Err(ValidationError::multiple(field_errors).into());
        }

        let store_errors = self.booking_store_errors(&fields, exclude).await?;
        if store_errors.is_empty() {
            Ok(fields)
        } else {
            Err(ValidationError::multiple(store_errors).into())
        }
    }

    async fn validate_animal(&self, draft: &AnimalDraft) -> ScheduleValidationResult<AnimalFields> {
        let mut errors = rules::animal_field_errors(draft, &self.config);

        // The uniqueness probe runs whenever the address itself parsed,
        // even alongside other field errors.
        if let Ok(email) = OwnerEmail::new(draft.owner_email.clone())
            && self.animals.owner_email_exists(&email).await?
        {
            errors.push(ValidationError::DuplicateOwnerEmail);
        }

        match rules::resolve_animal(draft) {
            Some(resolved) if errors.is_empty() => Ok(resolved),
            _ => Err(ValidationError::multiple(errors).into()),
        }
    }

    fn validate_schedule_query(&self, query: &VetScheduleQuery) -> ValidationResult<ScheduleRange> {
        let errors = rules::schedule_query_errors(query);
        match rules::resolve_schedule_query(query) {
            Some(range) if errors.is_empty() => Ok(range),
            _ => Err(ValidationError::multiple(errors)),
        }
    }
}
