//! Validator port for scheduling requests.

use crate::scheduling::domain::{
    AnimalDraft, AnimalFields, AppointmentDraft, AppointmentId, BookingFields, ScheduleRange,
    VetScheduleQuery,
};
use crate::scheduling::error::{ValidationError, ValidationResult};
use crate::scheduling::ports::{AnimalRepositoryError, AppointmentRepositoryError};
use async_trait::async_trait;
use thiserror::Error;

/// Errors returned by schedule validator implementations.
///
/// Rule violations and store faults are kept distinct: a
/// [`ScheduleValidationError::Invalid`] is recoverable by resubmitting a
/// corrected request, while the store variants propagate the underlying
/// fault unmodified.
#[derive(Debug, Clone, Error)]
pub enum ScheduleValidationError {
    /// The request violated one or more validation rules.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// An appointment store read failed before validation could complete.
    #[error(transparent)]
    Appointments(#[from] AppointmentRepositoryError),

    /// An animal store read failed before validation could complete.
    #[error(transparent)]
    Animals(#[from] AnimalRepositoryError),
}

/// Result type for store-backed validator operations.
pub type ScheduleValidationResult<T> = Result<T, ScheduleValidationError>;

/// Port for validating scheduling requests.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Collect all violations before returning (not fail-fast), in a stable
///   rule order, combining them with `ValidationError::multiple`
/// - Skip store-dependent checks entirely when any field-level check has
///   already failed, keeping error sets deterministic and avoiding wasted
///   lookups
/// - Be stateless and thread-safe
#[async_trait]
pub trait ScheduleValidator: Send + Sync {
    /// Validates an appointment booking draft.
    ///
    /// For updates, `exclude` names the appointment being replaced so it
    /// is never treated as conflicting with itself.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleValidationError::Invalid`] with the accumulated
    /// violations, or a store variant when a required lookup fails.
    async fn validate_booking(
        &self,
        draft: &AppointmentDraft,
        exclude: Option<AppointmentId>,
    ) -> ScheduleValidationResult<BookingFields>;

    /// Validates an animal registration draft.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleValidationError::Invalid`] with the accumulated
    /// violations, or a store variant when the uniqueness lookup fails.
    async fn validate_animal(&self, draft: &AnimalDraft) -> ScheduleValidationResult<AnimalFields>;

    /// Validates a veterinarian schedule query.
    ///
    /// Purely field-level; no store access.
    ///
    /// # Errors
    ///
    /// Returns the accumulated `ValidationError` when any rule fails.
    fn validate_schedule_query(&self, query: &VetScheduleQuery) -> ValidationResult<ScheduleRange>;
}

/// Configuration for validation rules.
///
/// # Examples
///
/// ```
/// use herriot::scheduling::ports::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.max_notes_chars, 500);
/// ```
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Maximum appointment notes length in characters.
    pub max_notes_chars: usize,
    /// Maximum animal name length in characters.
    pub max_name_chars: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_notes_chars: 500,
            max_name_chars: 100,
        }
    }
}
