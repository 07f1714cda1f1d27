//! Service layer for appointment creation, update, and listing.
//!
//! The lifecycle service orchestrates the sequence the booking flow
//! relies on: load (for updates), validate, apply the status-transition
//! and cancellation-window policy, persist, and decide whether a
//! cancellation notice is due. Notice delivery is strictly best-effort:
//! once the store has committed, no notifier outcome can undo it.

use crate::scheduling::domain::{
    AnimalId, Appointment, AppointmentDraft, AppointmentId, AppointmentStatus, VetScheduleEntry,
    VetScheduleQuery,
};
use crate::scheduling::error::ValidationError;
use crate::scheduling::ports::{
    AnimalRepository, AnimalRepositoryError, AppointmentRepository, AppointmentRepositoryError,
    CancellationNotifier, ScheduleValidationError, ScheduleValidator, ValidationConfig,
};
use crate::scheduling::services::notice::{NoticeContext, build_cancellation_notice};
use crate::scheduling::validation::DefaultScheduleValidator;
use chrono::{DateTime, Duration, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for appointment lifecycle operations.
#[derive(Debug, Clone, Error)]
pub enum AppointmentLifecycleError {
    /// The request violated one or more validation rules.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No appointment exists with the given identifier.
    ///
    /// Distinct from a validation failure so callers can tell bad input
    /// from a stale reference.
    #[error("appointment not found: {0}")]
    NotFound(AppointmentId),

    /// The requested status is not an accepted update target.
    #[error("Status {0} is not valid. Valid status are Scheduled, Completed, Cancelled")]
    StatusNotAllowed(AppointmentStatus),

    /// The appointment starts too soon to be cancelled.
    #[error("Cannot cancel within 1 hour of scheduled start time.")]
    CancellationWindowClosed,

    /// Appointment store operation failed.
    #[error(transparent)]
    Appointments(#[from] AppointmentRepositoryError),

    /// Animal store operation failed.
    #[error(transparent)]
    Animals(#[from] AnimalRepositoryError),
}

impl From<ScheduleValidationError> for AppointmentLifecycleError {
    fn from(err: ScheduleValidationError) -> Self {
        match err {
            ScheduleValidationError::Invalid(inner) => Self::Validation(inner),
            ScheduleValidationError::Appointments(inner) => Self::Appointments(inner),
            ScheduleValidationError::Animals(inner) => Self::Animals(inner),
        }
    }
}

/// Result type for appointment lifecycle operations.
pub type AppointmentLifecycleResult<T> = Result<T, AppointmentLifecycleError>;

/// What became of the cancellation notice for a committed update.
///
/// A secondary, non-blocking signal: every variant accompanies a
/// successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeDisposition {
    /// The update was not a cancellation; no notice was due.
    NotRequired,
    /// A notice was due but the owner has no contact address on record.
    Suppressed,
    /// The notice was handed to the notifier successfully.
    Sent,
    /// Composition or delivery failed after the update had committed.
    Failed {
        /// Human-readable failure description.
        reason: String,
    },
}

/// Outcome of a successful appointment update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppointmentUpdate {
    /// The request matched the stored record field for field; nothing was
    /// persisted.
    Unchanged(Appointment),
    /// The update was persisted.
    Applied {
        /// The appointment as persisted.
        appointment: Appointment,
        /// What became of the cancellation notice.
        notice: NoticeDisposition,
    },
}

/// Appointment lifecycle orchestration service.
#[derive(Clone)]
pub struct AppointmentLifecycleService<AP, AN, N, C>
where
    AP: AppointmentRepository,
    AN: AnimalRepository,
    N: CancellationNotifier,
    C: Clock + Send + Sync,
{
    appointments: Arc<AP>,
    animals: Arc<AN>,
    notifier: Arc<N>,
    clock: Arc<C>,
    validator: DefaultScheduleValidator<AP, AN>,
}

impl<AP, AN, N, C> AppointmentLifecycleService<AP, AN, N, C>
where
    AP: AppointmentRepository,
    AN: AnimalRepository,
    N: CancellationNotifier,
    C: Clock + Send + Sync,
{
    /// Creates a new appointment lifecycle service.
    #[must_use]
    pub fn new(appointments: Arc<AP>, animals: Arc<AN>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        let validator =
            DefaultScheduleValidator::new(Arc::clone(&appointments), Arc::clone(&animals));
        Self {
            appointments,
            animals,
            notifier,
            clock,
            validator,
        }
    }

    /// Creates a service with custom validation configuration.
    #[must_use]
    pub fn with_config(
        appointments: Arc<AP>,
        animals: Arc<AN>,
        notifier: Arc<N>,
        clock: Arc<C>,
        config: ValidationConfig,
    ) -> Self {
        let validator = DefaultScheduleValidator::with_config(
            Arc::clone(&appointments),
            Arc::clone(&animals),
            config,
        );
        Self {
            appointments,
            animals,
            notifier,
            clock,
            validator,
        }
    }

    /// Books a new appointment.
    ///
    /// # Errors
    ///
    /// Returns [`AppointmentLifecycleError::Validation`] with the
    /// accumulated violations, or store errors when persistence fails.
    pub async fn create(
        &self,
        draft: &AppointmentDraft,
    ) -> AppointmentLifecycleResult<Appointment> {
        let fields = self.validator.validate_booking(draft, None).await?;
        let appointment = Appointment::new(fields, &*self.clock);
        self.appointments.insert(&appointment).await?;
        Ok(appointment)
    }

    /// Retrieves an appointment by identifier.
    ///
    /// Returns `Ok(None)` when no such appointment exists.
    ///
    /// # Errors
    ///
    /// Returns store errors when the lookup fails.
    pub async fn get(
        &self,
        id: AppointmentId,
    ) -> AppointmentLifecycleResult<Option<Appointment>> {
        Ok(self.appointments.find_by_id(id).await?)
    }

    /// Lists a veterinarian's schedule within an inclusive date range.
    ///
    /// Entries are joined with the animal registry so they carry the
    /// animal and owner names.
    ///
    /// # Errors
    ///
    /// Returns [`AppointmentLifecycleError::Validation`] when the query is
    /// malformed, or store errors when a lookup fails.
    pub async fn vet_schedule(
        &self,
        query: &VetScheduleQuery,
    ) -> AppointmentLifecycleResult<Vec<VetScheduleEntry>> {
        let params = self.validator.validate_schedule_query(query)?;
        let appointments = self
            .appointments
            .list_for_veterinarian(params.veterinarian_id, params.range)
            .await?;

        let mut entries = Vec::with_capacity(appointments.len());
        for appointment in appointments {
            let animal = self.animals.find_by_id(appointment.animal_id()).await?;
            let (animal_name, owner_name) = match animal {
                Some(record) => (record.name().to_owned(), record.owner_name().to_owned()),
                None => {
                    warn!(
                        animal_id = %appointment.animal_id(),
                        appointment_id = %appointment.id(),
                        "animal record missing while listing schedule"
                    );
                    (String::new(), String::new())
                }
            };
            entries.push(VetScheduleEntry {
                window: appointment.window(),
                animal_name,
                owner_name,
                status: appointment.status(),
            });
        }
        Ok(entries)
    }

    /// Updates an existing appointment.
    ///
    /// The stored record is validated against with itself excluded from
    /// conflict search, then the status-transition and cancellation-window
    /// policy applies. A request identical to the stored record is a
    /// no-op. When the update is a transition into `Cancelled`, a notice
    /// is composed from the pre-update record and handed to the notifier
    /// after the commit.
    ///
    /// # Errors
    ///
    /// Returns [`AppointmentLifecycleError::NotFound`] when no appointment
    /// has the given identifier,
    /// [`AppointmentLifecycleError::Validation`] with the accumulated
    /// violations, [`AppointmentLifecycleError::StatusNotAllowed`] for a
    /// status outside the update taxonomy,
    /// [`AppointmentLifecycleError::CancellationWindowClosed`] for a late
    /// cancellation, or store errors. Notifier failures are never errors;
    /// they surface through [`NoticeDisposition::Failed`].
    pub async fn update(
        &self,
        id: AppointmentId,
        draft: &AppointmentDraft,
    ) -> AppointmentLifecycleResult<AppointmentUpdate> {
        let Some(mut appointment) = self.appointments.find_by_id(id).await? else {
            return Err(AppointmentLifecycleError::NotFound(id));
        };

        let fields = self.validator.validate_booking(draft, Some(id)).await?;

        if !fields.status.is_update_target() {
            debug!(appointment_id = %id, status = %fields.status, "rejected update status");
            return Err(AppointmentLifecycleError::StatusNotAllowed(fields.status));
        }

        let is_being_cancelled = appointment.status() != AppointmentStatus::Cancelled
            && fields.status == AppointmentStatus::Cancelled;

        if is_being_cancelled && self.cancellation_window_closed(appointment.window().start()) {
            debug!(appointment_id = %id, "rejected cancellation inside the one-hour window");
            return Err(AppointmentLifecycleError::CancellationWindowClosed);
        }

        if appointment.matches(&fields) {
            debug!(appointment_id = %id, "update matches stored record, skipping persistence");
            return Ok(AppointmentUpdate::Unchanged(appointment));
        }

        // Captured before fields apply: the notice cites the stored animal
        // and the originally booked start time.
        let pending_notice = is_being_cancelled
            .then(|| (appointment.animal_id(), appointment.window().start()));

        appointment.apply(fields, &*self.clock);
        self.appointments.update(&appointment).await?;

        let notice = match pending_notice {
            Some((animal_id, start_time)) => {
                self.emit_cancellation_notice(animal_id, start_time).await
            }
            None => NoticeDisposition::NotRequired,
        };

        Ok(AppointmentUpdate::Applied {
            appointment,
            notice,
        })
    }

    /// Returns whether cancelling now would fall inside the closed window:
    /// a start strictly in the future but no more than one hour away.
    fn cancellation_window_closed(&self, start_time: DateTime<Utc>) -> bool {
        let now = self.clock.utc();
        start_time > now && start_time <= now + Duration::hours(1)
    }

    async fn emit_cancellation_notice(
        &self,
        animal_id: AnimalId,
        start_time: DateTime<Utc>,
    ) -> NoticeDisposition {
        let animal = match self.animals.find_by_id(animal_id).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                warn!(%animal_id, "animal record missing while emitting cancellation notice");
                return NoticeDisposition::Suppressed;
            }
            Err(err) => {
                warn!(%animal_id, error = %err, "animal lookup failed while emitting cancellation notice");
                return NoticeDisposition::Failed {
                    reason: err.to_string(),
                };
            }
        };

        let Some(recipient) = animal.owner_email() else {
            return NoticeDisposition::Suppressed;
        };

        let context = NoticeContext {
            recipient: recipient.clone(),
            owner_name: animal.owner_name().to_owned(),
            animal_name: animal.name().to_owned(),
            start_time,
        };
        let notice = match build_cancellation_notice(&context) {
            Ok(notice) => notice,
            Err(err) => {
                warn!(%animal_id, error = %err, "cancellation notice rendering failed");
                return NoticeDisposition::Failed {
                    reason: err.to_string(),
                };
            }
        };

        match self.notifier.send(&notice).await {
            Ok(()) => {
                info!(recipient = %notice.recipient, "cancellation notice sent");
                NoticeDisposition::Sent
            }
            Err(err) => {
                warn!(recipient = %notice.recipient, error = %err, "cancellation notice delivery failed");
                NoticeDisposition::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }
}
