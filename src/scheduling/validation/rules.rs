//! Field-level validation rules.
//!
//! Each function inspects one request shape without touching the store
//! and returns every violation it finds, in a stable order. The
//! store-dependent checks build on these in
//! [`super::service::DefaultScheduleValidator`].

use crate::scheduling::domain::{
    AnimalDraft, AnimalFields, AppointmentDraft, BookingFields, DateRange, OwnerEmail,
    ScheduleRange, TimeWindow, VetScheduleQuery,
};
use crate::scheduling::error::ValidationError;
use crate::scheduling::ports::ValidationConfig;

/// Collects field-level violations for a booking draft.
///
/// Order is part of the contract: identifier checks first, then the time
/// bounds, then the window ordering, then the notes bound.
#[must_use]
pub fn booking_field_errors(
    draft: &AppointmentDraft,
    config: &ValidationConfig,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if draft.animal_id.is_none() {
        errors.push(ValidationError::AnimalRequired);
    }
    if draft.customer_id.is_none() {
        errors.push(ValidationError::CustomerRequired);
    }
    if draft.veterinarian_id.is_none() {
        errors.push(ValidationError::VeterinarianRequired);
    }
    if draft.start_time.is_none() {
        errors.push(ValidationError::StartTimeRequired);
    }
    if draft.end_time.is_none() {
        errors.push(ValidationError::EndTimeRequired);
    }
    if let (Some(start), Some(end)) = (draft.start_time, draft.end_time)
        && start >= end
    {
        errors.push(ValidationError::WindowNotOrdered);
    }
    if let Some(notes) = draft.notes.as_deref()
        && notes.chars().count() > config.max_notes_chars
    {
        errors.push(ValidationError::NotesTooLong {
            max: config.max_notes_chars,
        });
    }

    errors
}

/// Resolves a booking draft whose field checks have all passed.
///
/// Returns `None` whenever a field check would have failed, so the caller
/// can fall back to the collected errors.
#[must_use]
pub fn resolve_booking(draft: &AppointmentDraft) -> Option<BookingFields> {
    let window = TimeWindow::new(draft.start_time?, draft.end_time?).ok()?;
    Some(BookingFields {
        window,
        animal_id: draft.animal_id?,
        customer_id: draft.customer_id?,
        veterinarian_id: draft.veterinarian_id?,
        status: draft.status_or_default(),
        notes: draft.notes.clone(),
    })
}

/// Collects violations for a veterinarian schedule query.
#[must_use]
pub fn schedule_query_errors(query: &VetScheduleQuery) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if query.veterinarian_id.is_none() {
        errors.push(ValidationError::VetRequired);
    }
    if query.start_date.is_none() {
        errors.push(ValidationError::StartDateRequired);
    }
    if query.end_date.is_none() {
        errors.push(ValidationError::EndDateRequired);
    }
    if let (Some(start), Some(end)) = (query.start_date, query.end_date)
        && start > end
    {
        errors.push(ValidationError::RangeNotOrdered);
    }

    errors
}

/// Resolves a schedule query whose field checks have all passed.
#[must_use]
pub fn resolve_schedule_query(query: &VetScheduleQuery) -> Option<ScheduleRange> {
    let range = DateRange::new(query.start_date?, query.end_date?).ok()?;
    Some(ScheduleRange {
        veterinarian_id: query.veterinarian_id?,
        range,
    })
}

/// Collects field-level violations for an animal registration draft.
#[must_use]
pub fn animal_field_errors(draft: &AnimalDraft, config: &ValidationConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.push(ValidationError::AnimalNameRequired);
    } else if name.chars().count() > config.max_name_chars {
        errors.push(ValidationError::AnimalNameTooLong {
            max: config.max_name_chars,
        });
    }
    if draft.owner_id.is_none() {
        errors.push(ValidationError::OwnerRequired);
    }
    if draft.owner_email.trim().is_empty() {
        errors.push(ValidationError::OwnerEmailRequired);
    } else if OwnerEmail::new(draft.owner_email.clone()).is_err() {
        errors.push(ValidationError::OwnerEmailInvalid);
    }
    if draft.birth_date.is_none() {
        errors.push(ValidationError::BirthDateRequired);
    }

    errors
}

/// Resolves an animal registration draft whose field checks have all
/// passed.
#[must_use]
pub fn resolve_animal(draft: &AnimalDraft) -> Option<AnimalFields> {
    let owner_email = OwnerEmail::new(draft.owner_email.clone()).ok()?;
    Some(AnimalFields {
        name: draft.name.trim().to_owned(),
        owner_email,
        owner_name: draft.owner_name.clone(),
        birth_date: draft.birth_date?,
        owner_id: draft.owner_id?,
    })
}
