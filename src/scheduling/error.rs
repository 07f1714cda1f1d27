//! Validation error types for the scheduling core.
//!
//! Uses `thiserror` for typed variants that can be inspected by callers.
//! The display strings are the contract with operators and end users:
//! callers may join them for display but must treat `Result::is_ok` as the
//! authoritative validity flag, never parse the text.

use thiserror::Error;

/// Errors that can occur while validating scheduling requests.
///
/// Violations accumulate rather than short-circuiting; a request failing
/// several rules reports all of them through
/// [`ValidationError::Multiple`], in rule order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The booking names no animal.
    #[error("AnimalId is required.")]
    AnimalRequired,

    /// The booking names no customer.
    #[error("CustomerId is required.")]
    CustomerRequired,

    /// The booking names no veterinarian.
    #[error("VeterinarianId is required.")]
    VeterinarianRequired,

    /// The booking has no start instant.
    #[error("StartTime is required.")]
    StartTimeRequired,

    /// The booking has no end instant.
    #[error("EndTime is required.")]
    EndTimeRequired,

    /// The booking's window is empty or inverted.
    #[error("EndTime must be after StartTime.")]
    WindowNotOrdered,

    /// The notes exceed the configured length bound.
    #[error("Notes must be at most {max} characters.")]
    NotesTooLong {
        /// Configured maximum length in characters.
        max: usize,
    },

    /// The referenced animal has no record in the store.
    #[error("AnimalId does not exist.")]
    AnimalNotFound,

    /// The animal is already booked during the requested window.
    #[error("The animal already has an appointment during this time.")]
    AnimalAlreadyBooked,

    /// The veterinarian is already booked during the requested window.
    #[error("The veterinarian already has an appointment during this time.")]
    VeterinarianAlreadyBooked,

    /// The schedule query names no veterinarian.
    #[error("VetId is required.")]
    VetRequired,

    /// The schedule query has no range start.
    #[error("StartDate is required.")]
    StartDateRequired,

    /// The schedule query has no range end.
    #[error("EndDate is required.")]
    EndDateRequired,

    /// The schedule query range is inverted.
    #[error("StartDate must be before EndDate.")]
    RangeNotOrdered,

    /// The animal registration has a blank name.
    #[error("Animal name is required.")]
    AnimalNameRequired,

    /// The animal name exceeds the configured length bound.
    #[error("Animal name must be at most {max} characters.")]
    AnimalNameTooLong {
        /// Configured maximum length in characters.
        max: usize,
    },

    /// The animal registration names no owner.
    #[error("OwnerId is required.")]
    OwnerRequired,

    /// The animal registration has a blank owner email.
    #[error("Owner email is required.")]
    OwnerEmailRequired,

    /// The owner email is not a plausible address.
    #[error("Owner email is not a valid email address.")]
    OwnerEmailInvalid,

    /// The animal registration has no birth date.
    #[error("Birth date is required.")]
    BirthDateRequired,

    /// Another animal record already carries this owner email.
    #[error("An animal with the same owner email already exists.")]
    DuplicateOwnerEmail,

    /// Multiple validation errors occurred.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Combines multiple validation errors into a single error.
    ///
    /// If only one error is provided, returns it directly rather than
    /// wrapping.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if called with an empty vector, as this
    /// indicates a logic error in the caller. In release builds, returns a
    /// placeholder variant.
    #[must_use]
    pub fn multiple(errors: Vec<Self>) -> Self {
        match errors.len() {
            0 => {
                debug_assert!(false, "multiple() called with empty errors vector");
                Self::Multiple(Vec::new())
            }
            1 => errors
                .into_iter()
                .next()
                .unwrap_or_else(|| Self::Multiple(Vec::new())),
            _ => Self::Multiple(errors),
        }
    }

    /// Returns `true` if this error represents multiple validation failures.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Returns the individual errors if this is a `Multiple` variant.
    #[must_use]
    pub fn errors(&self) -> Option<&[Self]> {
        match self {
            Self::Multiple(errors) => Some(errors),
            _ => None,
        }
    }

    /// Flattens this error into its human-readable message strings.
    ///
    /// A single violation yields one message; a `Multiple` yields one per
    /// accumulated violation, in rule order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Multiple(errors) => errors.iter().map(ToString::to_string).collect(),
            other => vec![other.to_string()],
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
