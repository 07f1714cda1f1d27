//! Animal aggregate and owner contact details.

use super::{AnimalFields, AnimalId, OwnerId, SchedulingDomainError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated owner contact address.
///
/// The core does not attempt full RFC 5322 parsing; it accepts a trimmed,
/// whitespace-free value with exactly one `@` separating non-empty local
/// and domain parts. Anything stricter belongs to the mail boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerEmail(String);

impl OwnerEmail {
    /// Creates a validated owner email address.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingDomainError::InvalidOwnerEmail`] when the value
    /// is blank, contains whitespace, or is not shaped `local@domain`.
    pub fn new(value: impl Into<String>) -> Result<Self, SchedulingDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        let mut segments = normalized.split('@');
        let local = segments.next().unwrap_or_default();
        let domain = segments.next().unwrap_or_default();
        let has_more_segments = segments.next().is_some();
        let is_valid = !local.is_empty()
            && !domain.is_empty()
            && !has_more_segments
            && !normalized.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(SchedulingDomainError::InvalidOwnerEmail(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OwnerEmail {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for OwnerEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Animal aggregate root.
///
/// Animals are created by an onboarding flow and then only referenced by
/// the scheduling core. The owner contact address may be absent; a missing
/// address suppresses cancellation notices rather than failing the update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    id: AnimalId,
    name: String,
    birth_date: DateTime<Utc>,
    owner_id: OwnerId,
    owner_name: String,
    owner_email: Option<OwnerEmail>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted animal aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAnimalData {
    /// Persisted animal identifier.
    pub id: AnimalId,
    /// Persisted animal name.
    pub name: String,
    /// Persisted birth date.
    pub birth_date: DateTime<Utc>,
    /// Persisted owner identifier.
    pub owner_id: OwnerId,
    /// Persisted owner display name, possibly empty.
    pub owner_name: String,
    /// Persisted owner contact address, if any.
    pub owner_email: Option<OwnerEmail>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Animal {
    /// Creates a new animal from validated registration fields.
    #[must_use]
    pub fn new(fields: AnimalFields, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: AnimalId::new(),
            name: fields.name,
            birth_date: fields.birth_date,
            owner_id: fields.owner_id,
            owner_name: fields.owner_name,
            owner_email: Some(fields.owner_email),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs an animal from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedAnimalData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            birth_date: data.birth_date,
            owner_id: data.owner_id,
            owner_name: data.owner_name,
            owner_email: data.owner_email,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the animal identifier.
    #[must_use]
    pub const fn id(&self) -> AnimalId {
        self.id
    }

    /// Returns the animal's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the animal's birth date.
    #[must_use]
    pub const fn birth_date(&self) -> DateTime<Utc> {
        self.birth_date
    }

    /// Returns the owner identifier.
    #[must_use]
    pub const fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    /// Returns the owner's display name, possibly empty.
    #[must_use]
    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    /// Returns the owner's contact address, if one is on record.
    #[must_use]
    pub const fn owner_email(&self) -> Option<&OwnerEmail> {
        self.owner_email.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
