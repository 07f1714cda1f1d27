//! Shared fixtures for scheduling tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::Arc;

use crate::scheduling::adapters::memory::{
    InMemoryAnimalRepository, InMemoryAppointmentRepository, InMemoryCancellationNotifier,
};
use crate::scheduling::domain::{
    Animal, AnimalDraft, AnimalFields, AnimalId, AppointmentDraft, CustomerId, OwnerEmail,
    OwnerId, PersistedAnimalData, VeterinarianId,
};
use crate::scheduling::ports::AnimalRepository;
use crate::scheduling::services::{AnimalRegistryService, AppointmentLifecycleService};
use crate::scheduling::validation::DefaultScheduleValidator;

/// Clock pinned to a fixed instant so the cancellation-window rule is
/// deterministic.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A fixed reference instant: Monday 2026-03-02 09:00 UTC.
pub fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0)
        .single()
        .expect("valid anchor timestamp")
}

/// Lifecycle service, registry, and collaborators wired over the memory
/// adapters with a fixed clock.
pub struct Harness {
    pub appointments: Arc<InMemoryAppointmentRepository>,
    pub animals: Arc<InMemoryAnimalRepository>,
    pub notifier: Arc<InMemoryCancellationNotifier>,
    pub service: AppointmentLifecycleService<
        InMemoryAppointmentRepository,
        InMemoryAnimalRepository,
        InMemoryCancellationNotifier,
        FixedClock,
    >,
    pub registry: AnimalRegistryService<
        InMemoryAppointmentRepository,
        InMemoryAnimalRepository,
        FixedClock,
    >,
    pub validator:
        DefaultScheduleValidator<InMemoryAppointmentRepository, InMemoryAnimalRepository>,
}

/// Builds a harness whose clock reads the given instant.
pub fn harness_at(now: DateTime<Utc>) -> Harness {
    let appointments = Arc::new(InMemoryAppointmentRepository::new());
    let animals = Arc::new(InMemoryAnimalRepository::new());
    let notifier = Arc::new(InMemoryCancellationNotifier::new());
    let clock = Arc::new(FixedClock(now));

    let service = AppointmentLifecycleService::new(
        Arc::clone(&appointments),
        Arc::clone(&animals),
        Arc::clone(&notifier),
        Arc::clone(&clock),
    );
    let registry = AnimalRegistryService::new(
        Arc::clone(&animals),
        Arc::clone(&appointments),
        Arc::clone(&clock),
    );
    let validator =
        DefaultScheduleValidator::new(Arc::clone(&appointments), Arc::clone(&animals));

    Harness {
        appointments,
        animals,
        notifier,
        service,
        registry,
        validator,
    }
}

/// Builds a harness anchored at [`anchor`].
pub fn harness() -> Harness {
    harness_at(anchor())
}

/// Seeds an animal named Fluffy with a contactable owner and returns its
/// identifier.
pub async fn seed_fluffy(harness: &Harness) -> AnimalId {
    seed_animal(harness, "Fluffy", "Dana Reeve", Some("dana@example.com")).await
}

/// Seeds an animal record directly through the repository.
pub async fn seed_animal(
    harness: &Harness,
    name: &str,
    owner_name: &str,
    owner_email: Option<&str>,
) -> AnimalId {
    let email = owner_email
        .map(|address| OwnerEmail::new(address).expect("valid seed email"));
    let animal = Animal::from_persisted(PersistedAnimalData {
        id: AnimalId::new(),
        name: name.to_owned(),
        birth_date: anchor() - chrono::Duration::days(900),
        owner_id: OwnerId::new(),
        owner_name: owner_name.to_owned(),
        owner_email: email,
        created_at: anchor(),
        updated_at: anchor(),
    });
    harness
        .animals
        .insert(&animal)
        .await
        .expect("seed animal should insert");
    animal.id()
}

/// Builds a fully populated booking draft for the given references.
pub fn booking_draft(
    animal_id: AnimalId,
    veterinarian_id: VeterinarianId,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> AppointmentDraft {
    AppointmentDraft {
        start_time: Some(start),
        end_time: Some(end),
        animal_id: Some(animal_id),
        customer_id: Some(CustomerId::new()),
        veterinarian_id: Some(veterinarian_id),
        status: None,
        notes: None,
    }
}

/// Builds a valid animal registration draft.
pub fn animal_draft(name: &str, owner_email: &str) -> AnimalDraft {
    AnimalDraft {
        name: name.to_owned(),
        owner_email: owner_email.to_owned(),
        owner_name: "Alex Quinn".to_owned(),
        birth_date: Some(anchor() - chrono::Duration::days(365)),
        owner_id: Some(OwnerId::new()),
    }
}

/// Builds validated animal fields for direct aggregate construction.
pub fn animal_fields(name: &str, owner_email: &str) -> AnimalFields {
    AnimalFields {
        name: name.to_owned(),
        owner_email: OwnerEmail::new(owner_email).expect("valid email"),
        owner_name: "Alex Quinn".to_owned(),
        birth_date: anchor() - chrono::Duration::days(365),
        owner_id: OwnerId::new(),
    }
}
