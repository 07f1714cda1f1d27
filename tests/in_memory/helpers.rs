//! Shared helpers for in-memory integration tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::Arc;

use herriot::scheduling::adapters::memory::{
    InMemoryAnimalRepository, InMemoryAppointmentRepository, InMemoryCancellationNotifier,
};
use herriot::scheduling::domain::{
    AnimalDraft, AnimalId, AppointmentDraft, CustomerId, OwnerId, VeterinarianId,
};
use herriot::scheduling::services::{AnimalRegistryService, AppointmentLifecycleService};

/// Clock pinned to a fixed instant.
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

/// The reference instant every harness clock reads.
pub fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0)
        .single()
        .expect("valid anchor timestamp")
}

/// Lifecycle and registry services wired over the memory adapters.
pub struct World {
    pub appointments: Arc<InMemoryAppointmentRepository>,
    pub animals: Arc<InMemoryAnimalRepository>,
    pub notifier: Arc<InMemoryCancellationNotifier>,
    pub lifecycle: AppointmentLifecycleService<
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
}

/// Builds a world whose clock reads [`anchor`].
pub fn world() -> World {
    let appointments = Arc::new(InMemoryAppointmentRepository::new());
    let animals = Arc::new(InMemoryAnimalRepository::new());
    let notifier = Arc::new(InMemoryCancellationNotifier::new());
    let clock = Arc::new(FixedClock(anchor()));

    let lifecycle = AppointmentLifecycleService::new(
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

    World {
        appointments,
        animals,
        notifier,
        lifecycle,
        registry,
    }
}

/// Registers an animal through the registry service and returns its id.
pub async fn onboard_animal(world: &World, name: &str, owner_email: &str) -> AnimalId {
    world
        .registry
        .create(&AnimalDraft {
            name: name.to_owned(),
            owner_email: owner_email.to_owned(),
            owner_name: format!("Owner of {name}"),
            birth_date: Some(anchor() - chrono::Duration::days(700)),
            owner_id: Some(OwnerId::new()),
        })
        .await
        .expect("onboarding should succeed")
        .id()
}

/// Builds a fully populated booking draft.
pub fn draft(
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
