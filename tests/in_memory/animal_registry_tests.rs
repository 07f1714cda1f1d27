//! Animal registry flows over the in-memory adapters.

use chrono::Duration;

use herriot::scheduling::domain::VeterinarianId;
use herriot::scheduling::error::ValidationError;
use herriot::scheduling::services::AnimalRegistryError;

use super::helpers::{anchor, draft, onboard_animal, world};

#[tokio::test(flavor = "multi_thread")]
async fn onboarded_animal_round_trips() {
    let world = world();
    let id = onboard_animal(&world, "Fluffy", "fluffy-owner@example.com").await;

    let fetched = world
        .registry
        .get(id)
        .await
        .expect("lookup should succeed")
        .expect("animal should exist");

    assert_eq!(fetched.name(), "Fluffy");
    assert_eq!(
        fetched.owner_email().map(AsRef::as_ref),
        Some("fluffy-owner@example.com"),
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn second_animal_with_the_same_owner_email_is_rejected() {
    let world = world();
    onboard_animal(&world, "Fluffy", "shared@example.com").await;

    let result = world
        .registry
        .create(&herriot::scheduling::domain::AnimalDraft {
            name: "Shadow".to_owned(),
            owner_email: "shared@example.com".to_owned(),
            owner_name: "Robin Vale".to_owned(),
            birth_date: Some(anchor() - Duration::days(400)),
            owner_id: Some(herriot::scheduling::domain::OwnerId::new()),
        })
        .await;

    assert!(matches!(
        result,
        Err(AnimalRegistryError::Validation(
            ValidationError::DuplicateOwnerEmail
        )),
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn removal_is_blocked_while_appointments_reference_the_animal() {
    let world = world();
    let fluffy = onboard_animal(&world, "Fluffy", "fluffy-owner@example.com").await;

    world
        .lifecycle
        .create(&draft(
            fluffy,
            VeterinarianId::new(),
            anchor() + Duration::hours(1),
            anchor() + Duration::hours(2),
        ))
        .await
        .expect("booking should succeed");

    let err = world
        .registry
        .remove(fluffy)
        .await
        .expect_err("referenced animal must not be removable");
    assert!(matches!(err, AnimalRegistryError::Referenced(id) if id == fluffy));

    // Still present, still bookable.
    assert!(
        world
            .registry
            .get(fluffy)
            .await
            .expect("lookup should succeed")
            .is_some()
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn removal_succeeds_once_unreferenced() {
    let world = world();
    let fluffy = onboard_animal(&world, "Fluffy", "fluffy-owner@example.com").await;

    world
        .registry
        .remove(fluffy)
        .await
        .expect("removal should succeed");

    assert!(
        world
            .registry
            .get(fluffy)
            .await
            .expect("lookup should succeed")
            .is_none()
    );
}
