//! Animal registry tests: onboarding and guarded removal.

use chrono::Duration;

use crate::scheduling::domain::{AnimalId, VeterinarianId};
use crate::scheduling::error::ValidationError;
use crate::scheduling::services::AnimalRegistryError;
use crate::scheduling::tests::fixtures::{
    anchor, animal_draft, booking_draft, harness, seed_fluffy,
};

#[tokio::test(flavor = "multi_thread")]
async fn create_persists_and_is_retrievable() {
    let harness = harness();

    let created = harness
        .registry
        .create(&animal_draft("Biscuit", "biscuit@example.com"))
        .await
        .expect("registration should succeed");
    let fetched = harness
        .registry
        .get(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, Some(created));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_duplicate_owner_email() {
    let harness = harness();
    harness
        .registry
        .create(&animal_draft("Biscuit", "shared@example.com"))
        .await
        .expect("first registration should succeed");

    let result = harness
        .registry
        .create(&animal_draft("Shadow", "shared@example.com"))
        .await;

    assert!(matches!(
        result,
        Err(AnimalRegistryError::Validation(
            ValidationError::DuplicateOwnerEmail
        )),
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn remove_unknown_animal_is_not_found() {
    let harness = harness();
    let missing = AnimalId::new();

    let result = harness.registry.remove(missing).await;

    assert!(matches!(
        result,
        Err(AnimalRegistryError::NotFound(id)) if id == missing,
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn remove_referenced_animal_is_a_conflict() {
    let harness = harness();
    let fluffy = seed_fluffy(&harness).await;
    harness
        .service
        .create(&booking_draft(
            fluffy,
            VeterinarianId::new(),
            anchor() + Duration::hours(1),
            anchor() + Duration::hours(2),
        ))
        .await
        .expect("booking should succeed");

    let err = harness
        .registry
        .remove(fluffy)
        .await
        .expect_err("referenced animal must not be removable");

    assert!(matches!(err, AnimalRegistryError::Referenced(id) if id == fluffy));
    assert_eq!(
        err.to_string(),
        "Cannot delete animal because it is referenced by other records.",
    );

    let still_there = harness
        .registry
        .get(fluffy)
        .await
        .expect("lookup should succeed");
    assert!(still_there.is_some());
}

#[tokio::test(flavor = "multi_thread")]
async fn remove_unreferenced_animal_succeeds() {
    let harness = harness();
    let fluffy = seed_fluffy(&harness).await;

    harness
        .registry
        .remove(fluffy)
        .await
        .expect("removal should succeed");

    let gone = harness
        .registry
        .get(fluffy)
        .await
        .expect("lookup should succeed");
    assert!(gone.is_none());
}
