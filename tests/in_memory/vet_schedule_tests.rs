//! Veterinarian schedule listing over the in-memory adapters.

use chrono::Duration;

use herriot::scheduling::domain::{VetScheduleQuery, VeterinarianId};
use herriot::scheduling::services::AppointmentLifecycleError;

use super::helpers::{anchor, draft, onboard_animal, world};

#[tokio::test(flavor = "multi_thread")]
async fn schedule_lists_the_vets_day_with_names() {
    let world = world();
    let fluffy = onboard_animal(&world, "Fluffy", "fluffy-owner@example.com").await;
    let biscuit = onboard_animal(&world, "Biscuit", "biscuit-owner@example.com").await;
    let vet = VeterinarianId::new();

    world
        .lifecycle
        .create(&draft(
            biscuit,
            vet,
            anchor() + Duration::hours(3),
            anchor() + Duration::hours(4),
        ))
        .await
        .expect("afternoon booking should succeed");
    world
        .lifecycle
        .create(&draft(
            fluffy,
            vet,
            anchor() + Duration::hours(1),
            anchor() + Duration::hours(2),
        ))
        .await
        .expect("morning booking should succeed");

    let entries = world
        .lifecycle
        .vet_schedule(&VetScheduleQuery {
            veterinarian_id: Some(vet),
            start_date: Some(anchor()),
            end_date: Some(anchor() + Duration::days(1)),
        })
        .await
        .expect("listing should succeed");

    // Ordered by start time regardless of insertion order.
    assert_eq!(entries.len(), 2);
    let first = entries.first().expect("first entry");
    let second = entries.get(1).expect("second entry");
    assert_eq!(first.animal_name, "Fluffy");
    assert_eq!(first.owner_name, "Owner of Fluffy");
    assert_eq!(second.animal_name, "Biscuit");
    assert!(first.window.start() < second.window.start());
}

#[tokio::test(flavor = "multi_thread")]
async fn range_bounds_are_inclusive_of_start_times() {
    let world = world();
    let fluffy = onboard_animal(&world, "Fluffy", "fluffy-owner@example.com").await;
    let vet = VeterinarianId::new();
    let start = anchor() + Duration::hours(1);

    world
        .lifecycle
        .create(&draft(fluffy, vet, start, start + Duration::hours(1)))
        .await
        .expect("booking should succeed");

    let entries = world
        .lifecycle
        .vet_schedule(&VetScheduleQuery {
            veterinarian_id: Some(vet),
            start_date: Some(start),
            end_date: Some(start),
        })
        .await
        .expect("listing should succeed");

    assert_eq!(entries.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_query_is_rejected_with_all_messages() {
    let world = world();

    let err = world
        .lifecycle
        .vet_schedule(&VetScheduleQuery::default())
        .await
        .expect_err("empty query must fail");

    let AppointmentLifecycleError::Validation(validation) = err else {
        panic!("expected a validation failure");
    };
    assert_eq!(
        validation.messages(),
        vec![
            "VetId is required.",
            "StartDate is required.",
            "EndDate is required.",
        ],
    );
}
