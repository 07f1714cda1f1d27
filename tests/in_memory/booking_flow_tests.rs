//! End-to-end booking flow over the in-memory adapters.

use chrono::Duration;

use herriot::scheduling::domain::{AppointmentStatus, VeterinarianId};
use herriot::scheduling::error::ValidationError;
use herriot::scheduling::services::{AppointmentLifecycleError, AppointmentUpdate};

use super::helpers::{anchor, draft, onboard_animal, world};

#[tokio::test(flavor = "multi_thread")]
async fn booked_appointment_round_trips() {
    let world = world();
    let fluffy = onboard_animal(&world, "Fluffy", "fluffy-owner@example.com").await;
    let vet = VeterinarianId::new();

    let created = world
        .lifecycle
        .create(&draft(
            fluffy,
            vet,
            anchor() + Duration::hours(1),
            anchor() + Duration::hours(2),
        ))
        .await
        .expect("booking should succeed");

    let fetched = world
        .lifecycle
        .get(created.id())
        .await
        .expect("lookup should succeed")
        .expect("appointment should exist");

    assert_eq!(fetched, created);
    assert_eq!(fetched.status(), AppointmentStatus::Scheduled);
}

#[tokio::test(flavor = "multi_thread")]
async fn double_booking_the_same_animal_is_rejected() {
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
        .expect("first booking should succeed");

    let err = world
        .lifecycle
        .create(&draft(
            fluffy,
            VeterinarianId::new(),
            anchor() + Duration::minutes(90),
            anchor() + Duration::minutes(150),
        ))
        .await
        .expect_err("overlapping booking must fail");

    let AppointmentLifecycleError::Validation(validation) = err else {
        panic!("expected a validation failure");
    };
    assert_eq!(
        validation.messages(),
        vec!["The animal already has an appointment during this time."],
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn adjacent_booking_succeeds() {
    let world = world();
    let fluffy = onboard_animal(&world, "Fluffy", "fluffy-owner@example.com").await;
    let vet = VeterinarianId::new();

    world
        .lifecycle
        .create(&draft(
            fluffy,
            vet,
            anchor() + Duration::hours(1),
            anchor() + Duration::hours(2),
        ))
        .await
        .expect("first booking should succeed");

    world
        .lifecycle
        .create(&draft(
            fluffy,
            vet,
            anchor() + Duration::hours(2),
            anchor() + Duration::hours(3),
        ))
        .await
        .expect("exactly adjacent booking should succeed");
}

#[tokio::test(flavor = "multi_thread")]
async fn double_booking_the_same_vet_across_animals_is_rejected() {
    let world = world();
    let fluffy = onboard_animal(&world, "Fluffy", "fluffy-owner@example.com").await;
    let biscuit = onboard_animal(&world, "Biscuit", "biscuit-owner@example.com").await;
    let vet = VeterinarianId::new();

    world
        .lifecycle
        .create(&draft(
            fluffy,
            vet,
            anchor() + Duration::hours(1),
            anchor() + Duration::hours(2),
        ))
        .await
        .expect("first booking should succeed");

    let err = world
        .lifecycle
        .create(&draft(
            biscuit,
            vet,
            anchor() + Duration::minutes(90),
            anchor() + Duration::minutes(150),
        ))
        .await
        .expect_err("vet double-booking must fail");

    let AppointmentLifecycleError::Validation(validation) = err else {
        panic!("expected a validation failure");
    };
    assert_eq!(
        validation.messages(),
        vec!["The veterinarian already has an appointment during this time."],
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn moving_an_appointment_does_not_conflict_with_itself() {
    let world = world();
    let fluffy = onboard_animal(&world, "Fluffy", "fluffy-owner@example.com").await;
    let vet = VeterinarianId::new();

    let booked = world
        .lifecycle
        .create(&draft(
            fluffy,
            vet,
            anchor() + Duration::hours(1),
            anchor() + Duration::hours(2),
        ))
        .await
        .expect("booking should succeed");

    // Shift by thirty minutes; the new window overlaps the old one, which
    // must not count as a conflict.
    let moved = draft(
        fluffy,
        vet,
        anchor() + Duration::minutes(90),
        anchor() + Duration::minutes(150),
    );
    let outcome = world
        .lifecycle
        .update(booked.id(), &moved)
        .await
        .expect("self-overlapping move should succeed");

    let AppointmentUpdate::Applied { appointment, .. } = outcome else {
        panic!("expected an applied update");
    };
    assert_eq!(appointment.window().start(), anchor() + Duration::minutes(90));
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_booking_writes_nothing() {
    let world = world();

    let err = world
        .lifecycle
        .create(&draft(
            herriot::scheduling::domain::AnimalId::new(),
            VeterinarianId::new(),
            anchor() + Duration::hours(2),
            anchor() + Duration::hours(1),
        ))
        .await
        .expect_err("inverted window must fail");

    assert!(matches!(
        err,
        AppointmentLifecycleError::Validation(ValidationError::WindowNotOrdered),
    ));
    assert_eq!(world.appointments.write_count(), 0);
}
