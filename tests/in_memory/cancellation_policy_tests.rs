//! Cancellation policy over the in-memory adapters.

use chrono::Duration;

use herriot::scheduling::domain::{AppointmentId, AppointmentStatus, AppointmentDraft, VeterinarianId};
use herriot::scheduling::services::{
    AppointmentLifecycleError, AppointmentUpdate, NoticeDisposition,
};

use super::helpers::{World, anchor, draft, onboard_animal, world};

async fn book_fluffy(world: &World, start_in_minutes: i64) -> (AppointmentId, AppointmentDraft) {
    let fluffy = onboard_animal(world, "Fluffy", "fluffy-owner@example.com").await;
    let booking = draft(
        fluffy,
        VeterinarianId::new(),
        anchor() + Duration::minutes(start_in_minutes),
        anchor() + Duration::minutes(start_in_minutes + 60),
    );
    let appointment = world
        .lifecycle
        .create(&booking)
        .await
        .expect("booking should succeed");

    let mut cancelling = booking;
    cancelling.status = Some(AppointmentStatus::Cancelled);
    (appointment.id(), cancelling)
}

#[tokio::test(flavor = "multi_thread")]
async fn cancellation_inside_the_window_is_rejected() {
    let world = world();
    let (id, cancelling) = book_fluffy(&world, 30).await;

    let err = world
        .lifecycle
        .update(id, &cancelling)
        .await
        .expect_err("late cancellation must fail");

    assert!(matches!(
        err,
        AppointmentLifecycleError::CancellationWindowClosed
    ));
    assert!(world.notifier.sent().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn cancellation_outside_the_window_notifies_the_owner() {
    let world = world();
    let (id, cancelling) = book_fluffy(&world, 120).await;

    let outcome = world
        .lifecycle
        .update(id, &cancelling)
        .await
        .expect("cancellation should succeed");

    assert!(matches!(
        outcome,
        AppointmentUpdate::Applied {
            notice: NoticeDisposition::Sent,
            ..
        },
    ));

    let sent = world.notifier.sent();
    assert_eq!(sent.len(), 1);
    let notice = sent.first().expect("one notice should be recorded");
    assert_eq!(notice.recipient.as_str(), "fluffy-owner@example.com");
    assert_eq!(notice.subject, "Appointment Cancelled");
    assert!(notice.body.contains("Fluffy"));
}

#[tokio::test(flavor = "multi_thread")]
async fn cancellation_of_a_past_appointment_succeeds() {
    let world = world();
    let (id, cancelling) = book_fluffy(&world, -120).await;

    world
        .lifecycle
        .update(id, &cancelling)
        .await
        .expect("past cancellation should succeed");

    let stored = world
        .lifecycle
        .get(id)
        .await
        .expect("lookup should succeed")
        .expect("appointment should exist");
    assert_eq!(stored.status(), AppointmentStatus::Cancelled);
}

#[tokio::test(flavor = "multi_thread")]
async fn repeated_cancellation_is_idempotent() {
    let world = world();
    let (id, cancelling) = book_fluffy(&world, 120).await;

    world
        .lifecycle
        .update(id, &cancelling)
        .await
        .expect("first cancellation should succeed");
    let outcome = world
        .lifecycle
        .update(id, &cancelling)
        .await
        .expect("second cancellation should succeed");

    assert!(matches!(outcome, AppointmentUpdate::Unchanged(_)));
    assert_eq!(world.notifier.sent().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn delivery_failure_leaves_the_cancellation_committed() {
    let world = world();
    let (id, cancelling) = book_fluffy(&world, 120).await;
    world
        .notifier
        .set_failing("relay rejected the message")
        .expect("failure mode should arm");

    let outcome = world
        .lifecycle
        .update(id, &cancelling)
        .await
        .expect("cancellation should succeed despite delivery failure");

    let AppointmentUpdate::Applied { notice, .. } = outcome else {
        panic!("expected an applied update");
    };
    assert!(matches!(notice, NoticeDisposition::Failed { .. }));

    let stored = world
        .lifecycle
        .get(id)
        .await
        .expect("lookup should succeed")
        .expect("appointment should exist");
    assert_eq!(stored.status(), AppointmentStatus::Cancelled);
}
