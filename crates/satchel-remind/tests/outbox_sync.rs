//! A re-sync pass against the file-backed outbox, then firing.

use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use satchel_core::entities::{ReminderPreferences, TimeOfDay};
use satchel_core::enums::{Category, ItemStatus};
use satchel_remind::{NotificationDelivery, OutboxDelivery, ReminderPlanner, ReminderSync};
use satchel_store::{FileStore, SatchelStore};

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn scheduling_clock() -> NaiveDateTime {
    at(18, 12, 0)
}

#[tokio::test]
async fn outbox_fires_submission_reminders_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = SatchelStore::new(FileStore::open(dir.path().join("data")).await.unwrap());
    let outbox = OutboxDelivery::new(dir.path().join("outbox"), "assapp-default", true)
        .with_clock(scheduling_clock);

    let created = Utc.with_ymd_and_hms(2026, 10, 1, 8, 0, 0).unwrap();
    let subject = store
        .add_subject(Category::Experiment, "Chemistry", None, 1, created)
        .await
        .unwrap();
    store
        .set_item_status(Category::Experiment, &subject.id, 1, ItemStatus::NotCompleted)
        .await
        .unwrap();
    store
        .set_submission_date(Category::Experiment, &subject.id, 1, Some("2026-10-21 11:00".parse().unwrap()))
        .await
        .unwrap();

    let pass = ReminderSync::new(
        &store,
        &outbox,
        ReminderPlanner::new("ASS APP"),
        vec![TimeOfDay { hour: 20, minute: 0 }],
    );
    let report = pass.run(at(18, 12, 0)).await.unwrap();
    assert_eq!(report.submission_scheduled, 3);
    assert_eq!(outbox.list_scheduled().await.unwrap().len(), 4);

    let fired = outbox.fire_due(at(18, 21, 0)).await.unwrap();
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].request.title, "ASS APP");

    let fired = outbox.fire_due(at(19, 9, 30)).await.unwrap();
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].request.body, "Chemistry experiment due in 2 days!");

    // Catching up after a gap fires every missed one-shot plus the digest once.
    let fired = outbox.fire_due(at(21, 8, 0)).await.unwrap();
    let bodies: Vec<&str> = fired.iter().map(|n| n.request.body.as_str()).collect();
    assert_eq!(
        bodies,
        vec![
            "Check written assignments/experiments to review.",
            "Chemistry experiment due tomorrow!",
            "Chemistry experiment due today!",
        ]
    );

    assert_eq!(outbox.delivered().unwrap().len(), 5);
    assert_eq!(outbox.list_scheduled().await.unwrap().len(), 1);
}

#[tokio::test]
async fn resync_delivers_due_alerts_before_cancelling_them() {
    let dir = tempfile::tempdir().unwrap();
    let store = SatchelStore::new(FileStore::open(dir.path().join("data")).await.unwrap());
    let outbox = OutboxDelivery::new(dir.path().join("outbox"), "assapp-default", true)
        .with_clock(scheduling_clock);

    store
        .save_preferences(&ReminderPreferences {
            enabled: false,
            ..ReminderPreferences::default()
        })
        .await
        .unwrap();
    let created = Utc.with_ymd_and_hms(2026, 10, 1, 8, 0, 0).unwrap();
    let subject = store
        .add_subject(Category::Assignment, "Maths", None, 1, created)
        .await
        .unwrap();
    store
        .set_item_status(Category::Assignment, &subject.id, 1, ItemStatus::Written)
        .await
        .unwrap();
    store
        .set_submission_date(Category::Assignment, &subject.id, 1, Some("2026-10-21".parse().unwrap()))
        .await
        .unwrap();

    let pass = ReminderSync::new(
        &store,
        &outbox,
        ReminderPlanner::new("ASS APP"),
        vec![TimeOfDay { hour: 20, minute: 0 }],
    );
    let first = pass.run(at(18, 12, 0)).await.unwrap();
    assert_eq!(first.delivered, 0);
    assert_eq!(first.submission_scheduled, 3);

    // The 10-19 09:00 reminder is due but nobody fired the outbox.
    let second = pass.run(at(19, 21, 0)).await.unwrap();
    assert_eq!(second.delivered, 1);
    assert_eq!(second.submission_scheduled, 2);

    assert!(outbox.fire_due(at(19, 21, 5)).await.unwrap().is_empty());
    let delivered = outbox.delivered().unwrap();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].body, "Maths assignment due in 2 days!");
    assert_eq!(outbox.list_scheduled().await.unwrap().len(), 2);
}
