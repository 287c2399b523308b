//! Serde roundtrip and JsonSchema validation for the persisted types.

use chrono::NaiveDate;
use schemars::schema_for;
use satchel_core::entities::*;
use satchel_core::enums::*;
use satchel_core::responses::SyncReport;

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            pretty_assertions::assert_eq!(recovered, val);

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    tracked_subject_roundtrip,
    TrackedSubject,
    TrackedSubject {
        id: "1760774400000".into(),
        subject_name: "Operating Systems".into(),
        course_code: Some("CS501".into()),
        items: vec![
            TrackedItem {
                id: 1,
                name: "Experiment 1".into(),
                status: ItemStatus::Written,
                submission_date: Some(SubmissionDate::DateTime(
                    NaiveDate::from_ymd_opt(2026, 10, 21)
                        .unwrap()
                        .and_hms_opt(14, 30, 0)
                        .unwrap(),
                )),
                submission_notif_ids: vec![NotificationHandle::new("n-3"), NotificationHandle::new("n-4")],
            },
            TrackedItem::new(Category::Experiment, 2),
        ],
    }
);

roundtrip_and_validate!(
    preferences_roundtrip,
    ReminderPreferences,
    ReminderPreferences {
        enabled: false,
        times: vec![TimeOfDay { hour: 7, minute: 30 }, TimeOfDay { hour: 21, minute: 0 }],
        active_weekdays: WeekdayMask([false, true, true, true, true, true, false]),
    }
);

roundtrip_and_validate!(
    test_record_roundtrip,
    TestRecord,
    TestRecord {
        id: "1760774400001".into(),
        test_type: TestType::Ut2,
        year: AcademicYear::Se,
        semester: 3,
        subjects: vec![SubjectScore {
            id: "1760774400002".into(),
            name: "Data Structures".into(),
            marks_obtained: 17.5,
            total_marks: 20.0,
        }],
    }
);

roundtrip_and_validate!(
    ledger_roundtrip,
    ReminderLedger,
    ReminderLedger {
        digest: vec![NotificationHandle::new("n-1")],
        submissions: vec![SubmissionHandles {
            category: Category::Assignment,
            subject_id: "1760774400000".into(),
            item_id: 2,
            handles: vec![NotificationHandle::new("n-2")],
        }],
    }
);

roundtrip_and_validate!(
    scheduled_notification_roundtrip,
    ScheduledNotification,
    ScheduledNotification {
        handle: NotificationHandle::new("n-9"),
        request: ScheduleRequest {
            title: "ASS APP".into(),
            body: "Check written assignments/experiments to review.".into(),
            trigger: Trigger::Weekly {
                hour: 20,
                minute: 0,
                weekday: DayOfWeek::Friday,
            },
        },
    }
);

roundtrip_and_validate!(
    sync_report_roundtrip,
    SyncReport,
    SyncReport {
        permission_granted: true,
        delivered: 1,
        cancelled: 4,
        digest_scheduled: 1,
        submission_scheduled: 3,
    }
);

#[test]
fn default_preferences_match_first_launch() {
    let prefs = ReminderPreferences::default();
    assert!(prefs.enabled);
    assert_eq!(prefs.times, vec![TimeOfDay { hour: 20, minute: 0 }]);
    assert!(prefs.active_weekdays.is_all_active());
}

#[test]
fn sync_report_uses_camel_case() {
    let value = serde_json::to_value(SyncReport::permission_denied()).unwrap();
    assert_eq!(value["permissionGranted"], false);
    assert_eq!(value["submissionScheduled"], 0);
}
