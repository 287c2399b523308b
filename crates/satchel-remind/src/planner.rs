//! Reminder planning.
//!
//! The pure half turns tracked subjects and preferences into
//! `ScheduleRequest`s. `ReminderPlanner` submits them to a delivery backend
//! and reports the handles it got back. The planner holds no state between
//! calls; every pass recomputes from the full lists.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use satchel_core::entities::{
    NotificationHandle, ScheduleRequest, ScheduledNotification, SubmissionHandles, TimeOfDay,
    TrackedSubject, Trigger, WeekdayMask,
};
use satchel_core::enums::Category;

use crate::delivery::NotificationDelivery;
use crate::error::RemindError;

/// Body of the recurring digest reminder.
pub const DIGEST_BODY: &str = "Check written assignments/experiments to review.";

/// Substring that identifies a digest reminder among scheduled entries.
pub const DIGEST_MARKER: &str = "written assignments/experiments";

/// Offsets of the submission reminders: days before the due date, and the
/// local time they fire at.
const SUBMISSION_OFFSETS: [(i64, u32); 3] = [(2, 9), (1, 18), (0, 8)];

// ---------------------------------------------------------------------------
// Pure planning
// ---------------------------------------------------------------------------

/// Digest requests for the given times and weekdays.
///
/// All seven days active gives one daily request per time. Otherwise one
/// weekly request per active weekday (Sunday first) per time.
#[must_use]
pub fn digest_requests(title: &str, times: &[TimeOfDay], weekdays: &WeekdayMask) -> Vec<ScheduleRequest> {
    let request = |trigger: Trigger| ScheduleRequest {
        title: title.to_string(),
        body: DIGEST_BODY.to_string(),
        trigger,
    };
    if weekdays.is_all_active() {
        return times.iter().map(|t| request(Trigger::daily(*t))).collect();
    }
    weekdays
        .active_days()
        .into_iter()
        .flat_map(|day| times.iter().map(move |t| Trigger::weekly(*t, day)))
        .map(request)
        .collect()
}

/// Submission reminders for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedSubmission {
    pub category: Category,
    pub subject_id: String,
    pub item_id: u32,
    pub requests: Vec<ScheduleRequest>,
}

/// One-shot submission reminders for every unresolved item with a due date.
///
/// Each item gets up to three reminders (two days before at 09:00, the day
/// before at 18:00, the day itself at 08:00); any whose instant is not
/// strictly after `now` is dropped. Items that end up with none are omitted.
pub fn submission_requests<'a, I>(subjects: I, now: NaiveDateTime) -> Vec<PlannedSubmission>
where
    I: IntoIterator<Item = (Category, &'a TrackedSubject)>,
{
    let mut planned = Vec::new();
    for (category, subject) in subjects {
        let label = subject.label(category);
        for item in &subject.items {
            let Some(date) = item.submission_date else {
                continue;
            };
            if !item.status.is_unresolved() {
                continue;
            }
            let due = date.day();
            let requests: Vec<ScheduleRequest> = SUBMISSION_OFFSETS
                .iter()
                .filter_map(|&(days_before, hour)| {
                    let at = (due - Duration::days(days_before))
                        .and_time(NaiveTime::from_hms_opt(hour, 0, 0)?);
                    (at > now).then(|| ScheduleRequest {
                        title: if days_before == 0 {
                            category.due_today_title()
                        } else {
                            category.reminder_title()
                        },
                        body: submission_body(&label, days_before),
                        trigger: Trigger::At { at },
                    })
                })
                .collect();
            if !requests.is_empty() {
                planned.push(PlannedSubmission {
                    category,
                    subject_id: subject.id.clone(),
                    item_id: item.id,
                    requests,
                });
            }
        }
    }
    planned
}

fn submission_body(label: &str, days_before: i64) -> String {
    match days_before {
        0 => format!("{label} due today!"),
        1 => format!("{label} due tomorrow!"),
        n => format!("{label} due in {n} days!"),
    }
}

/// Whether a scheduled entry looks like one this planner created: a digest
/// (by its marker) or a submission reminder (body mentions "due" or
/// "submission").
#[must_use]
pub fn is_recognized(request: &ScheduleRequest) -> bool {
    let body = request.body.to_lowercase();
    body.contains(DIGEST_MARKER) || body.contains("due") || body.contains("submission")
}

// ---------------------------------------------------------------------------
// Submission to a delivery backend
// ---------------------------------------------------------------------------

/// Submits planned reminders to a delivery backend.
#[derive(Debug, Clone)]
pub struct ReminderPlanner {
    digest_title: String,
}

impl ReminderPlanner {
    #[must_use]
    pub fn new(digest_title: impl Into<String>) -> Self {
        Self {
            digest_title: digest_title.into(),
        }
    }

    /// Schedule the digest reminders. The caller has already cancelled the
    /// previous ones and checked that reminders are enabled.
    ///
    /// # Errors
    ///
    /// The first schedule failure aborts the batch and is returned.
    pub async fn plan_digest_reminders<D: NotificationDelivery>(
        &self,
        delivery: &D,
        times: &[TimeOfDay],
        weekdays: &WeekdayMask,
    ) -> Result<Vec<NotificationHandle>, RemindError> {
        let mut handles = Vec::new();
        for request in digest_requests(&self.digest_title, times, weekdays) {
            handles.push(delivery.schedule(&request).await?);
        }
        tracing::debug!(count = handles.len(), "digest reminders scheduled");
        Ok(handles)
    }

    /// Schedule submission reminders for category-tagged subjects. The caller
    /// has already cancelled the previous ones.
    ///
    /// # Errors
    ///
    /// The first schedule failure aborts the batch and is returned.
    pub async fn plan_submission_reminders<'a, D, I>(
        &self,
        delivery: &D,
        subjects: I,
        now: NaiveDateTime,
    ) -> Result<Vec<SubmissionHandles>, RemindError>
    where
        D: NotificationDelivery,
        I: IntoIterator<Item = (Category, &'a TrackedSubject)>,
    {
        let mut scheduled = Vec::new();
        for planned in submission_requests(subjects, now) {
            let mut handles = Vec::with_capacity(planned.requests.len());
            for request in &planned.requests {
                handles.push(delivery.schedule(request).await?);
            }
            scheduled.push(SubmissionHandles {
                category: planned.category,
                subject_id: planned.subject_id,
                item_id: planned.item_id,
                handles,
            });
        }
        Ok(scheduled)
    }

    /// Cancel every handle, ignoring failures. Returns how many succeeded.
    pub async fn cancel_handles<D: NotificationDelivery>(
        delivery: &D,
        handles: &[NotificationHandle],
    ) -> u32 {
        let mut cancelled = 0;
        for handle in handles {
            match delivery.cancel(handle).await {
                Ok(()) => cancelled += 1,
                Err(e) => tracing::debug!(%handle, error = %e, "cancel failed, ignoring"),
            }
        }
        cancelled
    }

    /// Cancel any still-scheduled entry [`is_recognized`] accepts, ignoring
    /// failures. Returns how many were cancelled.
    pub async fn cancel_recognized<D: NotificationDelivery>(delivery: &D) -> u32 {
        let scheduled = match delivery.list_scheduled().await {
            Ok(scheduled) => scheduled,
            Err(e) => {
                tracing::debug!(error = %e, "could not list scheduled notifications");
                return 0;
            }
        };
        let strays: Vec<NotificationHandle> = scheduled
            .into_iter()
            .filter(|n: &ScheduledNotification| is_recognized(&n.request))
            .map(|n| n.handle)
            .collect();
        Self::cancel_handles(delivery, &strays).await
    }
}
