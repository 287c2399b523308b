//! The full reminder re-sync pass.

use chrono::NaiveDateTime;

use satchel_core::entities::{ReminderLedger, ReminderPreferences, TimeOfDay, TrackedSubject};
use satchel_core::enums::Category;
use satchel_core::responses::SyncReport;
use satchel_core::tally::tagged;
use satchel_store::{KeyValueStore, SatchelStore};

use crate::delivery::NotificationDelivery;
use crate::error::RemindError;
use crate::planner::ReminderPlanner;

/// Cancels what the last pass scheduled and schedules afresh from the
/// current subjects and preferences.
///
/// Runs at startup, after every saved mutation, and after preference
/// changes. Two passes over unchanged inputs leave the same set scheduled.
pub struct ReminderSync<'a, S, D> {
    store: &'a SatchelStore<S>,
    delivery: &'a D,
    planner: ReminderPlanner,
    seed_times: Vec<TimeOfDay>,
}

impl<'a, S: KeyValueStore, D: NotificationDelivery> ReminderSync<'a, S, D> {
    #[must_use]
    pub const fn new(
        store: &'a SatchelStore<S>,
        delivery: &'a D,
        planner: ReminderPlanner,
        seed_times: Vec<TimeOfDay>,
    ) -> Self {
        Self {
            store,
            delivery,
            planner,
            seed_times,
        }
    }

    /// Preferences as the pass would see them.
    pub async fn preferences(&self) -> ReminderPreferences {
        self.store.load_preferences(&self.seed_times).await
    }

    /// Run one pass with `now` as the local reference time.
    ///
    /// Alerts already due are delivered before anything is cancelled.
    /// Permission denied skips scheduling and reports it. Cancel failures
    /// are ignored.
    ///
    /// # Errors
    ///
    /// A schedule failure aborts the pass; so does a failure to persist the
    /// ledger or item handles.
    pub async fn run(&self, now: NaiveDateTime) -> Result<SyncReport, RemindError> {
        let prefs = self.preferences().await;

        if !self.delivery.request_permission().await? {
            tracing::warn!("notification permission denied, skipping reminder scheduling");
            return Ok(SyncReport::permission_denied());
        }
        self.delivery.ensure_channel().await?;

        // Due entries would be cancelled below and never replanned.
        let delivered = self.delivery.deliver_due(now).await?;

        let previous = self.store.load_ledger().await;
        let mut cancelled =
            ReminderPlanner::cancel_handles(self.delivery, &previous.all_handles()).await;
        cancelled += ReminderPlanner::cancel_recognized(self.delivery).await;

        let digest = if prefs.enabled {
            self.planner
                .plan_digest_reminders(self.delivery, &prefs.times, &prefs.active_weekdays)
                .await?
        } else {
            Vec::new()
        };

        let mut assignments = self.store.list_subjects(Category::Assignment).await;
        let mut experiments = self.store.list_subjects(Category::Experiment).await;
        let submissions = self
            .planner
            .plan_submission_reminders(
                self.delivery,
                tagged(Category::Assignment, &assignments)
                    .chain(tagged(Category::Experiment, &experiments)),
                now,
            )
            .await?;

        let ledger = ReminderLedger {
            digest,
            submissions,
        };
        self.store.save_ledger(&ledger).await?;
        record_handles(Category::Assignment, &mut assignments, &ledger);
        record_handles(Category::Experiment, &mut experiments, &ledger);
        self.store.save_subjects(Category::Assignment, &assignments).await?;
        self.store.save_subjects(Category::Experiment, &experiments).await?;

        let report = SyncReport {
            permission_granted: true,
            delivered,
            cancelled,
            digest_scheduled: count(ledger.digest.len()),
            submission_scheduled: count(ledger.submissions.iter().map(|s| s.handles.len()).sum()),
        };
        tracing::info!(
            delivered = report.delivered,
            cancelled = report.cancelled,
            digest = report.digest_scheduled,
            submission = report.submission_scheduled,
            "reminders re-synced"
        );
        Ok(report)
    }
}

/// Overwrite every item's handles from the ledger; items without an entry
/// are cleared.
fn record_handles(category: Category, subjects: &mut [TrackedSubject], ledger: &ReminderLedger) {
    for subject in subjects {
        for item in &mut subject.items {
            item.submission_notif_ids = ledger.handles_for(category, &subject.id, item.id).to_vec();
        }
    }
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
