//! File-backed delivery backend.
//!
//! `scheduled.json` holds every accepted request. Nothing runs in the
//! background: `fire_due(now)` is called (by `satchel reminders fire`, a cron
//! job, or at the start of every re-sync pass) and moves due alerts to
//! `delivered.jsonl`.

use std::path::PathBuf;

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use satchel_core::entities::{
    DayOfWeek, NotificationHandle, ScheduleRequest, ScheduledNotification, Trigger,
};

use crate::delivery::NotificationDelivery;
use crate::error::RemindError;

const SCHEDULED_FILE: &str = "scheduled.json";
const DELIVERED_FILE: &str = "delivered.jsonl";

#[derive(Debug, Default, Serialize, Deserialize)]
struct OutboxState {
    next_id: u64,
    #[serde(default)]
    channel: Option<String>,
    #[serde(default)]
    entries: Vec<OutboxEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OutboxEntry {
    handle: NotificationHandle,
    request: ScheduleRequest,
    /// Occurrences at or before this instant have been handled. Starts at
    /// the scheduling instant.
    last_fired: NaiveDateTime,
}

/// One alert moved from the outbox to the delivered log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveredAlert {
    pub handle: NotificationHandle,
    pub channel: Option<String>,
    pub title: String,
    pub body: String,
    pub fired_at: NaiveDateTime,
}

pub struct OutboxDelivery {
    dir: PathBuf,
    channel_id: String,
    permission_granted: bool,
    clock: fn() -> NaiveDateTime,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl OutboxDelivery {
    /// An outbox under `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, channel_id: impl Into<String>, permission_granted: bool) -> Self {
        Self {
            dir: dir.into(),
            channel_id: channel_id.into(),
            permission_granted,
            clock: local_now,
        }
    }

    /// Replace the clock used to stamp newly scheduled entries.
    #[must_use]
    pub const fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn delivered_log(&self) -> PathBuf {
        self.dir.join(DELIVERED_FILE)
    }

    fn state_path(&self) -> PathBuf {
        self.dir.join(SCHEDULED_FILE)
    }

    async fn load(&self) -> Result<OutboxState, RemindError> {
        let path = self.state_path();
        match tokio::fs::read_to_string(&path).await {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(OutboxState::default()),
            Err(e) => Err(RemindError::io(&path, e)),
        }
    }

    async fn store(&self, state: &OutboxState) -> Result<(), RemindError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| RemindError::io(&self.dir, e))?;
        let path = self.state_path();
        let tmp = self.dir.join(format!("{SCHEDULED_FILE}.tmp"));
        tokio::fs::write(&tmp, serde_json::to_string_pretty(state)?)
            .await
            .map_err(|e| RemindError::io(&tmp, e))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| RemindError::io(&path, e))
    }

    /// Fire everything due at `now`.
    ///
    /// One-shots at or before `now` fire once and are removed. Recurring
    /// entries fire when their latest occurrence at or before `now` is newer
    /// than their last-fired stamp. Fired alerts are appended to
    /// `delivered.jsonl`.
    ///
    /// # Errors
    ///
    /// Returns `RemindError` if the outbox cannot be read or written.
    pub async fn fire_due(&self, now: NaiveDateTime) -> Result<Vec<ScheduledNotification>, RemindError> {
        let mut state = self.load().await?;
        let mut fired = Vec::new();
        let mut kept = Vec::with_capacity(state.entries.len());

        for mut entry in std::mem::take(&mut state.entries) {
            let due = match entry.request.trigger {
                Trigger::At { at } => at <= now && at > entry.last_fired,
                trigger => latest_occurrence(trigger, now).is_some_and(|at| at > entry.last_fired),
            };
            if due {
                fired.push(ScheduledNotification {
                    handle: entry.handle.clone(),
                    request: entry.request.clone(),
                });
                entry.last_fired = now;
            }
            let spent = due && !entry.request.trigger.is_recurring();
            if !spent {
                kept.push(entry);
            }
        }
        state.entries = kept;

        if !fired.is_empty() {
            let alerts: Vec<DeliveredAlert> = fired
                .iter()
                .map(|n| DeliveredAlert {
                    handle: n.handle.clone(),
                    channel: state.channel.clone(),
                    title: n.request.title.clone(),
                    body: n.request.body.clone(),
                    fired_at: now,
                })
                .collect();
            tokio::fs::create_dir_all(&self.dir)
                .await
                .map_err(|e| RemindError::io(&self.dir, e))?;
            let log = self.delivered_log();
            serde_jsonlines::append_json_lines(&log, &alerts).map_err(|e| RemindError::io(&log, e))?;
            tracing::info!(count = fired.len(), "fired due notifications");
        }
        self.store(&state).await?;
        Ok(fired)
    }

    /// Alerts delivered so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RemindError::Io` if the log exists but cannot be parsed.
    pub fn delivered(&self) -> Result<Vec<DeliveredAlert>, RemindError> {
        let log = self.delivered_log();
        if !log.exists() {
            return Ok(Vec::new());
        }
        serde_jsonlines::json_lines::<DeliveredAlert, _>(&log)
            .and_then(|lines| lines.collect::<std::io::Result<Vec<_>>>())
            .map_err(|e| RemindError::io(&log, e))
    }
}

/// Most recent instant at or before `now` a recurring trigger fires.
fn latest_occurrence(trigger: Trigger, now: NaiveDateTime) -> Option<NaiveDateTime> {
    match trigger {
        Trigger::Daily { hour, minute } => {
            let time = NaiveTime::from_hms_opt(u32::from(hour), u32::from(minute), 0)?;
            let today = now.date().and_time(time);
            Some(if today <= now { today } else { today - Duration::days(1) })
        }
        Trigger::Weekly {
            hour,
            minute,
            weekday,
        } => {
            let time = NaiveTime::from_hms_opt(u32::from(hour), u32::from(minute), 0)?;
            let days_back = days_since(now.date(), weekday);
            let candidate = (now.date() - Duration::days(days_back)).and_time(time);
            Some(if candidate <= now {
                candidate
            } else {
                candidate - Duration::days(7)
            })
        }
        Trigger::At { at } => (at <= now).then_some(at),
    }
}

fn days_since(date: NaiveDate, weekday: DayOfWeek) -> i64 {
    let today = i64::from(date.weekday().num_days_from_sunday());
    let target = i64::from(weekday.sunday_based_number()) - 1;
    (today - target).rem_euclid(7)
}

impl NotificationDelivery for OutboxDelivery {
    async fn request_permission(&self) -> Result<bool, RemindError> {
        Ok(self.permission_granted)
    }

    async fn ensure_channel(&self) -> Result<(), RemindError> {
        let mut state = self.load().await?;
        if state.channel.as_deref() != Some(self.channel_id.as_str()) {
            state.channel = Some(self.channel_id.clone());
            self.store(&state).await?;
        }
        Ok(())
    }

    async fn schedule(&self, request: &ScheduleRequest) -> Result<NotificationHandle, RemindError> {
        let mut state = self.load().await?;
        state.next_id += 1;
        let handle = NotificationHandle::new(format!("outbox-{}", state.next_id));
        state.entries.push(OutboxEntry {
            handle: handle.clone(),
            request: request.clone(),
            last_fired: (self.clock)(),
        });
        self.store(&state).await?;
        tracing::debug!(%handle, trigger = %request.trigger, "scheduled");
        Ok(handle)
    }

    async fn cancel(&self, handle: &NotificationHandle) -> Result<(), RemindError> {
        let mut state = self.load().await?;
        let before = state.entries.len();
        state.entries.retain(|entry| &entry.handle != handle);
        if state.entries.len() == before {
            return Err(RemindError::UnknownHandle(handle.clone()));
        }
        self.store(&state).await
    }

    async fn deliver_due(&self, now: NaiveDateTime) -> Result<u32, RemindError> {
        let fired = self.fire_due(now).await?;
        Ok(u32::try_from(fired.len()).unwrap_or(u32::MAX))
    }

    async fn list_scheduled(&self) -> Result<Vec<ScheduledNotification>, RemindError> {
        Ok(self
            .load()
            .await?
            .entries
            .into_iter()
            .map(|entry| ScheduledNotification {
                handle: entry.handle,
                request: entry.request,
            })
            .collect())
    }
}
