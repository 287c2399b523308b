//! In-process delivery backend for tests and previews.

use std::sync::{Mutex, PoisonError};

use satchel_core::entities::{NotificationHandle, ScheduleRequest, ScheduledNotification};

use crate::delivery::NotificationDelivery;
use crate::error::RemindError;

#[derive(Debug, Default)]
struct MemoryState {
    next_id: u64,
    channel_ready: bool,
    scheduled: Vec<ScheduledNotification>,
    schedule_calls: usize,
}

/// Keeps scheduled notifications in a `Vec`. Handles are `mem-1`, `mem-2`, ...
///
/// Failure knobs let tests drive the denied and error paths.
#[derive(Debug)]
pub struct MemoryDelivery {
    state: Mutex<MemoryState>,
    permission: bool,
    fail_cancel: bool,
    fail_schedule_after: Option<usize>,
}

impl Default for MemoryDelivery {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDelivery {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState::default()),
            permission: true,
            fail_cancel: false,
            fail_schedule_after: None,
        }
    }

    /// A backend whose permission request is refused.
    #[must_use]
    pub fn denied() -> Self {
        Self {
            permission: false,
            ..Self::new()
        }
    }

    /// Every cancel call fails.
    #[must_use]
    pub const fn failing_cancel(mut self) -> Self {
        self.fail_cancel = true;
        self
    }

    /// Schedule calls after the first `n` fail.
    #[must_use]
    pub const fn failing_schedule_after(mut self, n: usize) -> Self {
        self.fail_schedule_after = Some(n);
        self
    }

    #[must_use]
    pub fn channel_ready(&self) -> bool {
        self.lock().channel_ready
    }

    /// Snapshot of what is scheduled right now.
    #[must_use]
    pub fn scheduled(&self) -> Vec<ScheduledNotification> {
        self.lock().scheduled.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NotificationDelivery for MemoryDelivery {
    async fn request_permission(&self) -> Result<bool, RemindError> {
        Ok(self.permission)
    }

    async fn ensure_channel(&self) -> Result<(), RemindError> {
        self.lock().channel_ready = true;
        Ok(())
    }

    async fn schedule(&self, request: &ScheduleRequest) -> Result<NotificationHandle, RemindError> {
        let mut state = self.lock();
        state.schedule_calls += 1;
        if self
            .fail_schedule_after
            .is_some_and(|limit| state.schedule_calls > limit)
        {
            return Err(RemindError::Schedule {
                title: request.title.clone(),
                reason: "memory backend configured to fail".to_string(),
            });
        }
        state.next_id += 1;
        let handle = NotificationHandle::new(format!("mem-{}", state.next_id));
        state.scheduled.push(ScheduledNotification {
            handle: handle.clone(),
            request: request.clone(),
        });
        Ok(handle)
    }

    async fn cancel(&self, handle: &NotificationHandle) -> Result<(), RemindError> {
        if self.fail_cancel {
            return Err(RemindError::UnknownHandle(handle.clone()));
        }
        let mut state = self.lock();
        let before = state.scheduled.len();
        state.scheduled.retain(|entry| &entry.handle != handle);
        if state.scheduled.len() == before {
            return Err(RemindError::UnknownHandle(handle.clone()));
        }
        Ok(())
    }

    async fn list_scheduled(&self) -> Result<Vec<ScheduledNotification>, RemindError> {
        Ok(self.scheduled())
    }
}

#[cfg(test)]
mod tests {
    use satchel_core::entities::{TimeOfDay, Trigger};

    use super::*;

    fn request() -> ScheduleRequest {
        ScheduleRequest {
            title: "ASS APP".into(),
            body: "hello".into(),
            trigger: Trigger::daily(TimeOfDay { hour: 9, minute: 0 }),
        }
    }

    #[tokio::test]
    async fn schedule_then_cancel() {
        let delivery = MemoryDelivery::new();
        let handle = delivery.schedule(&request()).await.unwrap();
        assert_eq!(handle.as_str(), "mem-1");
        assert_eq!(delivery.list_scheduled().await.unwrap().len(), 1);
        delivery.cancel(&handle).await.unwrap();
        assert!(delivery.scheduled().is_empty());
        assert!(delivery.cancel(&handle).await.is_err());
    }

    #[tokio::test]
    async fn schedule_failure_knob() {
        let delivery = MemoryDelivery::new().failing_schedule_after(1);
        assert!(delivery.schedule(&request()).await.is_ok());
        assert!(delivery.schedule(&request()).await.is_err());
        assert_eq!(delivery.scheduled().len(), 1);
    }
}
