//! The notification delivery seam.

use chrono::NaiveDateTime;
use satchel_core::entities::{NotificationHandle, ScheduleRequest, ScheduledNotification};

use crate::error::RemindError;

/// Something that can hold scheduled notifications and present them later.
///
/// `schedule` returns an opaque handle; `cancel` and `list_scheduled` speak
/// in those handles. Weekly triggers carry a `DayOfWeek`; implementations
/// translate it to their own numbering.
#[allow(async_fn_in_trait)]
pub trait NotificationDelivery {
    /// Ask for permission to post notifications.
    async fn request_permission(&self) -> Result<bool, RemindError>;

    /// Register the channel notifications are posted on. Idempotent.
    async fn ensure_channel(&self) -> Result<(), RemindError>;

    async fn schedule(&self, request: &ScheduleRequest) -> Result<NotificationHandle, RemindError>;

    async fn cancel(&self, handle: &NotificationHandle) -> Result<(), RemindError>;

    async fn list_scheduled(&self) -> Result<Vec<ScheduledNotification>, RemindError>;

    /// Present everything already due at `now` and return how many alerts
    /// went out. Backends whose platform presents alerts on its own keep
    /// the default.
    async fn deliver_due(&self, _now: NaiveDateTime) -> Result<u32, RemindError> {
        Ok(0)
    }
}
