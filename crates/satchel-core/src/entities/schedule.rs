use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::{DayOfWeek, TimeOfDay};

/// Opaque identifier a delivery backend returns for an accepted request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct NotificationHandle(String);

impl NotificationHandle {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// When a scheduled notification fires. Times are local wall-clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trigger {
    /// Every day at `hour:minute`.
    Daily { hour: u8, minute: u8 },
    /// Every week on `weekday` at `hour:minute`.
    Weekly {
        hour: u8,
        minute: u8,
        weekday: DayOfWeek,
    },
    /// Once, at the given instant.
    At { at: NaiveDateTime },
}

impl Trigger {
    #[must_use]
    pub const fn daily(time: TimeOfDay) -> Self {
        Self::Daily {
            hour: time.hour,
            minute: time.minute,
        }
    }

    #[must_use]
    pub const fn weekly(time: TimeOfDay, weekday: DayOfWeek) -> Self {
        Self::Weekly {
            hour: time.hour,
            minute: time.minute,
            weekday,
        }
    }

    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        !matches!(self, Self::At { .. })
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily { hour, minute } => write!(f, "daily {hour:02}:{minute:02}"),
            Self::Weekly {
                hour,
                minute,
                weekday,
            } => write!(f, "every {weekday} {hour:02}:{minute:02}"),
            Self::At { at } => write!(f, "at {}", at.format("%Y-%m-%d %H:%M")),
        }
    }
}

/// A notification to be handed to the delivery backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct ScheduleRequest {
    pub title: String,
    pub body: String,
    pub trigger: Trigger,
}

/// A request the delivery backend has accepted and still holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScheduledNotification {
    pub handle: NotificationHandle,
    #[serde(flatten)]
    pub request: ScheduleRequest,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn trigger_is_internally_tagged() {
        let trigger = Trigger::weekly(TimeOfDay { hour: 8, minute: 30 }, DayOfWeek::Monday);
        let value = serde_json::to_value(trigger).unwrap();
        assert_eq!(value["type"], "weekly");
        assert_eq!(value["weekday"], "monday");
        assert_eq!(value["minute"], 30);
    }

    #[test]
    fn one_shot_is_not_recurring() {
        let at = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert!(!Trigger::At { at }.is_recurring());
        assert!(Trigger::daily(TimeOfDay { hour: 20, minute: 0 }).is_recurring());
        assert_eq!(Trigger::At { at }.to_string(), "at 2026-10-19 09:00");
    }
}
