//! CLI response types returned as JSON by `satchel` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ReminderPreferences, ScheduledNotification};
use crate::enums::ThemeMode;

/// Outcome of one full reminder re-sync pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub permission_granted: bool,
    /// Alerts that were due and got delivered before cancelling.
    #[serde(default)]
    pub delivered: u32,
    /// Handles cancelled, from the ledger and the recognition sweep.
    pub cancelled: u32,
    pub digest_scheduled: u32,
    pub submission_scheduled: u32,
}

impl SyncReport {
    #[must_use]
    pub const fn permission_denied() -> Self {
        Self {
            permission_granted: false,
            delivered: 0,
            cancelled: 0,
            digest_scheduled: 0,
            submission_scheduled: 0,
        }
    }
}

/// Response from `satchel startup`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StartupResponse {
    pub theme: ThemeMode,
    pub preferences: ReminderPreferences,
    pub sync: SyncReport,
}

/// Response from `satchel reminders show|set|enable|disable`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PreferencesResponse {
    pub preferences: ReminderPreferences,
    pub sync: SyncReport,
}

/// Response from `satchel reminders scheduled`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScheduledListResponse {
    pub scheduled: Vec<ScheduledNotification>,
    pub total: u32,
}

/// Response from `satchel reminders fire`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FireResponse {
    pub fired: Vec<ScheduledNotification>,
}

/// Response from delete commands.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub id: String,
    pub deleted: bool,
}

/// Response from `satchel theme get|set`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ThemeResponse {
    pub theme: ThemeMode,
}

/// Response from `satchel clear`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ClearResponse {
    pub cleared: Vec<String>,
}
