//! Reminder preferences and the reminder ledger.

use satchel_core::entities::{ReminderLedger, ReminderPreferences, TimeOfDay, WeekdayMask};

use crate::error::StoreError;
use crate::keys;
use crate::kv::KeyValueStore;
use crate::service::SatchelStore;

impl<S: KeyValueStore> SatchelStore<S> {
    /// Stored preferences, falling back per key to: enabled, `seed_times`,
    /// all weekdays. Stored times out of range are dropped.
    pub async fn load_preferences(&self, seed_times: &[TimeOfDay]) -> ReminderPreferences {
        let enabled = self.load_json(keys::REMINDER_ENABLED).await.unwrap_or(true);
        let times = match self.load_json::<Vec<TimeOfDay>>(keys::REMINDER_TIMES).await {
            Some(times) => {
                let (valid, invalid): (Vec<_>, Vec<_>) =
                    times.into_iter().partition(|t| t.is_valid());
                if !invalid.is_empty() {
                    tracing::warn!(dropped = invalid.len(), "ignoring out-of-range reminder times");
                }
                valid
            }
            None => seed_times.to_vec(),
        };
        let active_weekdays = self
            .load_json::<WeekdayMask>(keys::REMINDER_WEEKDAYS)
            .await
            .unwrap_or_default();
        ReminderPreferences {
            enabled,
            times,
            active_weekdays,
        }
    }

    /// Persist all three preference keys.
    ///
    /// # Errors
    ///
    /// Validation error if a time is out of range; otherwise the store's
    /// write error.
    pub async fn save_preferences(&self, prefs: &ReminderPreferences) -> Result<(), StoreError> {
        if let Some(bad) = prefs.times.iter().find(|t| !t.is_valid()) {
            return Err(StoreError::validation(format!(
                "reminder time {}:{:02} is out of range",
                bad.hour, bad.minute
            )));
        }
        self.save_json(keys::REMINDER_ENABLED, &prefs.enabled).await?;
        self.save_json(keys::REMINDER_TIMES, &prefs.times).await?;
        self.save_json(keys::REMINDER_WEEKDAYS, &prefs.active_weekdays).await
    }

    pub async fn load_ledger(&self) -> ReminderLedger {
        self.load_or_default(keys::REMINDER_LEDGER).await
    }

    pub async fn save_ledger(&self, ledger: &ReminderLedger) -> Result<(), StoreError> {
        self.save_json(keys::REMINDER_LEDGER, ledger).await
    }
}
