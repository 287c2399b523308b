use anyhow::Context;
use chrono::{Local, NaiveDateTime};
use satchel_config::SatchelConfig;
use satchel_core::entities::{ReminderPreferences, TimeOfDay};
use satchel_core::responses::SyncReport;
use satchel_remind::{OutboxDelivery, ReminderPlanner, ReminderSync};
use satchel_store::{FileStore, SatchelStore};

use crate::ui;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: SatchelConfig,
    pub store: SatchelStore<FileStore>,
    pub delivery: OutboxDelivery,
    seed_times: Vec<TimeOfDay>,
}

impl AppContext {
    /// Open the data directory and the notification outbox under it.
    pub async fn init(config: SatchelConfig) -> anyhow::Result<Self> {
        let data_dir = config.storage.data_dir.clone();

        let kv = FileStore::open(&data_dir)
            .await
            .with_context(|| format!("failed to open data directory {}", data_dir.display()))?;
        let delivery = OutboxDelivery::new(
            kv.dir().join("outbox"),
            config.notify.channel_id.clone(),
            config.notify.permission_granted,
        );
        let seed_times = config.reminders.seed_times()?;

        tracing::debug!(data_dir = %kv.dir().display(), "satchel context ready");

        Ok(Self {
            config,
            store: SatchelStore::new(kv),
            delivery,
            seed_times,
        })
    }

    fn reminder_sync(&self) -> ReminderSync<'_, FileStore, OutboxDelivery> {
        ReminderSync::new(
            &self.store,
            &self.delivery,
            ReminderPlanner::new(self.config.notify.app_title.clone()),
            self.seed_times.clone(),
        )
    }

    pub async fn preferences(&self) -> ReminderPreferences {
        self.store.load_preferences(&self.seed_times).await
    }

    /// Cancel and reschedule every reminder from the stored state.
    pub async fn resync(&self) -> anyhow::Result<SyncReport> {
        let report = self
            .reminder_sync()
            .run(local_now())
            .await
            .context("failed to re-sync reminders")?;
        if !report.permission_granted {
            ui::alert(
                "Notification permission is not granted; reminders will not be delivered. \
                 Set notify.permission_granted = true to enable them.",
            );
        }
        Ok(report)
    }
}

/// Wall-clock time in the local zone; reminders are scheduled in local time.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use satchel_config::SatchelConfig;

    use super::AppContext;

    #[tokio::test]
    async fn outbox_lives_under_the_data_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = SatchelConfig::default();
        config.storage.data_dir = dir.path().join("data");

        let ctx = AppContext::init(config).await.expect("context should open");
        let report = ctx.resync().await.expect("resync should succeed");

        assert!(report.permission_granted);
        assert!(dir.path().join("data/outbox/scheduled.json").exists());
        assert!(dir.path().join("data/reminder_ledger.json").exists());
    }
}
