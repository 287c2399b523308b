//! Theme persistence and clear-all.

use satchel_core::enums::ThemeMode;

use crate::error::StoreError;
use crate::keys;
use crate::kv::KeyValueStore;
use crate::service::SatchelStore;

impl<S: KeyValueStore> SatchelStore<S> {
    /// Saved theme, `light` when none is stored.
    pub async fn load_theme(&self) -> ThemeMode {
        self.load_or_default(keys::THEME).await
    }

    pub async fn save_theme(&self, theme: ThemeMode) -> Result<(), StoreError> {
        self.save_json(keys::THEME, &theme).await
    }

    /// Remove assignments, experiments, test scores and theme. Reminder
    /// preferences and the ledger are kept so the next re-sync can cancel
    /// what is still scheduled.
    ///
    /// Returns the keys removed.
    pub async fn clear_all(&self) -> Result<Vec<String>, StoreError> {
        self.remove(&keys::CLEARABLE).await?;
        tracing::info!(keys = ?keys::CLEARABLE, "cleared app data");
        Ok(keys::CLEARABLE.iter().map(ToString::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use satchel_core::enums::Category;

    use super::*;
    use crate::test_support::helpers::{fixed_now, memory_store, raw};

    #[tokio::test]
    async fn theme_defaults_to_light() {
        let store = memory_store();
        assert_eq!(store.load_theme().await, ThemeMode::Light);
        store.save_theme(ThemeMode::Dark).await.unwrap();
        assert_eq!(store.load_theme().await, ThemeMode::Dark);
    }

    #[tokio::test]
    async fn clear_all_keeps_reminder_settings() {
        let store = memory_store();
        store.add_subject(Category::Assignment, "Maths", None, 2, fixed_now()).await.unwrap();
        store.save_theme(ThemeMode::Dark).await.unwrap();
        store.save_json(keys::REMINDER_ENABLED, &false).await.unwrap();

        let cleared = store.clear_all().await.unwrap();
        assert_eq!(cleared.len(), 4);
        assert!(store.list_subjects(Category::Assignment).await.is_empty());
        assert_eq!(store.load_theme().await, ThemeMode::Light);
        assert_eq!(raw(&store, keys::REMINDER_ENABLED).await.as_deref(), Some("false"));
    }
}
