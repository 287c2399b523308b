//! # satchel-config
//!
//! Layered configuration loading for Satchel using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SATCHEL_*` prefix, `__` as separator)
//! 2. Project-level `.satchel/config.toml`
//! 3. User-level `~/.config/satchel/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `SATCHEL_STORAGE__DATA_DIR` -> `storage.data_dir`,
//! `SATCHEL_NOTIFY__APP_TITLE` -> `notify.app_title`, etc.
//!
//! ```no_run
//! use satchel_config::SatchelConfig;
//!
//! let config = SatchelConfig::load_with_dotenv().expect("config");
//! println!("data in {}", config.storage.data_dir.display());
//! ```

mod error;
mod general;
mod notify;
mod reminders;
mod storage;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use notify::NotifyConfig;
pub use reminders::RemindersConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SatchelConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
    #[serde(default)]
    pub reminders: RemindersConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SatchelConfig {
    /// Load configuration from TOML files and environment variables, then
    /// validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env`
    /// support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` on malformed sources and
    /// `ConfigError::InvalidValue` when a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the current directory (if present), then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".satchel/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SATCHEL_").split("__"))
    }

    /// Check values serde cannot.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unparsable seed time or an
    /// empty notification channel.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.reminders.seed_times()?;
        if self.notify.channel_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "notify.channel_id".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("satchel").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SatchelConfig::default();
        config.validate().unwrap();
        assert_eq!(config.notify.app_title, "ASS APP");
        assert_eq!(config.notify.channel_id, "assapp-default");
        assert!(config.notify.permission_granted);
        assert_eq!(config.general.default_format, "json");
    }

    #[test]
    fn empty_channel_is_rejected() {
        let mut config = SatchelConfig::default();
        config.notify.channel_id = "  ".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "notify.channel_id"
        ));
    }
}
