//! Seed values for reminder preferences.

use satchel_core::entities::TimeOfDay;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_times() -> Vec<String> {
    vec!["20:00".to_string()]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemindersConfig {
    /// `HH:MM` digest times used until the user saves their own.
    #[serde(default = "default_times")]
    pub default_times: Vec<String>,
}

impl Default for RemindersConfig {
    fn default() -> Self {
        Self {
            default_times: default_times(),
        }
    }
}

impl RemindersConfig {
    /// Parse `default_times`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first unparsable entry.
    pub fn seed_times(&self) -> Result<Vec<TimeOfDay>, ConfigError> {
        self.default_times
            .iter()
            .map(|raw| {
                raw.parse::<TimeOfDay>()
                    .map_err(|e| ConfigError::InvalidValue {
                        field: "reminders.default_times".to_string(),
                        reason: e.to_string(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_is_eight_pm() {
        let times = RemindersConfig::default().seed_times().unwrap();
        assert_eq!(times, vec![TimeOfDay { hour: 20, minute: 0 }]);
    }

    #[test]
    fn bad_seed_names_the_field() {
        let config = RemindersConfig {
            default_times: vec!["09:00".into(), "25:10".into()],
        };
        let err = config.seed_times().unwrap_err();
        assert!(err.to_string().contains("reminders.default_times"));
    }
}
