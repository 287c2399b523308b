//! Notification delivery settings.

use serde::{Deserialize, Serialize};

fn default_app_title() -> String {
    "ASS APP".to_string()
}

fn default_channel_id() -> String {
    "assapp-default".to_string()
}

const fn default_permission_granted() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotifyConfig {
    /// Title of the recurring digest notification.
    #[serde(default = "default_app_title")]
    pub app_title: String,

    /// Channel the outbox registers before scheduling.
    #[serde(default = "default_channel_id")]
    pub channel_id: String,

    /// Answer the local outbox gives to permission requests. Set to `false`
    /// to exercise the denied path.
    #[serde(default = "default_permission_granted")]
    pub permission_granted: bool,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            app_title: default_app_title(),
            channel_id: default_channel_id(),
            permission_granted: default_permission_granted(),
        }
    }
}
