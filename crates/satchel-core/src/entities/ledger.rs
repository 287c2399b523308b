use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::NotificationHandle;
use crate::enums::Category;

/// Handles scheduled by the last re-sync pass, so the next pass can cancel
/// exactly what it created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReminderLedger {
    #[serde(default)]
    pub digest: Vec<NotificationHandle>,
    #[serde(default)]
    pub submissions: Vec<SubmissionHandles>,
}

/// One-shot reminder handles for a single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionHandles {
    pub category: Category,
    pub subject_id: String,
    pub item_id: u32,
    pub handles: Vec<NotificationHandle>,
}

impl ReminderLedger {
    /// Every handle in the ledger, digest first.
    #[must_use]
    pub fn all_handles(&self) -> Vec<NotificationHandle> {
        self.digest
            .iter()
            .chain(self.submissions.iter().flat_map(|s| s.handles.iter()))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digest.is_empty() && self.submissions.iter().all(|s| s.handles.is_empty())
    }

    /// Handles recorded for one item, if any.
    #[must_use]
    pub fn handles_for(&self, category: Category, subject_id: &str, item_id: u32) -> &[NotificationHandle] {
        self.submissions
            .iter()
            .find(|s| s.category == category && s.subject_id == subject_id && s.item_id == item_id)
            .map_or(&[], |s| s.handles.as_slice())
    }
}
