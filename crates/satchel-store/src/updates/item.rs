//! Tracked item update builder.

use satchel_core::entities::{SubmissionDate, TrackedItem};
use satchel_core::enums::ItemStatus;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_date: Option<Option<SubmissionDate>>,
}

impl ItemUpdate {
    /// Whether the update changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.status.is_none() && self.submission_date.is_none()
    }

    pub(crate) fn apply(self, item: &mut TrackedItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(status) = self.status {
            item.status = status;
        }
        if let Some(date) = self.submission_date {
            item.set_submission_date(date);
        }
    }
}

pub struct ItemUpdateBuilder(ItemUpdate);

impl ItemUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ItemUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn status(mut self, status: ItemStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub const fn submission_date(mut self, date: Option<SubmissionDate>) -> Self {
        self.0.submission_date = Some(date);
        self
    }

    #[must_use]
    pub fn build(self) -> ItemUpdate {
        self.0
    }
}

impl Default for ItemUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
