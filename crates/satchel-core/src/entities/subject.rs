use chrono::{NaiveDate, NaiveDateTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::NotificationHandle;
use crate::enums::{Category, ItemStatus};

/// One subject's set of assignments or experiments.
///
/// Older blobs name the item array after the category (`assignments` /
/// `experiments`) and carry a redundant total; both are accepted on read.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrackedSubject {
    pub id: String,
    pub subject_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,
    #[serde(default, alias = "assignments", alias = "experiments")]
    pub items: Vec<TrackedItem>,
}

/// A single assignment or experiment inside a subject.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrackedItem {
    /// 1-based ordinal within the parent subject.
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_date: Option<SubmissionDate>,
    /// Handles of the one-shot reminders currently scheduled for this item.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submission_notif_ids: Vec<NotificationHandle>,
}

/// Submission due date. Assignments carry a plain calendar date; experiments
/// may also carry a time of day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum SubmissionDate {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl SubmissionDate {
    /// Calendar day the submission falls on. Reminder instants are computed
    /// from this day alone.
    #[must_use]
    pub fn day(self) -> NaiveDate {
        match self {
            Self::Date(date) => date,
            Self::DateTime(at) => at.date(),
        }
    }
}

impl std::str::FromStr for SubmissionDate {
    type Err = String;

    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM`, or `YYYY-MM-DDTHH:MM[:SS]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self::Date(date));
        }
        for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
            if let Ok(at) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(Self::DateTime(at));
            }
        }
        Err(format!(
            "invalid submission date '{s}' (expected YYYY-MM-DD or YYYY-MM-DD HH:MM)"
        ))
    }
}

impl std::fmt::Display for SubmissionDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::DateTime(at) => write!(f, "{}", at.format("%Y-%m-%d %H:%M")),
        }
    }
}

impl TrackedSubject {
    /// Build a subject with `count` fresh items, all `not_given`.
    #[must_use]
    pub fn new(
        id: String,
        subject_name: String,
        course_code: Option<String>,
        category: Category,
        count: u32,
    ) -> Self {
        Self {
            id,
            subject_name,
            course_code,
            items: (1..=count).map(|n| TrackedItem::new(category, n)).collect(),
        }
    }

    /// `"{subjectName} {category}"`, the label used in badges and reminder bodies.
    #[must_use]
    pub fn label(&self, category: Category) -> String {
        format!("{} {}", self.subject_name, category)
    }

    #[must_use]
    pub fn item(&self, item_id: u32) -> Option<&TrackedItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn item_mut(&mut self, item_id: u32) -> Option<&mut TrackedItem> {
        self.items.iter_mut().find(|item| item.id == item_id)
    }

    /// Grow with `not_given` items numbered after the current last, or
    /// truncate from the end.
    pub fn resize(&mut self, category: Category, new_total: u32) {
        let current = u32::try_from(self.items.len()).unwrap_or(u32::MAX);
        if new_total > current {
            let last = self.items.iter().map(|item| item.id).max().unwrap_or(0);
            let added = new_total - current;
            self.items
                .extend((last + 1..=last + added).map(|n| TrackedItem::new(category, n)));
        } else {
            self.items.truncate(new_total as usize);
        }
    }
}

impl TrackedItem {
    #[must_use]
    pub fn new(category: Category, n: u32) -> Self {
        Self {
            id: n,
            name: category.item_name(n),
            status: ItemStatus::NotGiven,
            submission_date: None,
            submission_notif_ids: Vec::new(),
        }
    }

    /// Set or clear the due date. Clearing also drops the reminder handles.
    pub fn set_submission_date(&mut self, date: Option<SubmissionDate>) {
        if date.is_none() {
            self.submission_notif_ids.clear();
        }
        self.submission_date = date;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn subject(count: u32) -> TrackedSubject {
        TrackedSubject::new("1".into(), "Physics".into(), None, Category::Assignment, count)
    }

    #[test]
    fn new_subject_numbers_items_from_one() {
        let s = subject(3);
        let ids: Vec<u32> = s.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(s.items[2].name, "Assignment 3");
        assert!(s.items.iter().all(|i| i.status == ItemStatus::NotGiven));
    }

    #[test]
    fn resize_grows_after_last_item() {
        let mut s = subject(2);
        s.items[1].status = ItemStatus::Written;
        s.resize(Category::Assignment, 4);
        assert_eq!(s.items.len(), 4);
        assert_eq!(s.items[3].name, "Assignment 4");
        assert_eq!(s.items[1].status, ItemStatus::Written);
    }

    #[test]
    fn resize_truncates_from_end() {
        let mut s = subject(5);
        s.resize(Category::Assignment, 2);
        let ids: Vec<u32> = s.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn clearing_date_clears_handles() {
        let mut item = TrackedItem::new(Category::Experiment, 1);
        item.set_submission_date(Some("2026-10-21".parse().unwrap()));
        item.submission_notif_ids = vec![NotificationHandle::new("n-1")];
        item.set_submission_date(None);
        assert!(item.submission_date.is_none());
        assert!(item.submission_notif_ids.is_empty());
    }

    #[test]
    fn submission_date_parses_both_forms() {
        let date: SubmissionDate = "2026-10-21".parse().unwrap();
        assert_eq!(date, SubmissionDate::Date(NaiveDate::from_ymd_opt(2026, 10, 21).unwrap()));

        let at: SubmissionDate = "2026-10-21 14:30".parse().unwrap();
        assert_eq!(at.day(), NaiveDate::from_ymd_opt(2026, 10, 21).unwrap());
        assert_eq!(at.to_string(), "2026-10-21 14:30");

        assert!("21/10/2026".parse::<SubmissionDate>().is_err());
    }

    #[test]
    fn legacy_assignment_blob_is_accepted() {
        let json = r#"{
            "id": "1718000000000",
            "subjectName": "Maths",
            "totalAssignments": 2,
            "assignments": [
                {"id": 1, "name": "Assignment 1", "status": "written"},
                {"id": 2, "name": "Assignment 2", "status": "not_given"}
            ]
        }"#;
        let s: TrackedSubject = serde_json::from_str(json).unwrap();
        assert_eq!(s.items.len(), 2);
        assert_eq!(s.items[0].status, ItemStatus::Written);
        assert!(s.course_code.is_none());
    }

    #[test]
    fn persisted_layout_uses_camel_case() {
        let mut s = subject(1);
        s.items[0].submission_date = Some("2026-10-21T09:15:00".parse().unwrap());
        let value = serde_json::to_value(&s).unwrap();
        assert_eq!(value["subjectName"], "Physics");
        assert_eq!(value["items"][0]["submissionDate"], "2026-10-21T09:15:00");
        assert!(value["items"][0].get("submissionNotifIds").is_none());
    }
}
