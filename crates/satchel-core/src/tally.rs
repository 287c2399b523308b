//! Pure tallies over tracked subjects and test records.
//!
//! Nothing here touches storage or the clock; the CLI and the reminder
//! planner feed in already-loaded lists.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{SubjectScore, TestRecord, TrackedSubject};
use crate::enums::{Category, GradeBand, ItemStatus};

/// Pair every subject in `subjects` with its category.
pub fn tagged(
    category: Category,
    subjects: &[TrackedSubject],
) -> impl Iterator<Item = (Category, &TrackedSubject)> {
    subjects.iter().map(move |subject| (category, subject))
}

// ---------------------------------------------------------------------------
// Written-items badge
// ---------------------------------------------------------------------------

/// Items awaiting review: how many are `written`, and whose they are.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WrittenTally {
    pub count: u32,
    /// `"{subjectName} {category}"`, one entry per written item.
    pub labels: Vec<String>,
}

/// Count `written` items across category-tagged subjects.
pub fn count_written_items<'a, I>(subjects: I) -> WrittenTally
where
    I: IntoIterator<Item = (Category, &'a TrackedSubject)>,
{
    let mut tally = WrittenTally::default();
    for (category, subject) in subjects {
        for item in &subject.items {
            if item.status == ItemStatus::Written {
                tally.count += 1;
                tally.labels.push(subject.label(category));
            }
        }
    }
    tally
}

// ---------------------------------------------------------------------------
// Status summary
// ---------------------------------------------------------------------------

/// Item numbers sharing one status within a subject.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusGroup {
    pub status: ItemStatus,
    pub count: u32,
    pub item_ids: Vec<u32>,
}

impl StatusGroup {
    /// `"1, 3"`, or `"None"` when the group is empty.
    #[must_use]
    pub fn numbers(&self) -> String {
        if self.item_ids.is_empty() {
            return "None".to_string();
        }
        self.item_ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Per-status breakdown of one subject, ordered completed, written,
/// not completed, not given.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusSummary {
    pub subject_id: String,
    pub subject_name: String,
    pub total: u32,
    pub groups: Vec<StatusGroup>,
}

impl StatusSummary {
    #[must_use]
    pub fn of(subject: &TrackedSubject) -> Self {
        let groups = ItemStatus::ALL
            .into_iter()
            .map(|status| {
                let item_ids: Vec<u32> = subject
                    .items
                    .iter()
                    .filter(|item| item.status == status)
                    .map(|item| item.id)
                    .collect();
                StatusGroup {
                    status,
                    count: u32::try_from(item_ids.len()).unwrap_or(u32::MAX),
                    item_ids,
                }
            })
            .collect();
        Self {
            subject_id: subject.id.clone(),
            subject_name: subject.subject_name.clone(),
            total: u32::try_from(subject.items.len()).unwrap_or(u32::MAX),
            groups,
        }
    }

    #[must_use]
    pub fn group(&self, status: ItemStatus) -> Option<&StatusGroup> {
        self.groups.iter().find(|group| group.status == status)
    }
}

// ---------------------------------------------------------------------------
// Score statistics
// ---------------------------------------------------------------------------

/// Percentage rounded to one decimal place.
#[must_use]
pub fn percentage(obtained: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    (obtained / total * 1000.0).round() / 10.0
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ScoreLine {
    pub id: String,
    pub name: String,
    pub marks_obtained: f64,
    pub total_marks: f64,
    pub percentage: f64,
    pub band: GradeBand,
}

impl ScoreLine {
    #[must_use]
    pub fn of(score: &SubjectScore) -> Self {
        let pct = percentage(score.marks_obtained, score.total_marks);
        Self {
            id: score.id.clone(),
            name: score.name.clone(),
            marks_obtained: score.marks_obtained,
            total_marks: score.total_marks,
            percentage: pct,
            band: GradeBand::from_percentage(pct),
        }
    }
}

/// Totals across every subject of a test record. `percentage` and `band`
/// are absent while the record has no subjects.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TestStats {
    pub record_id: String,
    pub heading: String,
    pub subjects: Vec<ScoreLine>,
    pub total_obtained: f64,
    pub total_marks: f64,
    pub percentage: Option<f64>,
    pub band: Option<GradeBand>,
}

impl TestStats {
    #[must_use]
    pub fn of(record: &TestRecord) -> Self {
        let total_obtained: f64 = record.subjects.iter().map(|s| s.marks_obtained).sum();
        let total_marks: f64 = record.subjects.iter().map(|s| s.total_marks).sum();
        let pct = (total_marks > 0.0).then(|| percentage(total_obtained, total_marks));
        Self {
            record_id: record.id.clone(),
            heading: record.heading(),
            subjects: record.subjects.iter().map(ScoreLine::of).collect(),
            total_obtained,
            total_marks,
            percentage: pct,
            band: pct.map(GradeBand::from_percentage),
        }
    }
}
