//! Status enums, categories, and test-record classifiers for Satchel.
//!
//! All enums serialize to the exact strings stored in the persisted JSON
//! blobs. `as_str()` returns that same string so storage, display, and CLI
//! parsing agree.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ItemStatus
// ---------------------------------------------------------------------------

/// Completion status of a single assignment or experiment.
///
/// Transitions are unconstrained: the user may move an item from any status
/// to any other status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    #[default]
    NotGiven,
    NotCompleted,
    Written,
    Completed,
}

impl ItemStatus {
    /// Every status, in the order summaries list them.
    pub const ALL: [Self; 4] = [
        Self::Completed,
        Self::Written,
        Self::NotCompleted,
        Self::NotGiven,
    ];

    /// Work that is handed out but not yet resolved. Only these items get
    /// submission reminders.
    #[must_use]
    pub const fn is_unresolved(self) -> bool {
        matches!(self, Self::Written | Self::NotCompleted)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotGiven => "not_given",
            Self::NotCompleted => "not_completed",
            Self::Written => "written",
            Self::Completed => "completed",
        }
    }

    /// Human label used in summaries ("Not Completed").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotGiven => "Not Given",
            Self::NotCompleted => "Not Completed",
            Self::Written => "Written",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Which tracked list a subject lives in.
///
/// The two lists are structurally identical; the category only changes item
/// names, reminder wording, and the storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Assignment,
    Experiment,
}

impl Category {
    pub const ALL: [Self; 2] = [Self::Assignment, Self::Experiment];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assignment => "assignment",
            Self::Experiment => "experiment",
        }
    }

    /// Capitalized form used in titles ("Assignment").
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Assignment => "Assignment",
            Self::Experiment => "Experiment",
        }
    }

    /// Title of the two advance submission reminders.
    #[must_use]
    pub fn reminder_title(self) -> String {
        format!("{} Reminder", self.title())
    }

    /// Title of the same-day submission reminder.
    #[must_use]
    pub fn due_today_title(self) -> String {
        format!("{} Due Today", self.title())
    }

    /// Default name of the `n`th item (1-based).
    #[must_use]
    pub fn item_name(self, n: u32) -> String {
        format!("{} {n}", self.title())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ThemeMode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TestType
// ---------------------------------------------------------------------------

/// Kind of examination a test record covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TestType {
    #[serde(rename = "UT1", alias = "ut1")]
    Ut1,
    #[serde(rename = "UT2", alias = "ut2")]
    Ut2,
    #[serde(rename = "Finals", alias = "finals")]
    Finals,
}

impl TestType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ut1 => "UT1",
            Self::Ut2 => "UT2",
            Self::Finals => "Finals",
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AcademicYear
// ---------------------------------------------------------------------------

/// Year of study (first, second, third, final year of engineering).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum AcademicYear {
    #[serde(alias = "fe")]
    Fe,
    #[serde(alias = "se")]
    Se,
    #[serde(alias = "te")]
    Te,
    #[serde(alias = "be")]
    Be,
}

impl AcademicYear {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fe => "FE",
            Self::Se => "SE",
            Self::Te => "TE",
            Self::Be => "BE",
        }
    }
}

impl fmt::Display for AcademicYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// GradeBand
// ---------------------------------------------------------------------------

/// Coarse band a percentage falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GradeBand {
    Excellent,
    VeryGood,
    Good,
    Fair,
    Poor,
}

impl GradeBand {
    /// Band for a percentage in `0.0..=100.0`.
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::Excellent
        } else if percentage >= 80.0 {
            Self::VeryGood
        } else if percentage >= 70.0 {
            Self::Good
        } else if percentage >= 60.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::VeryGood => "very_good",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

impl fmt::Display for GradeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(
        status_not_completed,
        ItemStatus,
        ItemStatus::NotCompleted,
        "not_completed"
    );
    test_serde_roundtrip!(status_written, ItemStatus, ItemStatus::Written, "written");
    test_serde_roundtrip!(
        category_experiment,
        Category,
        Category::Experiment,
        "experiment"
    );
    test_serde_roundtrip!(theme_dark, ThemeMode, ThemeMode::Dark, "dark");
    test_serde_roundtrip!(test_type_ut1, TestType, TestType::Ut1, "UT1");
    test_serde_roundtrip!(test_type_finals, TestType, TestType::Finals, "Finals");
    test_serde_roundtrip!(year_te, AcademicYear, AcademicYear::Te, "TE");

    #[test]
    fn lowercase_aliases_parse() {
        let ty: TestType = serde_json::from_str("\"ut2\"").unwrap();
        assert_eq!(ty, TestType::Ut2);
        let year: AcademicYear = serde_json::from_str("\"be\"").unwrap();
        assert_eq!(year, AcademicYear::Be);
    }

    #[test]
    fn only_written_and_not_completed_are_unresolved() {
        assert!(ItemStatus::Written.is_unresolved());
        assert!(ItemStatus::NotCompleted.is_unresolved());
        assert!(!ItemStatus::Completed.is_unresolved());
        assert!(!ItemStatus::NotGiven.is_unresolved());
    }

    #[test]
    fn new_items_default_to_not_given() {
        assert_eq!(ItemStatus::default(), ItemStatus::NotGiven);
    }

    #[test]
    fn category_wording() {
        assert_eq!(Category::Assignment.reminder_title(), "Assignment Reminder");
        assert_eq!(Category::Experiment.due_today_title(), "Experiment Due Today");
        assert_eq!(Category::Experiment.item_name(4), "Experiment 4");
    }

    #[test]
    fn grade_band_thresholds() {
        assert_eq!(GradeBand::from_percentage(90.0), GradeBand::Excellent);
        assert_eq!(GradeBand::from_percentage(89.9), GradeBand::VeryGood);
        assert_eq!(GradeBand::from_percentage(70.0), GradeBand::Good);
        assert_eq!(GradeBand::from_percentage(60.0), GradeBand::Fair);
        assert_eq!(GradeBand::from_percentage(59.9), GradeBand::Poor);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", ItemStatus::NotGiven), "not_given");
        assert_eq!(format!("{}", Category::Assignment), "assignment");
        assert_eq!(format!("{}", ThemeMode::Light), "light");
        assert_eq!(format!("{}", TestType::Ut2), "UT2");
        assert_eq!(format!("{}", AcademicYear::Fe), "FE");
        assert_eq!(format!("{}", GradeBand::VeryGood), "very_good");
    }
}
