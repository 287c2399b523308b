use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AcademicYear, TestType};

/// Marks for one examination sitting (e.g. UT1 of TE semester 5).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestRecord {
    pub id: String,
    pub test_type: TestType,
    pub year: AcademicYear,
    /// Semester number, 1 through 8.
    pub semester: u8,
    #[serde(default)]
    pub subjects: Vec<SubjectScore>,
}

/// Marks obtained in one subject of a test.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubjectScore {
    pub id: String,
    pub name: String,
    pub marks_obtained: f64,
    pub total_marks: f64,
}

impl TestRecord {
    /// `"UT1 - TE SEM 5"`.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} - {} SEM {}", self.test_type, self.year, self.semester)
    }
}
