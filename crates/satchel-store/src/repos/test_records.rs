//! Test score repository.

use chrono::{DateTime, Utc};

use satchel_core::entities::{SubjectScore, TestRecord};
use satchel_core::enums::{AcademicYear, TestType};
use satchel_core::ids::generate_id;

use crate::error::StoreError;
use crate::keys;
use crate::kv::KeyValueStore;
use crate::service::SatchelStore;

const ENTITY: &str = "test record";

impl<S: KeyValueStore> SatchelStore<S> {
    pub async fn list_test_records(&self) -> Vec<TestRecord> {
        self.load_or_default(keys::TEST_SCORES).await
    }

    async fn save_test_records(&self, records: &[TestRecord]) -> Result<(), StoreError> {
        self.save_json(keys::TEST_SCORES, records).await
    }

    /// # Errors
    ///
    /// Validation error when `semester` is outside 1-8.
    pub async fn add_test_record(
        &self,
        test_type: TestType,
        year: AcademicYear,
        semester: u8,
        now: DateTime<Utc>,
    ) -> Result<TestRecord, StoreError> {
        if !(1..=8).contains(&semester) {
            return Err(StoreError::validation(format!(
                "semester must be between 1 and 8, got {semester}"
            )));
        }
        let mut records = self.list_test_records().await;
        let record = TestRecord {
            id: generate_id(now, records.iter().map(|r| r.id.as_str())),
            test_type,
            year,
            semester,
            subjects: Vec::new(),
        };
        records.push(record.clone());
        self.save_test_records(&records).await?;
        tracing::info!(id = %record.id, heading = %record.heading(), "test record added");
        Ok(record)
    }

    /// # Errors
    ///
    /// `NotFound` if no record has this id.
    pub async fn get_test_record(&self, id: &str) -> Result<TestRecord, StoreError> {
        self.list_test_records()
            .await
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::not_found(ENTITY, id))
    }

    /// # Errors
    ///
    /// `NotFound` if no record has this id.
    pub async fn delete_test_record(&self, id: &str) -> Result<TestRecord, StoreError> {
        let mut records = self.list_test_records().await;
        let idx = records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::not_found(ENTITY, id))?;
        let removed = records.remove(idx);
        self.save_test_records(&records).await?;
        Ok(removed)
    }

    /// Append marks for one subject to a record.
    ///
    /// # Errors
    ///
    /// Validation error on an empty name, non-positive total, or marks
    /// outside `0..=total`; `NotFound` for an unknown record.
    pub async fn add_subject_score(
        &self,
        record_id: &str,
        name: &str,
        marks_obtained: f64,
        total_marks: f64,
        now: DateTime<Utc>,
    ) -> Result<TestRecord, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::validation("subject name must not be empty"));
        }
        if !total_marks.is_finite() || total_marks <= 0.0 {
            return Err(StoreError::validation("total marks must be greater than 0"));
        }
        if !marks_obtained.is_finite() || marks_obtained < 0.0 || marks_obtained > total_marks {
            return Err(StoreError::validation(format!(
                "marks obtained must be between 0 and {total_marks}"
            )));
        }

        let mut records = self.list_test_records().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| StoreError::not_found(ENTITY, record_id))?;
        let id = generate_id(now, record.subjects.iter().map(|s| s.id.as_str()));
        record.subjects.push(SubjectScore {
            id,
            name: name.to_string(),
            marks_obtained,
            total_marks,
        });
        let updated = record.clone();
        self.save_test_records(&records).await?;
        Ok(updated)
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown record or score.
    pub async fn delete_subject_score(&self, record_id: &str, score_id: &str) -> Result<TestRecord, StoreError> {
        let mut records = self.list_test_records().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| StoreError::not_found(ENTITY, record_id))?;
        let before = record.subjects.len();
        record.subjects.retain(|s| s.id != score_id);
        if record.subjects.len() == before {
            return Err(StoreError::not_found("subject score", score_id));
        }
        let updated = record.clone();
        self.save_test_records(&records).await?;
        Ok(updated)
    }
}
