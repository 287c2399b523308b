//! Subject repository for both tracked lists.

use chrono::{DateTime, Utc};

use satchel_core::entities::{SubmissionDate, TrackedSubject};
use satchel_core::enums::{Category, ItemStatus};
use satchel_core::ids::generate_id;

use crate::error::StoreError;
use crate::keys;
use crate::kv::KeyValueStore;
use crate::service::SatchelStore;
use crate::updates::item::{ItemUpdate, ItemUpdateBuilder};

impl<S: KeyValueStore> SatchelStore<S> {
    /// Every subject in the category's list, in insertion order.
    pub async fn list_subjects(&self, category: Category) -> Vec<TrackedSubject> {
        self.load_or_default(keys::subjects(category)).await
    }

    pub async fn save_subjects(
        &self,
        category: Category,
        subjects: &[TrackedSubject],
    ) -> Result<(), StoreError> {
        self.save_json(keys::subjects(category), subjects).await
    }

    /// Create a subject with `count` items, all `not_given`.
    ///
    /// # Errors
    ///
    /// Validation error on an empty name or zero count.
    pub async fn add_subject(
        &self,
        category: Category,
        name: &str,
        course_code: Option<&str>,
        count: u32,
        now: DateTime<Utc>,
    ) -> Result<TrackedSubject, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::validation("subject name must not be empty"));
        }
        if count == 0 {
            return Err(StoreError::validation(format!(
                "number of {category}s must be greater than 0"
            )));
        }
        let course_code = course_code
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(String::from);

        let mut subjects = self.list_subjects(category).await;
        let id = generate_id(now, subjects.iter().map(|s| s.id.as_str()));
        let subject = TrackedSubject::new(id, name.to_string(), course_code, category, count);
        subjects.push(subject.clone());
        self.save_subjects(category, &subjects).await?;

        tracing::info!(%category, id = %subject.id, name, count, "subject added");
        Ok(subject)
    }

    /// # Errors
    ///
    /// `NotFound` if no subject has this id.
    pub async fn get_subject(&self, category: Category, id: &str) -> Result<TrackedSubject, StoreError> {
        self.list_subjects(category)
            .await
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::not_found(category.as_str(), id))
    }

    /// Apply `update` to one item and persist the list.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown subject or item.
    pub async fn update_item(
        &self,
        category: Category,
        subject_id: &str,
        item_id: u32,
        update: ItemUpdate,
    ) -> Result<TrackedSubject, StoreError> {
        self.modify_subject(category, subject_id, |subject| {
            let item = subject.item_mut(item_id).ok_or_else(|| {
                StoreError::not_found(
                    &format!("{category} item"),
                    format!("{subject_id}/{item_id}"),
                )
            })?;
            update.apply(item);
            Ok(())
        })
        .await
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown subject or item.
    pub async fn set_item_status(
        &self,
        category: Category,
        subject_id: &str,
        item_id: u32,
        status: ItemStatus,
    ) -> Result<TrackedSubject, StoreError> {
        let update = ItemUpdateBuilder::new().status(status).build();
        self.update_item(category, subject_id, item_id, update).await
    }

    /// Set the due date, or clear it (and the item's reminder handles) with
    /// `None`.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown subject or item.
    pub async fn set_submission_date(
        &self,
        category: Category,
        subject_id: &str,
        item_id: u32,
        date: Option<SubmissionDate>,
    ) -> Result<TrackedSubject, StoreError> {
        let update = ItemUpdateBuilder::new().submission_date(date).build();
        self.update_item(category, subject_id, item_id, update).await
    }

    /// # Errors
    ///
    /// Validation error when `new_total` is zero; `NotFound` for an unknown
    /// subject.
    pub async fn resize_subject(
        &self,
        category: Category,
        subject_id: &str,
        new_total: u32,
    ) -> Result<TrackedSubject, StoreError> {
        if new_total == 0 {
            return Err(StoreError::validation(format!(
                "number of {category}s must be greater than 0"
            )));
        }
        self.modify_subject(category, subject_id, |subject| {
            subject.resize(category, new_total);
            Ok(())
        })
        .await
    }

    /// Remove a subject and return it.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown subject.
    pub async fn delete_subject(&self, category: Category, subject_id: &str) -> Result<TrackedSubject, StoreError> {
        let mut subjects = self.list_subjects(category).await;
        let idx = subjects
            .iter()
            .position(|s| s.id == subject_id)
            .ok_or_else(|| StoreError::not_found(category.as_str(), subject_id))?;
        let removed = subjects.remove(idx);
        self.save_subjects(category, &subjects).await?;
        tracing::info!(%category, id = subject_id, "subject deleted");
        Ok(removed)
    }

    async fn modify_subject<F>(
        &self,
        category: Category,
        subject_id: &str,
        change: F,
    ) -> Result<TrackedSubject, StoreError>
    where
        F: FnOnce(&mut TrackedSubject) -> Result<(), StoreError>,
    {
        let mut subjects = self.list_subjects(category).await;
        let subject = subjects
            .iter_mut()
            .find(|s| s.id == subject_id)
            .ok_or_else(|| StoreError::not_found(category.as_str(), subject_id))?;
        change(subject)?;
        let updated = subject.clone();
        self.save_subjects(category, &subjects).await?;
        Ok(updated)
    }
}
