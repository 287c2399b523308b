//! Service layer over the key-value primitive.
//!
//! `SatchelStore` owns a `KeyValueStore` and exposes typed load/save of the
//! JSON blobs. All repo methods are implemented as `impl SatchelStore` blocks
//! under `repos/`.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Typed access to Satchel's persisted state.
///
/// Every mutation is a full-list read-modify-write: load the blob, change it
/// in memory, write the whole blob back. Last write wins.
pub struct SatchelStore<S> {
    kv: S,
}

impl<S: KeyValueStore> SatchelStore<S> {
    #[must_use]
    pub const fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Access the underlying key-value store.
    #[must_use]
    pub const fn kv(&self) -> &S {
        &self.kv
    }

    /// Decode the blob under `key`.
    ///
    /// Missing keys give `None`. Unreadable or malformed blobs are logged and
    /// also give `None`, so callers fall back to their defaults.
    pub async fn load_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.kv.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read stored value, using default");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "stored value is malformed, using default");
                None
            }
        }
    }

    /// [`Self::load_json`], falling back to `T::default()`.
    pub async fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.load_json(key).await.unwrap_or_default()
    }

    /// Encode `value` and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Encode` if serialization fails, or the store's
    /// write error.
    pub async fn save_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.kv.set(key, &raw).await?;
        tracing::debug!(key, bytes = raw.len(), "saved");
        Ok(())
    }

    /// Remove the given keys.
    ///
    /// # Errors
    ///
    /// Propagates the store's removal error.
    pub async fn remove(&self, keys: &[&str]) -> Result<(), StoreError> {
        self.kv.remove_many(keys).await
    }
}

#[cfg(test)]
mod tests {
    use crate::kv::KeyValueStore;
    use crate::test_support::helpers::memory_store;

    #[tokio::test]
    async fn malformed_blob_falls_back_to_default() {
        let store = memory_store();
        store.kv().set("assignments", "{not json").await.unwrap();
        let loaded: Vec<String> = store.load_or_default("assignments").await;
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn missing_key_is_none() {
        let store = memory_store();
        assert_eq!(store.load_json::<bool>("reminder_enabled").await, None);
    }

    #[tokio::test]
    async fn saved_value_loads_back() {
        let store = memory_store();
        store.save_json("reminder_enabled", &false).await.unwrap();
        assert_eq!(store.load_json::<bool>("reminder_enabled").await, Some(false));
    }
}
