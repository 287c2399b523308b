//! Reminder error types.

use satchel_core::entities::NotificationHandle;
use satchel_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemindError {
    /// The delivery backend refused to schedule a request.
    #[error("Failed to schedule '{title}': {reason}")]
    Schedule { title: String, reason: String },

    /// The handle is not (or no longer) scheduled.
    #[error("No scheduled notification with handle {0}")]
    UnknownHandle(NotificationHandle),

    /// Outbox file I/O failed.
    #[error("Outbox I/O failed at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Outbox state could not be encoded or decoded.
    #[error("Outbox state is invalid: {0}")]
    Codec(#[from] serde_json::Error),

    /// Persisting the ledger or item handles failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RemindError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
