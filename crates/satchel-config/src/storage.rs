//! Where the key-value blobs live.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Platform data directory plus `satchel`, or `.satchel/data` when the
/// platform has none.
fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".satchel").join("data"), |p| p.join("satchel"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding one `{key}.json` file per stored key, plus the
    /// notification outbox.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}
