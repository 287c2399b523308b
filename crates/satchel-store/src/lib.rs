//! # satchel-store
//!
//! Persistence for Satchel state: tracked subjects, test records, theme,
//! reminder preferences, and the reminder ledger.
//!
//! Everything is a JSON blob under a fixed key in a [`kv::KeyValueStore`].
//! [`kv::FileStore`] keeps one file per key on disk; [`kv::MemoryStore`]
//! backs tests. Reads never fail: a missing or malformed blob yields the
//! default value and a warning.

pub mod error;
pub mod keys;
pub mod kv;
pub mod repos;
pub mod service;
pub mod updates;

mod test_support;

pub use error::StoreError;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use service::SatchelStore;
