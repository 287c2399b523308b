//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields are applied; `Some(None)` clears an optional field.

pub mod item;
