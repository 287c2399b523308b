//! # satchel-core
//!
//! Core types, status enums, tallies, and error types for Satchel.
//!
//! This crate provides the foundational types shared across all Satchel crates:
//! - Entity structs for tracked subjects, test records, preferences, and schedule requests
//! - Status and category enums with their storage strings
//! - Subject id generation
//! - Cross-cutting error types
//! - Pure tallies (written-item badge, status summaries, score statistics)
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
pub mod tally;
