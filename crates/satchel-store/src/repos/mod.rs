//! Repository modules implementing operations on stored entities.
//!
//! Each module adds methods to `SatchelStore` via `impl SatchelStore` blocks.

pub mod preferences;
pub mod settings;
pub mod subjects;
pub mod test_records;
