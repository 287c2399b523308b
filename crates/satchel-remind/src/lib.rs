//! # satchel-remind
//!
//! Reminder planning and delivery for Satchel.
//!
//! - [`planner`]: turns subjects and preferences into schedule requests
//! - [`delivery::NotificationDelivery`]: the seam to whatever presents alerts
//! - [`memory::MemoryDelivery`] and [`outbox::OutboxDelivery`]: in-process and
//!   file-backed implementations
//! - [`sync::ReminderSync`]: the cancel-then-reschedule pass

pub mod delivery;
pub mod error;
pub mod memory;
pub mod outbox;
pub mod planner;
pub mod sync;

pub use delivery::NotificationDelivery;
pub use error::RemindError;
pub use memory::MemoryDelivery;
pub use outbox::OutboxDelivery;
pub use planner::ReminderPlanner;
pub use sync::ReminderSync;
