//! Entity structs for all Satchel domain objects.
//!
//! Each entity maps to a JSON blob (or part of one) in the key-value store.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so persisted
//! data can be round-tripped and validated.

mod ledger;
mod preferences;
mod schedule;
mod subject;
mod test_record;

pub use ledger::{ReminderLedger, SubmissionHandles};
pub use preferences::{DayOfWeek, ReminderPreferences, TimeOfDay, WeekdayMask};
pub use schedule::{NotificationHandle, ScheduleRequest, ScheduledNotification, Trigger};
pub use subject::{SubmissionDate, TrackedItem, TrackedSubject};
pub use test_record::{SubjectScore, TestRecord};
