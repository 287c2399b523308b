mod reminders;
mod test;
mod theme;
mod tracker;

pub use reminders::ReminderCommands;
pub use test::TestCommands;
pub use theme::ThemeCommands;
pub use tracker::TrackerCommands;
