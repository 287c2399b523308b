pub mod clear;
pub mod dispatch;
pub mod reminders;
pub mod schema;
pub mod shared;
pub mod startup;
pub mod test;
pub mod theme;
pub mod tracker;
pub mod written;
