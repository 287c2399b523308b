use clap::{Args, Subcommand};

use crate::cli::subcommands::{ReminderCommands, TestCommands, ThemeCommands, TrackerCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Load the theme and preferences, then re-sync reminders.
    Startup,
    /// Assignment tracking.
    Assignment {
        #[command(subcommand)]
        action: TrackerCommands,
    },
    /// Experiment tracking.
    Experiment {
        #[command(subcommand)]
        action: TrackerCommands,
    },
    /// Test score records.
    Test {
        #[command(subcommand)]
        action: TestCommands,
    },
    /// Reminder preferences and scheduled notifications.
    Reminders {
        #[command(subcommand)]
        action: ReminderCommands,
    },
    /// Count written items awaiting review.
    Written,
    /// Light/dark theme preference.
    Theme {
        #[command(subcommand)]
        action: ThemeCommands,
    },
    /// Delete all tracked subjects, test records, and the theme.
    Clear(ClearArgs),
    /// Print the JSON Schema of a stored or returned type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt.
    #[arg(long)]
    pub yes: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// subject, item, test-record, preferences, ledger, scheduled,
    /// sync-report, written, summary, stats
    pub type_name: String,
}
