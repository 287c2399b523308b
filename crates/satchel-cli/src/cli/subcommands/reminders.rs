use clap::Subcommand;

/// Reminder preference and delivery commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReminderCommands {
    /// Show digest reminder preferences.
    Show,
    /// Replace digest times and/or active weekdays.
    Set {
        /// Comma-separated HH:MM times.
        #[arg(long, value_delimiter = ',')]
        times: Option<Vec<String>>,
        /// Comma-separated weekdays ("mon,wed") or "all".
        #[arg(long)]
        days: Option<String>,
    },
    /// Turn the digest reminder on.
    Enable,
    /// Turn the digest reminder off.
    Disable,
    /// Re-sync all scheduled reminders now.
    Sync,
    /// List notifications currently scheduled.
    Scheduled,
    /// Deliver every notification due by now (or by --at).
    Fire {
        /// YYYY-MM-DD HH:MM local time.
        #[arg(long)]
        at: Option<String>,
    },
}
