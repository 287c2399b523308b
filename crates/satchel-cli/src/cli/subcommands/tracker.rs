use clap::Subcommand;

/// Commands shared by `assignment` and `experiment`.
#[derive(Clone, Debug, Subcommand)]
pub enum TrackerCommands {
    /// Add a subject with a fixed number of items.
    Add {
        name: String,
        /// Number of items to track.
        #[arg(short = 'n', long)]
        count: u32,
        #[arg(long)]
        course_code: Option<String>,
    },
    /// List subjects.
    List,
    /// Get a subject by ID.
    Get { id: String },
    /// Set an item's status (not-given, not-completed, written, completed).
    Status {
        id: String,
        item: u32,
        status: String,
    },
    /// Set or clear an item's submission date.
    Due {
        id: String,
        item: u32,
        /// YYYY-MM-DD or "YYYY-MM-DD HH:MM".
        #[arg(required_unless_present = "clear")]
        date: Option<String>,
        /// Remove the submission date.
        #[arg(long, conflicts_with = "date")]
        clear: bool,
    },
    /// Rename an item.
    Rename { id: String, item: u32, name: String },
    /// Change how many items a subject tracks.
    Resize { id: String, total: u32 },
    /// Delete a subject.
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Per-status breakdown of one subject, or of all of them.
    Summary { id: Option<String> },
}
