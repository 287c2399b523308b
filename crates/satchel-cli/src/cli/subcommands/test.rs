use clap::Subcommand;

/// Test record commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TestCommands {
    /// Add a test record (UT1, UT2, Finals).
    Add {
        test_type: String,
        /// FE, SE, TE, BE.
        year: String,
        semester: u8,
    },
    /// List test records.
    List,
    /// Get a test record by ID.
    Get { id: String },
    /// Delete a test record.
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Add a subject score to a record.
    ScoreAdd {
        id: String,
        name: String,
        obtained: f64,
        total: f64,
    },
    /// Remove a subject score from a record.
    ScoreDelete { id: String, score_id: String },
    /// Totals, percentage, and grade band for a record.
    Stats { id: String },
}
