use clap::Subcommand;

/// Theme preference commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ThemeCommands {
    /// Show the stored theme.
    Get,
    /// Store a theme (light, dark).
    Set { mode: String },
    /// Switch between light and dark.
    Toggle,
}
