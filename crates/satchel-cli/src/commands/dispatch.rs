use satchel_core::enums::Category;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Startup => commands::startup::handle(ctx, flags).await,
        Commands::Assignment { action } => {
            commands::tracker::handle(Category::Assignment, &action, ctx, flags).await
        }
        Commands::Experiment { action } => {
            commands::tracker::handle(Category::Experiment, &action, ctx, flags).await
        }
        Commands::Test { action } => commands::test::handle(&action, ctx, flags).await,
        Commands::Reminders { action } => commands::reminders::handle(&action, ctx, flags).await,
        Commands::Written => commands::written::handle(ctx, flags).await,
        Commands::Theme { action } => commands::theme::handle(&action, ctx, flags).await,
        Commands::Clear(args) => commands::clear::handle(&args, ctx, flags).await,
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
