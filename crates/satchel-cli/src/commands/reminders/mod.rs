mod outbox;
mod preferences;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReminderCommands;
use crate::context::AppContext;

/// Handle `satchel reminders`.
pub async fn handle(
    action: &ReminderCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ReminderCommands::Show => preferences::show(ctx, flags).await,
        ReminderCommands::Set { times, days } => {
            preferences::set(times.as_deref(), days.as_deref(), ctx, flags).await
        }
        ReminderCommands::Enable => preferences::set_enabled(true, ctx, flags).await,
        ReminderCommands::Disable => preferences::set_enabled(false, ctx, flags).await,
        ReminderCommands::Sync => outbox::sync(ctx, flags).await,
        ReminderCommands::Scheduled => outbox::scheduled(ctx, flags).await,
        ReminderCommands::Fire { at } => outbox::fire(at.as_deref(), ctx, flags).await,
    }
}
