mod add;
mod delete;
mod due;
mod get;
mod list;
mod rename;
mod resize;
mod status;
mod summary;

use satchel_core::enums::Category;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TrackerCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `satchel assignment` and `satchel experiment`.
pub async fn handle(
    category: Category,
    action: &TrackerCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TrackerCommands::Add {
            name,
            count,
            course_code,
        } => add::run(category, name, *count, course_code.as_deref(), ctx, flags).await,
        TrackerCommands::List => list::run(category, ctx, flags).await,
        TrackerCommands::Get { id } => get::run(category, id, ctx, flags).await,
        TrackerCommands::Status { id, item, status } => {
            status::run(category, id, *item, status, ctx, flags).await
        }
        TrackerCommands::Due {
            id,
            item,
            date,
            clear,
        } => {
            let date = if *clear { None } else { date.as_deref() };
            due::run(category, id, *item, date, ctx, flags).await
        }
        TrackerCommands::Rename { id, item, name } => {
            rename::run(category, id, *item, name, ctx, flags).await
        }
        TrackerCommands::Resize { id, total } => resize::run(category, id, *total, ctx, flags).await,
        TrackerCommands::Delete { id, yes } => delete::run(category, id, *yes, ctx, flags).await,
        TrackerCommands::Summary { id } => summary::run(category, id.as_deref(), ctx, flags).await,
    }
}

/// Re-sync reminders after a subject changed, then print the subject as
/// stored afterwards (with its fresh reminder handles).
async fn resync_and_output(
    category: Category,
    subject_id: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let sync = ctx.resync().await?;
    let subject = ctx.store.get_subject(category, subject_id).await?;
    output(&json!({ "subject": subject, "sync": sync }), flags.format)
}
