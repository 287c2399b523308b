use satchel_core::responses::ClearResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ClearArgs;
use crate::commands::shared::confirm::confirm;
use crate::context::AppContext;
use crate::output::output;

/// Handle `satchel clear`.
pub async fn handle(args: &ClearArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let prompt = "Delete all assignments, experiments, test records, and the theme?";
    if !confirm(prompt, args.yes)? {
        return output(&ClearResponse { cleared: Vec::new() }, flags.format);
    }
    let cleared = ctx.store.clear_all().await?;
    // Pending submission reminders belonged to the deleted subjects.
    ctx.resync().await?;
    output(&ClearResponse { cleared }, flags.format)
}
