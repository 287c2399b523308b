use satchel_core::responses::StartupResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `satchel startup`: what the app does when it opens.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let theme = ctx.store.load_theme().await;
    let sync = ctx.resync().await?;
    let preferences = ctx.preferences().await;
    output(
        &StartupResponse {
            theme,
            preferences,
            sync,
        },
        flags.format,
    )
}
