use satchel_core::responses::{FireResponse, ScheduledListResponse};
use satchel_remind::NotificationDelivery;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_local_datetime;
use crate::context::{AppContext, local_now};
use crate::output::output;

pub async fn sync(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.resync().await?, flags.format)
}

pub async fn scheduled(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let scheduled = ctx.delivery.list_scheduled().await?;
    let total = u32::try_from(scheduled.len()).unwrap_or(u32::MAX);
    output(&ScheduledListResponse { scheduled, total }, flags.format)
}

/// Deliver everything due by `at` (default now) into the delivered log.
pub async fn fire(at: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let now = at.map(parse_local_datetime).transpose()?.unwrap_or_else(local_now);
    let fired = ctx.delivery.fire_due(now).await?;
    tracing::info!(count = fired.len(), %now, "delivered due reminders");
    output(&FireResponse { fired }, flags.format)
}
