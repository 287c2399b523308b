use satchel_core::enums::{Category, ItemStatus};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;

pub async fn run(
    category: Category,
    id: &str,
    item: u32,
    status: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = parse_enum::<ItemStatus>(status, "status")?;
    ctx.store.set_item_status(category, id, item, status).await?;
    super::resync_and_output(category, id, ctx, flags).await
}
