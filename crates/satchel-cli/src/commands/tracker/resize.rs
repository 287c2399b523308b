use satchel_core::enums::Category;

use crate::cli::GlobalFlags;
use crate::context::AppContext;

pub async fn run(
    category: Category,
    id: &str,
    total: u32,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.store.resize_subject(category, id, total).await?;
    super::resync_and_output(category, id, ctx, flags).await
}
