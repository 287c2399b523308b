use anyhow::bail;
use satchel_core::enums::Category;
use satchel_store::updates::item::ItemUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::context::AppContext;

pub async fn run(
    category: Category,
    id: &str,
    item: u32,
    name: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let name = name.trim();
    if name.is_empty() {
        bail!("{category} name must not be empty");
    }
    let update = ItemUpdateBuilder::new().name(name).build();
    ctx.store.update_item(category, id, item, update).await?;
    super::resync_and_output(category, id, ctx, flags).await
}
