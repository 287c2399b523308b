use satchel_core::enums::Category;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    category: Category,
    id: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let subject = ctx.store.get_subject(category, id).await?;
    output(&subject, flags.format)
}
