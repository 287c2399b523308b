use satchel_core::enums::Category;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(category: Category, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let subjects = ctx.store.list_subjects(category).await;
    output(&subjects, flags.format)
}
