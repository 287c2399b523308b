use satchel_core::enums::Category;
use satchel_core::tally::StatusSummary;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    category: Category,
    id: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Some(id) = id {
        let subject = ctx.store.get_subject(category, id).await?;
        return output(&StatusSummary::of(&subject), flags.format);
    }
    let summaries = ctx
        .store
        .list_subjects(category)
        .await
        .iter()
        .map(StatusSummary::of)
        .collect::<Vec<_>>();
    output(&summaries, flags.format)
}
