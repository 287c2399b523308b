use satchel_core::entities::SubmissionDate;
use satchel_core::enums::Category;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_submission_date;
use crate::context::AppContext;

/// Set the item's submission date, or clear it with `None`.
pub async fn run(
    category: Category,
    id: &str,
    item: u32,
    date: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let date = date
        .map(parse_submission_date)
        .transpose()?
        .map(|date| match category {
            // Assignments are due on a day; only experiments keep a time.
            Category::Assignment => SubmissionDate::Date(date.day()),
            Category::Experiment => date,
        });
    ctx.store.set_submission_date(category, id, item, date).await?;
    super::resync_and_output(category, id, ctx, flags).await
}
