use satchel_core::enums::Category;
use satchel_core::responses::DeleteResponse;

use crate::cli::GlobalFlags;
use crate::commands::shared::confirm::confirm;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    category: Category,
    id: &str,
    yes: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let subject = ctx.store.get_subject(category, id).await?;
    let prompt = format!(
        "Delete {} and its {} {category}s?",
        subject.subject_name,
        subject.items.len()
    );
    let deleted = if confirm(&prompt, yes)? {
        ctx.store.delete_subject(category, id).await?;
        ctx.resync().await?;
        true
    } else {
        false
    };
    output(
        &DeleteResponse {
            id: id.to_string(),
            deleted,
        },
        flags.format,
    )
}
