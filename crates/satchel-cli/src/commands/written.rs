use satchel_core::enums::Category;
use satchel_core::tally::{count_written_items, tagged};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `satchel written`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let assignments = ctx.store.list_subjects(Category::Assignment).await;
    let experiments = ctx.store.list_subjects(Category::Experiment).await;
    let tally = count_written_items(
        tagged(Category::Assignment, &assignments).chain(tagged(Category::Experiment, &experiments)),
    );
    output(&tally, flags.format)
}
