use chrono::Utc;
use satchel_core::enums::Category;

use crate::cli::GlobalFlags;
use crate::context::AppContext;

pub async fn run(
    category: Category,
    name: &str,
    count: u32,
    course_code: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let subject = ctx
        .store
        .add_subject(category, name, course_code, count, Utc::now())
        .await?;
    super::resync_and_output(category, &subject.id, ctx, flags).await
}
