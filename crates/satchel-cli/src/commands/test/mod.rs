mod get;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TestCommands;
use crate::context::AppContext;

/// Handle `satchel test`.
pub async fn handle(action: &TestCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TestCommands::Add {
            test_type,
            year,
            semester,
        } => add::run(test_type, year, *semester, ctx, flags).await,
        TestCommands::List => list::run(ctx, flags).await,
        TestCommands::Get { id } => get::run(id, ctx, flags).await,
        TestCommands::Delete { id, yes } => delete::run(id, *yes, ctx, flags).await,
        TestCommands::ScoreAdd {
            id,
            name,
            obtained,
            total,
        } => score::add(id, name, *obtained, *total, ctx, flags).await,
        TestCommands::ScoreDelete { id, score_id } => score::delete(id, score_id, ctx, flags).await,
        TestCommands::Stats { id } => stats::run(id, ctx, flags).await,
    }
}
