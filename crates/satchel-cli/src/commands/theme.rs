use satchel_core::enums::ThemeMode;
use satchel_core::responses::ThemeResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ThemeCommands;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `satchel theme`.
pub async fn handle(action: &ThemeCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let theme = match action {
        ThemeCommands::Get => ctx.store.load_theme().await,
        ThemeCommands::Set { mode } => {
            let theme = parse_enum::<ThemeMode>(mode, "theme")?;
            ctx.store.save_theme(theme).await?;
            ctx.resync().await?;
            theme
        }
        ThemeCommands::Toggle => {
            let theme = match ctx.store.load_theme().await {
                ThemeMode::Light => ThemeMode::Dark,
                ThemeMode::Dark => ThemeMode::Light,
            };
            ctx.store.save_theme(theme).await?;
            ctx.resync().await?;
            theme
        }
    };
    output(&ThemeResponse { theme }, flags.format)
}
