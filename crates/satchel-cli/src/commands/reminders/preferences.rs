use anyhow::bail;
use satchel_core::entities::{ReminderPreferences, WeekdayMask};
use satchel_core::responses::PreferencesResponse;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_times;
use crate::context::AppContext;
use crate::output::output;

pub async fn show(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.preferences().await, flags.format)
}

pub async fn set(
    times: Option<&[String]>,
    days: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if times.is_none() && days.is_none() {
        bail!("nothing to change: pass --times and/or --days");
    }
    let mut prefs = ctx.preferences().await;
    if let Some(times) = times {
        let mut times = parse_times(times)?;
        times.sort_unstable();
        times.dedup();
        prefs.times = times;
    }
    if let Some(days) = days {
        prefs.active_weekdays = WeekdayMask::parse_list(days)?;
    }
    save_and_resync(prefs, ctx, flags).await
}

pub async fn set_enabled(enabled: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut prefs = ctx.preferences().await;
    prefs.enabled = enabled;
    save_and_resync(prefs, ctx, flags).await
}

async fn save_and_resync(
    preferences: ReminderPreferences,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.store.save_preferences(&preferences).await?;
    let sync = ctx.resync().await?;
    output(&PreferencesResponse { preferences, sync }, flags.format)
}
