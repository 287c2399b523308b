use anyhow::bail;
use dialoguer::Confirm;

use crate::ui;

/// Ask before a destructive action. `--yes` skips the prompt; without a
/// terminal to ask on, the action is refused.
pub fn confirm(prompt: &str, assume_yes: bool) -> anyhow::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    if !ui::prefs().interactive {
        bail!("{prompt} (stdin is not a terminal; pass --yes to confirm)");
    }
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}
