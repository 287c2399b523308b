use anyhow::Context;
use clap::ValueEnum;
use satchel_config::SatchelConfig;

use crate::cli::{Cli, OutputFormat};

/// Load `.env`, then the layered config, then apply `--data-dir`.
pub fn load_config(cli: &Cli) -> anyhow::Result<SatchelConfig> {
    let mut config = SatchelConfig::load_with_dotenv().context("failed to load configuration")?;
    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir.clone_from(dir);
    }
    Ok(config)
}

/// `general.default_format`, or JSON when it names no known format.
pub fn default_format(config: &SatchelConfig) -> OutputFormat {
    OutputFormat::from_str(&config.general.default_format, true).unwrap_or_else(|_| {
        tracing::warn!(
            value = %config.general.default_format,
            "unknown general.default_format, using json"
        );
        OutputFormat::Json
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_format_is_case_insensitive() {
        let mut config = SatchelConfig::default();
        config.general.default_format = "Table".into();
        assert_eq!(default_format(&config), OutputFormat::Table);
        config.general.default_format = "yaml".into();
        assert_eq!(default_format(&config), OutputFormat::Json);
    }
}
