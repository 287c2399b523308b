//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use satchel_config::SatchelConfig;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[storage]
data_dir = "/tmp/satchel-data"

[notify]
app_title = "Homework"
permission_granted = false

[reminders]
default_times = ["07:30", "19:00"]

[general]
default_format = "table"
"#,
        )?;

        let config: SatchelConfig = Figment::from(Serialized::defaults(SatchelConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.storage.data_dir.to_str(), Some("/tmp/satchel-data"));
        assert_eq!(config.notify.app_title, "Homework");
        assert_eq!(config.notify.channel_id, "assapp-default");
        assert!(!config.notify.permission_granted);
        assert_eq!(config.reminders.seed_times().unwrap().len(), 2);
        assert_eq!(config.general.default_format, "table");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".satchel")?;
        jail.create_file(
            ".satchel/config.toml",
            r#"
[notify]
channel_id = "coursework"
"#,
        )?;

        let config = SatchelConfig::load().expect("config loads");
        assert_eq!(config.notify.channel_id, "coursework");
        Ok(())
    });
}

#[test]
fn invalid_seed_time_fails_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".satchel")?;
        jail.create_file(
            ".satchel/config.toml",
            r#"
[reminders]
default_times = ["8pm"]
"#,
        )?;

        assert!(SatchelConfig::load().is_err());
        Ok(())
    });
}
