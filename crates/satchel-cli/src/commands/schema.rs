use anyhow::bail;
use schemars::{JsonSchema, schema_for};
use satchel_core::entities::{
    ReminderLedger, ReminderPreferences, ScheduledNotification, TestRecord, TrackedItem,
    TrackedSubject,
};
use satchel_core::responses::SyncReport;
use satchel_core::tally::{StatusSummary, TestStats, WrittenTally};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `satchel schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_named(&args.type_name)?;
    output(&schema, flags.format)
}

fn schema_named(name: &str) -> anyhow::Result<serde_json::Value> {
    match name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
        "subject" => to_value::<TrackedSubject>(),
        "item" => to_value::<TrackedItem>(),
        "test-record" => to_value::<TestRecord>(),
        "preferences" => to_value::<ReminderPreferences>(),
        "ledger" => to_value::<ReminderLedger>(),
        "scheduled" => to_value::<ScheduledNotification>(),
        "sync-report" => to_value::<SyncReport>(),
        "written" => to_value::<WrittenTally>(),
        "summary" => to_value::<StatusSummary>(),
        "stats" => to_value::<TestStats>(),
        other => bail!(
            "unknown schema type '{other}' (expected subject, item, test-record, preferences, \
             ledger, scheduled, sync-report, written, summary, stats)"
        ),
    }
}

fn to_value<T: JsonSchema>() -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(schema_for!(T))?)
}

#[cfg(test)]
mod tests {
    use super::schema_named;

    #[test]
    fn subject_schema_names_camel_case_fields() {
        let schema = schema_named("subject").expect("known type");
        let properties = &schema["properties"];
        assert!(properties.get("subjectName").is_some());
        assert!(properties.get("items").is_some());
    }

    #[test]
    fn accepts_underscored_names() {
        assert!(schema_named("test_record").is_ok());
        assert!(schema_named("Sync-Report").is_ok());
    }

    #[test]
    fn unknown_type_is_an_error() {
        let err = schema_named("finding").expect_err("unknown type");
        assert!(err.to_string().contains("unknown schema type 'finding'"));
    }
}
