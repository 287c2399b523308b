//! Storage keys. Each key holds one JSON blob.

use satchel_core::enums::Category;

pub const ASSIGNMENTS: &str = "assignments";
pub const EXPERIMENTS: &str = "experiments";
pub const TEST_SCORES: &str = "test_scores";
pub const THEME: &str = "app_theme";
pub const REMINDER_ENABLED: &str = "reminder_enabled";
pub const REMINDER_TIMES: &str = "reminder_times";
pub const REMINDER_WEEKDAYS: &str = "reminder_weekdays";
pub const REMINDER_LEDGER: &str = "reminder_ledger";

/// Keys wiped by "clear all app data". Reminder preferences survive.
pub const CLEARABLE: [&str; 4] = [ASSIGNMENTS, EXPERIMENTS, TEST_SCORES, THEME];

/// Key of the subject list for a category.
#[must_use]
pub const fn subjects(category: Category) -> &'static str {
    match category {
        Category::Assignment => ASSIGNMENTS,
        Category::Experiment => EXPERIMENTS,
    }
}
