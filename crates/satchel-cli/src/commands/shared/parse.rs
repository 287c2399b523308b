use chrono::NaiveDateTime;
use satchel_core::entities::{SubmissionDate, TimeOfDay};
use serde::de::DeserializeOwned;

/// Parse an enum value using serde-deserialization; `-` stands in for `_`.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

pub fn parse_times(raw: &[String]) -> anyhow::Result<Vec<TimeOfDay>> {
    raw.iter()
        .map(|value| value.parse::<TimeOfDay>().map_err(anyhow::Error::from))
        .collect()
}

pub fn parse_submission_date(raw: &str) -> anyhow::Result<SubmissionDate> {
    raw.parse::<SubmissionDate>().map_err(anyhow::Error::msg)
}

/// `YYYY-MM-DD HH:MM` or `YYYY-MM-DDTHH:MM`, local time.
pub fn parse_local_datetime(raw: &str) -> anyhow::Result<NaiveDateTime> {
    ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw.trim(), format).ok())
        .ok_or_else(|| anyhow::anyhow!("invalid date-time '{raw}' (expected YYYY-MM-DD HH:MM)"))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use satchel_core::enums::{AcademicYear, ItemStatus, TestType, ThemeMode};

    use super::*;

    #[test]
    fn parses_hyphenated_status() {
        let status: ItemStatus = parse_enum("not-completed", "status").expect("status should parse");
        assert_eq!(status, ItemStatus::NotCompleted);
    }

    #[test]
    fn parses_test_classifiers_in_either_case() {
        assert_eq!(parse_enum::<TestType>("ut1", "test type").expect("parse"), TestType::Ut1);
        assert_eq!(parse_enum::<TestType>("Finals", "test type").expect("parse"), TestType::Finals);
        assert_eq!(parse_enum::<AcademicYear>("te", "year").expect("parse"), AcademicYear::Te);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<ThemeMode>("sepia", "theme").expect_err("should fail");
        assert!(err.to_string().contains("invalid theme 'sepia'"));
    }

    #[test]
    fn parses_time_lists() {
        let times = parse_times(&["8:30".into(), "20:00".into()]).expect("times should parse");
        assert_eq!(times[0].to_string(), "08:30");
        assert!(parse_times(&["25:00".into()]).is_err());
    }

    #[test]
    fn parses_fire_instant() {
        let at = parse_local_datetime("2026-10-20 09:00").expect("should parse");
        assert_eq!(
            at,
            NaiveDate::from_ymd_opt(2026, 10, 20)
                .and_then(|d| d.and_hms_opt(9, 0, 0))
                .expect("valid")
        );
        assert!(parse_local_datetime("tomorrow").is_err());
    }
}
