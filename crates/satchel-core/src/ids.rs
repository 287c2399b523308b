//! Subject and record id generation.
//!
//! Ids are millisecond timestamps rendered as decimal strings. They sort in
//! creation order and stay unique within one list: a collision with an
//! existing id bumps the value until it is free.

use chrono::{DateTime, Utc};

/// Generate a fresh id that does not collide with any of `existing`.
#[must_use]
pub fn generate_id<'a, I>(now: DateTime<Utc>, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: Vec<&str> = existing.into_iter().collect();
    let mut candidate = now.timestamp_millis();
    loop {
        let id = candidate.to_string();
        if !taken.contains(&id.as_str()) {
            return id;
        }
        candidate += 1;
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn id_is_millisecond_timestamp() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(generate_id(now, []), "1700000000123");
    }

    #[test]
    fn collision_bumps_to_next_free_value() {
        let now = Utc.timestamp_millis_opt(1_000).unwrap();
        let id = generate_id(now, ["1000", "1001"]);
        assert_eq!(id, "1002");
    }
}
