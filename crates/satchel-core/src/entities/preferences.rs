use chrono::Weekday;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// A wall-clock time of day at minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `hour > 23` or `minute > 59`.
    pub fn new(hour: u8, minute: u8) -> Result<Self, CoreError> {
        let time = Self { hour, minute };
        if time.is_valid() {
            Ok(time)
        } else {
            Err(CoreError::Validation(format!(
                "time {hour}:{minute:02} is out of range (hour 0-23, minute 0-59)"
            )))
        }
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.hour <= 23 && self.minute <= 59
    }
}

impl FromStr for TimeOfDay {
    type Err = CoreError;

    /// Parses `HH:MM` (24-hour).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::Validation(format!("invalid time '{s}' (expected HH:MM)"));
        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour = hour.parse::<u8>().map_err(|_| invalid())?;
        let minute = minute.parse::<u8>().map_err(|_| invalid())?;
        Self::new(hour, minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Day of the week, Sunday first.
///
/// Notification APIs disagree on weekday numbering, so triggers carry this
/// enum and each delivery backend translates explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// 0 for Sunday through 6 for Saturday; the index into `WeekdayMask`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    /// 1 for Sunday through 7 for Saturday, the numbering used by iOS/Expo
    /// calendar triggers.
    #[must_use]
    pub const fn sunday_based_number(self) -> u8 {
        self.index() as u8 + 1
    }

    #[must_use]
    pub const fn to_chrono(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
            Self::Tuesday => Weekday::Tue,
            Self::Wednesday => Weekday::Wed,
            Self::Thursday => Weekday::Thu,
            Self::Friday => Weekday::Fri,
            Self::Saturday => Weekday::Sat,
        }
    }

    #[must_use]
    pub const fn from_chrono(day: Weekday) -> Self {
        match day {
            Weekday::Sun => Self::Sunday,
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        };
        f.write_str(name)
    }
}

/// Seven activation flags, Sunday through Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct WeekdayMask(pub [bool; 7]);

impl WeekdayMask {
    #[must_use]
    pub const fn all() -> Self {
        Self([true; 7])
    }

    #[must_use]
    pub const fn none() -> Self {
        Self([false; 7])
    }

    #[must_use]
    pub fn is_all_active(&self) -> bool {
        self.0.iter().all(|active| *active)
    }

    #[must_use]
    pub const fn is_active(&self, day: DayOfWeek) -> bool {
        self.0[day.index()]
    }

    pub const fn set(&mut self, day: DayOfWeek, active: bool) {
        self.0[day.index()] = active;
    }

    /// Active days in Sunday-first order.
    #[must_use]
    pub fn active_days(&self) -> Vec<DayOfWeek> {
        DayOfWeek::ALL
            .into_iter()
            .filter(|day| self.is_active(*day))
            .collect()
    }

    /// Build from a comma-separated list of day names or 3-letter
    /// abbreviations (`"mon,wed,fri"`). `"all"` activates every day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` on an unknown day name.
    pub fn parse_list(s: &str) -> Result<Self, CoreError> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::all());
        }
        let mut mask = Self::none();
        for raw in s.split(',').map(str::trim).filter(|part| !part.is_empty()) {
            let day = raw
                .parse::<Weekday>()
                .map_err(|_| CoreError::Validation(format!("unknown weekday '{raw}'")))?;
            mask.set(DayOfWeek::from_chrono(day), true);
        }
        Ok(mask)
    }
}

impl Default for WeekdayMask {
    fn default() -> Self {
        Self::all()
    }
}

/// User preferences for the recurring digest reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPreferences {
    pub enabled: bool,
    pub times: Vec<TimeOfDay>,
    pub active_weekdays: WeekdayMask,
}

impl Default for ReminderPreferences {
    fn default() -> Self {
        Self {
            enabled: true,
            times: vec![TimeOfDay { hour: 20, minute: 0 }],
            active_weekdays: WeekdayMask::all(),
        }
    }
}
