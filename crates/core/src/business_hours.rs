//! Organization business-hour configuration.
//!
//! Periods are owned and lifecycle-managed by the organization configuration
//! service; the engine receives them as an immutable snapshot per call and
//! evaluates `business_hour` / `non_business_hour` schedules against them.

use serde::{Deserialize, Serialize};

/// Day of week for business-hour periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

/// One weekday's operating window, as `HH:MM` wall-clock bounds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BusinessHourPeriod {
    pub weekday: Weekday,
    pub start: String,
    pub end: String,
}

impl BusinessHourPeriod {
    pub fn new(weekday: Weekday, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            weekday,
            start: start.into(),
            end: end.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_from_chrono() {
        assert_eq!(Weekday::from(chrono::Weekday::Mon), Weekday::Monday);
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
    }

    #[test]
    fn period_round_trips_as_json() {
        let period = BusinessHourPeriod::new(Weekday::Friday, "09:00", "18:00");
        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"weekday\":\"friday\""));
        let parsed: BusinessHourPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, period);
    }
}
