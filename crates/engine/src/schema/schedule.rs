//! Schedule specification: a closed set of time-window kinds.

use serde::{Deserialize, Serialize};

/// When a time-based rule (or a date-limited keyword rule) is active.
///
/// Exactly one variant per rule. All bounds are interpreted in the rule
/// owner's configured timezone, never the event's origin timezone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleSpec {
    /// Active during one or more wall-clock windows each day.
    /// A window whose `start` is later than its `end` spans midnight.
    Daily { windows: Vec<TimeWindow> },
    /// Active on specific days of the month during a wall-clock window.
    Monthly { windows: Vec<MonthlyWindow> },
    /// Active during the organization's configured business hours.
    BusinessHour,
    /// Active outside the organization's configured business hours.
    NonBusinessHour,
    /// Restricts a keyword rule to an inclusive calendar date range
    /// (`YYYY-MM-DD` bounds).
    DateRange { start: String, end: String },
}

/// A wall-clock window with `HH:MM` bounds, half-open: `[start, end)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TimeWindow {
    pub start: String,
    pub end: String,
}

impl TimeWindow {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// A day-of-month plus wall-clock window. The day must match before the
/// window is consulted; monthly windows never span midnight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MonthlyWindow {
    pub day: u32,
    pub start: String,
    pub end: String,
}

impl MonthlyWindow {
    pub fn new(day: u32, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            day,
            start: start.into(),
            end: end.into(),
        }
    }
}
