//! Schedule evaluation: decides whether an instant falls inside a rule's
//! configured window.
//!
//! The instant is converted into the rule owner's timezone before any
//! comparison; the event's origin timezone is never consulted. Malformed
//! settings (unparsable bounds, unknown timezones) degrade to "not active"
//! or to UTC rather than raising, so one bad rule cannot abort evaluation
//! of the rest.

mod clock;
mod timezone;


use chrono::{DateTime, Datelike, NaiveTime, Utc};
use tracing::debug;

use autoreply_core::{BusinessHourPeriod, Weekday};

use crate::schema::{MonthlyWindow, ScheduleSpec, TimeWindow};

use clock::{parse_date, parse_hhmm, window_contains};
use timezone::resolve_timezone;

/// Whether `spec` is active at `at`, evaluated in `timezone`.
///
/// `business_hours` scopes the `BusinessHour` / `NonBusinessHour` variants;
/// the other variants ignore it.
pub fn is_active(
    spec: &ScheduleSpec,
    at: DateTime<Utc>,
    timezone: &str,
    business_hours: &[BusinessHourPeriod],
) -> bool {
    let local = at.with_timezone(&resolve_timezone(timezone));
    let time = local.time();

    match spec {
        ScheduleSpec::Daily { windows } => {
            windows.iter().any(|w| daily_window_contains(w, time))
        }
        ScheduleSpec::Monthly { windows } => windows
            .iter()
            .any(|w| monthly_window_contains(w, local.day(), time)),
        ScheduleSpec::BusinessHour => {
            in_business_hours(business_hours, local.weekday().into(), time)
        }
        ScheduleSpec::NonBusinessHour => {
            !in_business_hours(business_hours, local.weekday().into(), time)
        }
        ScheduleSpec::DateRange { start, end } => {
            match (parse_date(start), parse_date(end)) {
                (Some(s), Some(e)) => {
                    let date = local.date_naive();
                    s <= date && date <= e
                }
                _ => {
                    debug!(start = %start, end = %end, "unparsable date range, treating as inactive");
                    false
                }
            }
        }
    }
}

/// One daily window; `start > end` spans midnight.
fn daily_window_contains(window: &TimeWindow, time: NaiveTime) -> bool {
    match (parse_hhmm(&window.start), parse_hhmm(&window.end)) {
        (Some(start), Some(end)) => window_contains(start, end, time),
        _ => {
            debug!(start = %window.start, end = %window.end, "unparsable daily window, treating as inactive");
            false
        }
    }
}

/// One monthly window. The day of month must match first; the window is a
/// plain `[start, end)` and never spans into the next day.
fn monthly_window_contains(window: &MonthlyWindow, day: u32, time: NaiveTime) -> bool {
    if window.day != day {
        return false;
    }
    match (parse_hhmm(&window.start), parse_hhmm(&window.end)) {
        (Some(start), Some(end)) => time >= start && time < end,
        _ => {
            debug!(start = %window.start, end = %window.end, "unparsable monthly window, treating as inactive");
            false
        }
    }
}

/// Whether any configured period for `weekday` contains `time`.
fn in_business_hours(periods: &[BusinessHourPeriod], weekday: Weekday, time: NaiveTime) -> bool {
    periods.iter().any(|period| {
        period.weekday == weekday
            && match (parse_hhmm(&period.start), parse_hhmm(&period.end)) {
                (Some(start), Some(end)) => window_contains(start, end, time),
                _ => false,
            }
    })
}
