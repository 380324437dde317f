//! Wall-clock parsing and window containment helpers.

use chrono::{NaiveDate, NaiveTime};

/// Parse an `HH:MM` wall-clock string. Returns `None` on malformed input.
pub(crate) fn parse_hhmm(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()
}

/// Parse a `YYYY-MM-DD` calendar date. Returns `None` on malformed input.
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Whether `t` falls in the half-open window `[start, end)`.
///
/// When `start > end` the window crosses midnight and covers
/// `[start, 24:00)` plus `[00:00, end)`. When `start == end` the window is
/// empty and never matches.
pub(crate) fn window_contains(start: NaiveTime, end: NaiveTime, t: NaiveTime) -> bool {
    use std::cmp::Ordering;
    match start.cmp(&end) {
        Ordering::Less => t >= start && t < end,
        Ordering::Greater => t >= start || t < end,
        Ordering::Equal => false,
    }
}

// ── Tests ───────────────────────────────────────────────────────────
