//! Timezone resolution with UTC fallback.

use chrono_tz::Tz;
use tracing::warn;

/// Resolve an IANA timezone identifier, falling back to UTC when the
/// identifier is empty or unknown. One misconfigured timezone must not
/// abort evaluation of the rest of the rule set.
pub(crate) fn resolve_timezone(id: &str) -> Tz {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Tz::UTC;
    }
    match trimmed.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            warn!(timezone = %trimmed, "unknown timezone identifier, falling back to UTC");
            Tz::UTC
        }
    }
}
