use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Renders an RFC 3339 timestamp relative to `now`, e.g. `3 days ago`.
///
/// Picks the largest whole unit (years of 365 days, months of 30 days).
/// Anything under a minute, including timestamps in the future, is
/// `Just now`. Unparseable input yields an empty string.
pub fn format_time_ago(timestamp: &str, now: DateTime<Utc>) -> String {
    let Ok(then) = DateTime::parse_from_rfc3339(timestamp.trim()) else {
        return String::new();
    };
    let elapsed = (now - then.with_timezone(&Utc)).num_seconds();

    let units = [
        (YEAR, "year"),
        (MONTH, "month"),
        (DAY, "day"),
        (HOUR, "hour"),
        (MINUTE, "minute"),
    ];
    for (size, unit) in units {
        let count = elapsed / size;
        if count > 0 {
            return if count == 1 {
                format!("1 {unit} ago")
            } else {
                format!("{count} {unit}s ago")
            };
        }
    }
    "Just now".to_string()
}

pub fn format_time_ago_now(timestamp: &str) -> String {
    format_time_ago(timestamp, Utc::now())
}
