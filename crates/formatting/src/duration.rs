use std::sync::LazyLock;

use regex::{Captures, Regex};

static ISO_DURATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^P(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)?$")
        .expect("Should be able to parse the ISO-8601 duration regex")
});

/// Turns an ISO-8601 duration such as `PT1H2M3S` into `1:02:03`.
///
/// Minutes and seconds are zero padded once a larger unit is present, days
/// fold into the hour count. Empty or unrecognized input yields an empty
/// string.
pub fn format_duration(duration: &str) -> String {
    let Some(captures) = ISO_DURATION_REGEX.captures(duration.trim()) else {
        return String::new();
    };

    let (Some(days), Some(hours), Some(minutes), Some(seconds)) = (
        component(&captures, 1),
        component(&captures, 2),
        component(&captures, 3),
        component(&captures, 4),
    ) else {
        return String::new();
    };

    let hours = days.saturating_mul(24).saturating_add(hours);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

// A missing group counts as zero; a group too large for u64 rejects the input.
fn component(captures: &Captures<'_>, index: usize) -> Option<u64> {
    match captures.get(index) {
        Some(value) => value.as_str().parse().ok(),
        None => Some(0),
    }
}
