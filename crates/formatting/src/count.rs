const SCALES: [(u64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

/// Abbreviates a count with one decimal: `1500` becomes `1.5K`.
pub fn format_count(count: u64) -> String {
    for (scale, suffix) in SCALES {
        if count >= scale {
            return format!("{:.1}{suffix}", count as f64 / scale as f64);
        }
    }
    count.to_string()
}

/// Same as [`format_count`] for the numeric strings the provider sends.
/// Unparseable input counts as zero.
pub fn format_count_str(count: &str) -> String {
    format_count(count.trim().parse().unwrap_or(0))
}
