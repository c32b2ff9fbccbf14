#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::DateTime;

/// Format a notice date range as `"05 Mar - 20 Mar 2024"`.
///
/// The start date omits the year; the end date carries it. Timestamps are
/// unix milliseconds; out-of-range values format as an empty component.
pub fn format_range(start_ms: i64, end_ms: i64) -> String {
    format!("{} - {}", format_ms(start_ms, "%d %b"), format_ms(end_ms, "%d %b %Y"))
}

fn format_ms(ms: i64, pattern: &str) -> String {
    DateTime::from_timestamp_millis(ms)
        .map_or_else(String::new, |dt| dt.format(pattern).to_string())
}
