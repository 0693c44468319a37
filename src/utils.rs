//! Utility functions for timestamp formatting and log-friendly strings.
//!
//! - Log file naming from the run start time
//! - Start/end marker timestamps
//! - String truncation for diagnostics

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Build the log file name for a run that started at `start`.
///
/// # Examples
///
/// ```ignore
/// // 2024-05-06 14:30:05 local time
/// assert_eq!(log_file_name(&start), "cbsnews_log_2024-05-06_14-30-05.txt");
/// ```
pub fn log_file_name<Tz>(start: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("cbsnews_log_{}.txt", start.format("%Y-%m-%d_%H-%M-%S"))
}

/// Format a timestamp for the `Log started at` / `Log ended at` markers,
/// e.g. `2024-05-06 14:30:05.123456`.
pub fn marker_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (backing off to a character
/// boundary) with an ellipsis and byte count indicator appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log("a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn sample_time() -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2024, 5, 6)
            .unwrap()
            .and_hms_micro_opt(14, 30, 5, 123_456)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn test_log_file_name() {
        assert_eq!(
            log_file_name(&sample_time()),
            "cbsnews_log_2024-05-06_14-30-05.txt"
        );
    }

    #[test]
    fn test_marker_timestamp() {
        assert_eq!(marker_timestamp(&sample_time()), "2024-05-06 14:30:05.123456");
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        let s = "Hello, world!";
        assert_eq!(truncate_for_log(s, 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte_boundary() {
        // 'é' is two bytes; a cut at byte 3 would split the second one.
        let result = truncate_for_log("éééé", 3);
        assert_eq!(result, "é…(+6 bytes)");
    }
}
