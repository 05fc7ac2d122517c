//! Show timestamp formatting and parsing
//!
//! Show start times are naive timestamps (no timezone handling). Pages
//! display them in a fixed `MM/DD/YYYY, HH:MM:SS` format; form submissions
//! arrive in the HTML `datetime-local` format (with or without seconds,
//! `T` or space separator).

use crate::{Error, Result};
use chrono::NaiveDateTime;

/// Format a show start time for display: `MM/DD/YYYY, HH:MM:SS`
pub fn format_show_time(t: NaiveDateTime) -> String {
    t.format("%m/%d/%Y, %H:%M:%S").to_string()
}

/// Parse a show start time from a form submission
///
/// Accepted shapes, tried in order:
/// - `YYYY-MM-DDTHH:MM:SS` / `YYYY-MM-DDTHH:MM` (datetime-local)
/// - `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DD HH:MM`
pub fn parse_show_time(input: &str) -> Result<NaiveDateTime> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];

    let trimmed = input.trim();
    for fmt in FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(t);
        }
    }

    Err(Error::InvalidInput(format!(
        "Unrecognized start time: {trimmed}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn formats_fixed_display_shape() {
        assert_eq!(
            format_show_time(dt(2026, 3, 4, 19, 30, 0)),
            "03/04/2026, 19:30:00"
        );
        assert_eq!(
            format_show_time(dt(2025, 12, 31, 23, 59, 59)),
            "12/31/2025, 23:59:59"
        );
    }

    #[test]
    fn parses_datetime_local_without_seconds() {
        assert_eq!(
            parse_show_time("2026-03-04T19:30").unwrap(),
            dt(2026, 3, 4, 19, 30, 0)
        );
    }

    #[test]
    fn parses_space_separated_with_seconds() {
        assert_eq!(
            parse_show_time("2026-03-04 19:30:15").unwrap(),
            dt(2026, 3, 4, 19, 30, 15)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_show_time("next friday").is_err());
        assert!(parse_show_time("").is_err());
    }
}
