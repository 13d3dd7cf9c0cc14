//! Timestamp display helpers.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%-m/%-d/%Y %-I:%M:%S %p";

/// Render an ISO-like timestamp as `M/D/YYYY h:MM:SS AM`.
///
/// Accepts RFC 3339 (rendered in its own offset), naive `T`- or space-separated
/// date-times with optional fractional seconds, and bare dates. Returns `None`
/// for anything else.
#[must_use]
pub fn format_date(input: &str) -> Option<String> {
    parse_timestamp(input.trim()).map(|ts| ts.format(DISPLAY_FORMAT).to_string())
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.naive_local());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, pattern) {
            return Some(ts);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::format_date;

    #[test]
    fn formats_rfc3339_in_its_own_offset() {
        assert_eq!(
            format_date("2024-03-05T14:07:09Z").as_deref(),
            Some("3/5/2024 2:07:09 PM")
        );
        assert_eq!(
            format_date("2024-03-05T09:30:00+03:00").as_deref(),
            Some("3/5/2024 9:30:00 AM")
        );
    }

    #[test]
    fn formats_naive_timestamps_and_dates() {
        assert_eq!(
            format_date("2024-11-20T23:59:01.123456").as_deref(),
            Some("11/20/2024 11:59:01 PM")
        );
        assert_eq!(
            format_date("2024-11-20 00:15:00").as_deref(),
            Some("11/20/2024 12:15:00 AM")
        );
        assert_eq!(
            format_date("2024-12-25").as_deref(),
            Some("12/25/2024 12:00:00 AM")
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(format_date("yesterday"), None);
        assert_eq!(format_date(""), None);
    }
}
