//! Human-readable timestamps.

use chrono::{DateTime, Local, TimeZone};

const TIMESTAMP_FORMAT: &str = "%d %b %Y %H:%M:%S";

/// Format seconds since the Unix epoch in the local time zone.
pub fn format_timestamp(timestamp: f64) -> String {
    format_timestamp_in(timestamp, &Local)
}

/// Format seconds since the Unix epoch in `tz`. Non-finite or out-of-range values
/// are reported as "unknown time".
pub fn format_timestamp_in<Tz>(timestamp: f64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if !timestamp.is_finite() {
        return "unknown time".to_string();
    }
    let secs = timestamp.floor();
    let nanos = ((timestamp - secs) * 1e9) as u32;
    match DateTime::from_timestamp(secs as i64, nanos) {
        Some(utc) => utc
            .with_timezone(tz)
            .format(TIMESTAMP_FORMAT)
            .to_string(),
        None => "unknown time".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn formats_epoch() {
        assert_eq!(format_timestamp_in(0.0, &Utc), "01 Jan 1970 00:00:00");
    }

    #[test]
    fn drops_fractional_seconds() {
        assert_eq!(
            format_timestamp_in(1_700_000_000.75, &Utc),
            "14 Nov 2023 22:13:20"
        );
    }

    #[test]
    fn non_finite_is_unknown() {
        assert_eq!(format_timestamp_in(f64::NAN, &Utc), "unknown time");
    }

    #[test]
    fn local_matches_explicit_local() {
        assert_eq!(format_timestamp(0.0), format_timestamp_in(0.0, &Local));
    }
}
