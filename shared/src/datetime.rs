use crate::error::{Result, SharedError};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Mutex;

/// Value format of an `<input type="datetime-local">`.
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

const LOCAL_INPUT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

static TIMEZONE_CACHE: Lazy<Mutex<HashMap<String, Tz>>> = Lazy::new(|| Mutex::new(HashMap::new()));

/// Resolves an IANA name reported by the browser, falling back to UTC.
pub fn resolve_timezone(timezone_name: &str) -> Tz {
    if let Ok(cache) = TIMEZONE_CACHE.lock() {
        if let Some(tz) = cache.get(timezone_name) {
            return *tz;
        }
    }

    match timezone_name.parse::<Tz>() {
        Ok(tz) => {
            if let Ok(mut cache) = TIMEZONE_CACHE.lock() {
                cache.insert(timezone_name.to_string(), tz);
            }
            tz
        }
        Err(_) => {
            log::warn!("Unknown timezone '{}', using UTC", timezone_name);
            Tz::UTC
        }
    }
}

fn localize(naive: NaiveDateTime, tz: Tz, raw: &str) -> Result<DateTime<Utc>> {
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| SharedError::InvalidDate(raw.to_string()))
}

/// Interprets a `datetime-local` input value as wall-clock time in `tz`.
pub fn parse_datetime_local(value: &str, tz: Tz) -> Result<DateTime<Utc>> {
    let value = value.trim();
    LOCAL_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| SharedError::InvalidDate(value.to_string()))
        .and_then(|naive| localize(naive, tz, value))
}

/// Accepts whatever a date-bearing document tends to produce: RFC 3339
/// instants, local date-times, or a bare date (taken as local midnight).
pub fn parse_loose(value: &str, tz: Tz) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(instant) = parse_datetime_local(value, tz) {
        return Some(instant);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .and_then(|naive| localize(naive, tz, value).ok())
}

/// Formats an instant for a `datetime-local` input in `tz`.
pub fn to_datetime_local(instant: &DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format(DATETIME_LOCAL_FORMAT).to_string()
}

/// Human readable date and time, e.g. "Apr 15, 2025, 9:00 AM".
pub fn format_display(instant: &DateTime<Utc>, tz: Tz) -> String {
    instant
        .with_timezone(&tz)
        .format("%b %-d, %Y, %-I:%M %p")
        .to_string()
}

pub fn format_optional(instant: Option<&DateTime<Utc>>, tz: Tz) -> String {
    instant
        .map(|i| format_display(i, tz))
        .unwrap_or_else(|| "Not specified".to_string())
}

/// Clock time, e.g. "09:00".
pub fn format_time(instant: &DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%H:%M").to_string()
}

/// Calendar day of an instant as seen in `tz`.
pub fn local_date(instant: &DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn kolkata() -> Tz {
        resolve_timezone("Asia/Kolkata")
    }

    #[test]
    fn resolve_known_and_unknown_timezones() {
        assert_eq!(resolve_timezone("America/Chicago"), Tz::America__Chicago);
        // second lookup is served from the cache
        assert_eq!(resolve_timezone("America/Chicago"), Tz::America__Chicago);
        assert_eq!(resolve_timezone("Invalid/Zone"), Tz::UTC);
    }

    #[test]
    fn datetime_local_is_wall_clock_time() {
        let instant = parse_datetime_local("2025-04-15T09:00", kolkata()).unwrap();
        assert_eq!(instant.to_rfc3339(), "2025-04-15T03:30:00+00:00");
    }

    #[test]
    fn datetime_local_round_trips_through_timezone() {
        let instant = parse_datetime_local("2025-12-31T23:45", kolkata()).unwrap();
        assert_eq!(to_datetime_local(&instant, kolkata()), "2025-12-31T23:45");
    }

    #[rstest]
    #[case("")]
    #[case("tomorrow")]
    #[case("2025-13-01T10:00")]
    fn datetime_local_rejects_garbage(#[case] raw: &str) {
        assert!(matches!(
            parse_datetime_local(raw, Tz::UTC),
            Err(SharedError::InvalidDate(_))
        ));
    }

    #[rstest]
    #[case("2025-04-15T09:00:00.000Z", 9)]
    #[case("2025-04-15T09:00", 9)]
    #[case("2025-04-15 09:00:00", 9)]
    #[case("2025-04-15", 0)]
    fn loose_parsing_accepts_common_shapes(#[case] raw: &str, #[case] hour: u32) {
        let instant = parse_loose(raw, Tz::UTC).unwrap();
        assert_eq!(instant.day(), 15);
        assert_eq!(instant.hour(), hour);
    }

    #[test]
    fn loose_parsing_ignores_blank() {
        assert_eq!(parse_loose("   ", Tz::UTC), None);
        assert_eq!(parse_loose("soon", Tz::UTC), None);
    }

    #[test]
    fn display_formats() {
        let instant = parse_datetime_local("2025-04-15T21:05", Tz::UTC).unwrap();
        assert_eq!(format_display(&instant, Tz::UTC), "Apr 15, 2025, 9:05 PM");
        assert_eq!(format_time(&instant, Tz::UTC), "21:05");
        assert_eq!(format_optional(None, Tz::UTC), "Not specified");
    }

    #[test]
    fn local_date_crosses_midnight() {
        let instant = DateTime::parse_from_rfc3339("2025-04-15T20:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(
            local_date(&instant, kolkata()),
            NaiveDate::from_ymd_opt(2025, 4, 16).unwrap()
        );
    }
}
