// models/src/dates.rs

//! Date parsing for stored records.
//!
//! Appointment timestamps are accepted in exactly two shapes:
//!
//! * RFC 3339 with an offset (`2025-07-01T10:00:00+05:30`, `...Z`), converted to UTC;
//! * the local ISO-8601 form produced by date-time pickers,
//!   `YYYY-MM-DDTHH:MM[:SS[.fff]]`, read as UTC.
//!
//! Anything else is a parse failure reported to the caller.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::errors::{ValidationError, ValidationResult};

const LOCAL_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an appointment timestamp into a UTC instant.
pub fn parse_appointment_date(value: &str) -> ValidationResult<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(with_offset.with_timezone(&Utc));
    }
    LOCAL_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ValidationError::InvalidDateFormat(value.to_string()))
}

/// Parses a date of birth (`YYYY-MM-DD`, no time component).
pub fn parse_birth_date(value: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), BIRTH_DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDateFormat(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn parses_local_picker_timestamps_as_utc() {
        let expected = Utc.with_ymd_and_hms(2025, 7, 1, 10, 0, 0).unwrap();
        assert_eq!(parse_appointment_date("2025-07-01T10:00:00").unwrap(), expected);
        assert_eq!(parse_appointment_date("2025-07-01T10:00").unwrap(), expected);
    }

    #[test]
    fn parses_fractional_seconds() {
        let parsed = parse_appointment_date("2025-07-01T10:00:00.250").unwrap();
        assert_eq!(parsed.nanosecond(), 250_000_000);
    }

    #[test]
    fn converts_offsets_to_utc() {
        let parsed = parse_appointment_date("2025-07-01T10:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 7, 1, 8, 0, 0).unwrap());
        let zulu = parse_appointment_date("2025-07-01T10:00:00Z").unwrap();
        assert_eq!(zulu, Utc.with_ymd_and_hms(2025, 7, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn rejects_loose_formats() {
        for bad in ["", "tomorrow", "07/01/2025 10:00", "2025-07-01", "2025-13-01T10:00"] {
            assert!(parse_appointment_date(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn parses_birth_dates() {
        assert_eq!(
            parse_birth_date("1990-05-10").unwrap(),
            NaiveDate::from_ymd_opt(1990, 5, 10).unwrap()
        );
        assert_eq!(
            parse_birth_date("10/05/1990"),
            Err(ValidationError::InvalidDateFormat("10/05/1990".to_string()))
        );
    }
}
