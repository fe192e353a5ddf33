// Copyright 2025 the Brushscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Date helpers: the persisted wire format and epoch-millisecond arithmetic.
//!
//! Dates are UTC-naive [`NaiveDateTime`]s. The widget layer persists them as
//! `YYYY-MM-DDTHH:MM:SS.ffffff` with no trailing `Z`; everything here parses that format
//! before doing any domain arithmetic.

extern crate alloc;

use alloc::string::{String, ToString};

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::ScaleError;

/// `strftime` pattern of the persisted date format.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// A source of "now" for date scales without contributors.
pub type Clock = fn() -> NaiveDateTime;

/// Formats a date in the persisted wire format (microsecond precision, no `Z`).
pub fn format_date(date: NaiveDateTime) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a date in the persisted wire format.
///
/// Also accepted: a missing fractional part, a trailing `Z`, and a bare `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<NaiveDateTime, ScaleError> {
    let trimmed = s.trim();
    let trimmed = trimmed.strip_suffix('Z').unwrap_or(trimmed);
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| ScaleError::InvalidDate(s.into()))
}

/// Milliseconds since the Unix epoch.
pub fn to_millis(date: NaiveDateTime) -> i64 {
    date.and_utc().timestamp_millis()
}

/// Inverse of [`to_millis`]. Returns `None` outside chrono's representable range.
pub fn from_millis(millis: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(millis).map(|d| d.naive_utc())
}

/// The Unix epoch, used as the lower fallback bound of empty date scales.
pub fn epoch() -> NaiveDateTime {
    NaiveDateTime::default()
}

/// The default [`Clock`]: the system clock with `std`, the epoch without it.
#[cfg(feature = "std")]
pub fn system_clock() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

/// The default [`Clock`]: the system clock with `std`, the epoch without it.
#[cfg(not(feature = "std"))]
pub fn system_clock() -> NaiveDateTime {
    epoch()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn formats_with_microsecond_padding_and_no_zone() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_milli_opt(7, 8, 9, 12)
            .unwrap();
        assert_eq!(format_date(d), "2024-03-05T07:08:09.012000");
    }

    #[test]
    fn round_trip_preserves_milliseconds() {
        let d = from_millis(1_700_000_123_456).unwrap();
        let back = parse_date(&format_date(d)).unwrap();
        assert_eq!(to_millis(back), 1_700_000_123_456);
    }

    #[test]
    fn parse_accepts_common_variants() {
        let full = parse_date("2020-01-02T03:04:05.000000").unwrap();
        assert_eq!(parse_date("2020-01-02T03:04:05").unwrap(), full);
        assert_eq!(parse_date("2020-01-02T03:04:05.000Z").unwrap(), full);
        assert_eq!(
            parse_date("2020-01-02").unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 2)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            parse_date("yesterday"),
            Err(ScaleError::InvalidDate("yesterday".into()))
        );
    }

    #[test]
    fn epoch_is_zero_millis() {
        assert_eq!(to_millis(epoch()), 0);
    }
}
