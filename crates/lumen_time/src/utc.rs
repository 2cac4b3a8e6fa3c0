//! UTC calendar bridge.
//!
//! Builds [`Instant`]s from calendar fields and text, and renders them back,
//! using the proleptic Gregorian calendar from `chrono`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};

use crate::{Instant, TimeError};

impl Instant {
    /// Create an instant from UTC calendar fields.
    ///
    /// `second` may carry a fraction; it is rounded to the millisecond.
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(TimeError::InvalidDate { year, month, day })?;
        let invalid_time = TimeError::InvalidTime {
            hour,
            minute,
            second,
        };
        if !(0.0..60.0).contains(&second) {
            return Err(invalid_time);
        }
        let start = date.and_hms_opt(hour, minute, 0).ok_or(invalid_time)?;
        let ms = start.and_utc().timestamp_millis() + (second * 1000.0).round() as i64;
        Ok(Self::from_unix_millis(ms))
    }

    /// Create an instant from a `chrono` UTC datetime, truncated to the
    /// millisecond.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self::from_unix_millis(dt.timestamp_millis())
    }

    /// This instant as a `chrono` UTC datetime.
    ///
    /// Fails only for instants beyond the calendar range `chrono` supports.
    pub fn to_datetime(self) -> Result<DateTime<Utc>, TimeError> {
        DateTime::<Utc>::from_timestamp_millis(self.unix_millis()).ok_or(TimeError::OutOfRange)
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}

impl FromStr for Instant {
    type Err = TimeError;

    /// Accepts RFC 3339 (`2024-06-21T12:00:00Z`, any offset) or a bare
    /// `YYYY-MM-DD`, read as 00:00 UTC of that day.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::from_datetime(dt.with_timezone(&Utc)));
        }
        let date =
            NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| TimeError::Parse(s.to_string()))?;
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| TimeError::Parse(s.to_string()))?;
        Ok(Self::from_datetime(midnight.and_utc()))
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.to_datetime() {
            Ok(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            Err(_) => write!(f, "JD {:.6}", self.to_julian()),
        }
    }
}
