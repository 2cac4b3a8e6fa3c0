//! Error types for calendar construction and parsing.

use thiserror::Error;

/// Errors from building an [`Instant`](crate::Instant) out of calendar fields
/// or text.
///
/// Day-number conversions never fail; they return `Option` instead.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Year/month/day do not name a proleptic Gregorian date.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour/minute/second outside a valid time of day.
    #[error("invalid time of day {hour:02}:{minute:02}:{second}")]
    InvalidTime { hour: u32, minute: u32, second: f64 },
    /// Text is neither RFC 3339 nor `YYYY-MM-DD`.
    #[error("cannot parse '{0}': expected RFC 3339 (2024-06-21T12:00:00Z) or YYYY-MM-DD")]
    Parse(String),
    /// Instant lies outside the calendar range supported for display.
    #[error("instant outside the supported calendar range")]
    OutOfRange,
}
