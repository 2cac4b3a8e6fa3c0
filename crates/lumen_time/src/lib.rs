//! Continuous timeline and day-number conversions.
//!
//! This crate provides:
//! - [`Instant`], a millisecond point on a single continuous timeline
//! - Julian Date ↔ instant conversions, exact to the millisecond
//! - Days-since-J2000 conversions used by every ephemeris formula
//! - Mean sidereal time
//! - Calendar construction, parsing and display through `chrono`
//!
//! There is no time-scale machinery: callers normalize to UTC before
//! constructing an instant, and leap seconds are not modelled.

pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc;

pub use error::TimeError;
pub use julian::{
    J2000_JD, MAX_UNIX_MS, MS_PER_DAY, UNIX_EPOCH_JD, days_to_jd, jd_to_days, jd_to_unix_ms,
    unix_ms_to_jd,
};
pub use sidereal::{SIDEREAL_DEG_PER_DAY, sidereal_time_rad};

/// Milliseconds in one hour.
const MS_PER_HOUR: f64 = 3_600_000.0;

/// A point on the continuous timeline, in milliseconds since
/// 1970-01-01T00:00:00 UTC.
///
/// This is the input and output time type of the whole engine. It has no
/// timezone and never consults the system clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    unix_ms: i64,
}

impl Instant {
    /// 1970-01-01T00:00:00.
    pub const UNIX_EPOCH: Instant = Instant { unix_ms: 0 };

    /// Create an instant from milliseconds since the Unix epoch.
    pub const fn from_unix_millis(unix_ms: i64) -> Self {
        Self { unix_ms }
    }

    /// Milliseconds since the Unix epoch.
    pub const fn unix_millis(self) -> i64 {
        self.unix_ms
    }

    /// Julian Date of this instant.
    pub fn to_julian(self) -> f64 {
        unix_ms_to_jd(self.unix_ms)
    }

    /// Instant for a Julian Date.
    ///
    /// `None` for NaN or infinite input, which is how a degenerate formula
    /// reports that an event does not happen.
    pub fn from_julian(jd: f64) -> Option<Self> {
        jd_to_unix_ms(jd).map(Self::from_unix_millis)
    }

    /// Days since J2000.0.
    pub fn to_days(self) -> f64 {
        jd_to_days(self.to_julian())
    }

    /// Instant for a count of days since J2000.0.
    pub fn from_days(days: f64) -> Option<Self> {
        Self::from_julian(days_to_jd(days))
    }

    /// This instant shifted by a (possibly fractional) number of hours.
    ///
    /// `None` if the shift is not finite or leaves the representable range.
    pub fn add_hours(self, hours: f64) -> Option<Self> {
        let shift = (hours * MS_PER_HOUR).round();
        if !shift.is_finite() {
            return None;
        }
        let unix_ms = self.unix_ms as f64 + shift;
        if unix_ms.abs() > MAX_UNIX_MS as f64 {
            return None;
        }
        Some(Self::from_unix_millis(unix_ms as i64))
    }

    /// 00:00:00 UTC of the day containing this instant.
    ///
    /// Saturates at [`i64::MIN`] for the partial day at the bottom of the
    /// timeline.
    pub fn start_of_utc_day(self) -> Self {
        let day_ms = MS_PER_DAY as i64;
        Self::from_unix_millis(self.unix_ms.div_euclid(day_ms).saturating_mul(day_ms))
    }
}
