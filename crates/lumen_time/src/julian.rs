//! Julian Date arithmetic on the millisecond timeline.
//!
//! The engine's formulas run on two day numbers:
//! - the Julian Date (JD), continuous days since -4712-01-01T12:00;
//! - days since J2000.0 (JD 2451545.0), written `d` in the formulas.
//!
//! Both are plain `f64`. A non-finite day number is how a degenerate
//! astronomical formula says "no event"; [`jd_to_unix_ms`] turns it into
//! `None`.

/// Milliseconds in one day.
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Julian Date of the Unix epoch, 1970-01-01T00:00:00.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Date of J2000.0 (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Largest representable distance from the Unix epoch, in milliseconds
/// (100 000 000 days either side).
pub const MAX_UNIX_MS: i64 = 8_640_000_000_000_000;

/// Julian Date for milliseconds since the Unix epoch.
pub fn unix_ms_to_jd(unix_ms: i64) -> f64 {
    unix_ms as f64 / MS_PER_DAY + UNIX_EPOCH_JD
}

/// Milliseconds since the Unix epoch for a Julian Date, rounded to the
/// nearest millisecond.
///
/// Returns `None` for NaN, infinities, and dates beyond [`MAX_UNIX_MS`].
pub fn jd_to_unix_ms(jd: f64) -> Option<i64> {
    if !jd.is_finite() {
        log::debug!("non-finite julian date {jd}; no instant");
        return None;
    }
    let ms = ((jd - UNIX_EPOCH_JD) * MS_PER_DAY).round();
    if ms.abs() > MAX_UNIX_MS as f64 {
        log::debug!("julian date {jd} outside the representable range");
        return None;
    }
    Some(ms as i64)
}

/// Days since J2000.0 for a Julian Date.
pub fn jd_to_days(jd: f64) -> f64 {
    jd - J2000_JD
}

/// Julian Date for days since J2000.0.
pub fn days_to_jd(days: f64) -> f64 {
    days + J2000_JD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_epoch_jd() {
        assert_eq!(unix_ms_to_jd(0), UNIX_EPOCH_JD);
        assert_eq!(jd_to_unix_ms(UNIX_EPOCH_JD), Some(0));
    }

    #[test]
    fn j2000_is_noon_jan_first() {
        // 2000-01-01T12:00:00Z = 946_728_000 s after the Unix epoch
        assert_eq!(jd_to_unix_ms(J2000_JD), Some(946_728_000_000));
        assert_eq!(jd_to_days(J2000_JD), 0.0);
    }

    #[test]
    fn non_finite_has_no_instant() {
        assert_eq!(jd_to_unix_ms(f64::NAN), None);
        assert_eq!(jd_to_unix_ms(f64::INFINITY), None);
        assert_eq!(jd_to_unix_ms(f64::NEG_INFINITY), None);
    }

    #[test]
    fn beyond_range_has_no_instant() {
        assert_eq!(jd_to_unix_ms(UNIX_EPOCH_JD + 2.0e8), None);
        assert_eq!(jd_to_unix_ms(UNIX_EPOCH_JD - 2.0e8), None);
    }

    #[test]
    fn days_jd_inverse() {
        let jd = 2_460_482.75;
        assert_eq!(days_to_jd(jd_to_days(jd)), jd);
    }

    #[test]
    fn half_millisecond_rounds() {
        let jd = UNIX_EPOCH_JD + 1.6 / MS_PER_DAY;
        assert_eq!(jd_to_unix_ms(jd), Some(2));
    }
}
