//! Mean sidereal time.
//!
//! Low-order linear model, adequate for rise/set work at the minute
//! level: θ = 280.16° + 360.9856235° × d, where d is days since J2000.0.
//! No nutation term and no UT1 correction.

/// Sidereal angle advance per day, in degrees.
pub const SIDEREAL_DEG_PER_DAY: f64 = 360.985_623_5;

/// Sidereal angle at J2000.0, in degrees.
const SIDEREAL_AT_J2000_DEG: f64 = 280.16;

/// Local sidereal time in radians.
///
/// `days` is days since J2000.0; `lw_rad` is the observer's *west*
/// longitude in radians (negated east longitude). The result is not
/// reduced to [0, 2π); callers only feed it to trigonometric functions.
pub fn sidereal_time_rad(days: f64, lw_rad: f64) -> f64 {
    (SIDEREAL_AT_J2000_DEG + SIDEREAL_DEG_PER_DAY * days).to_radians() - lw_rad
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use super::*;

    #[test]
    fn greenwich_at_j2000() {
        let theta = sidereal_time_rad(0.0, 0.0);
        assert!((theta.to_degrees() - 280.16).abs() < 1e-12);
    }

    #[test]
    fn west_longitude_subtracts() {
        let lw = 30.0_f64.to_radians();
        let diff = sidereal_time_rad(10.0, 0.0) - sidereal_time_rad(10.0, lw);
        assert!((diff - lw).abs() < 1e-12);
    }

    #[test]
    fn one_day_gains_about_a_degree() {
        let gain = (sidereal_time_rad(1.0, 0.0) - sidereal_time_rad(0.0, 0.0)).rem_euclid(TAU);
        assert!(
            (gain.to_degrees() - 0.9856).abs() < 1e-3,
            "daily gain = {}°",
            gain.to_degrees()
        );
    }
}
