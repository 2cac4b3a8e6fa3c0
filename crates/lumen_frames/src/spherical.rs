//! Ecliptic ↔ equatorial coordinate conversion.

use crate::obliquity::{COS_OBL, SIN_OBL};

/// Geocentric equatorial coordinates of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    /// Right ascension in radians, range (-π, π].
    pub ra_rad: f64,
    /// Declination in radians, range [-π/2, π/2].
    pub dec_rad: f64,
    /// Geocentric distance in km. Zero when the caller has no distance
    /// model for the body.
    pub distance_km: f64,
}

/// Right ascension for ecliptic longitude `l` and latitude `b` (radians).
///
/// α = atan2(sin l cos ε − tan b sin ε, cos l)
pub fn right_ascension_rad(l: f64, b: f64) -> f64 {
    (l.sin() * COS_OBL - b.tan() * SIN_OBL).atan2(l.cos())
}

/// Declination for ecliptic longitude `l` and latitude `b` (radians).
///
/// δ = asin(sin b cos ε + cos b sin ε sin l)
pub fn declination_rad(l: f64, b: f64) -> f64 {
    (b.sin() * COS_OBL + b.cos() * SIN_OBL * l.sin()).asin()
}

/// Rotate ecliptic longitude/latitude into equatorial coordinates.
pub fn ecliptic_to_equatorial(l: f64, b: f64, distance_km: f64) -> EquatorialCoords {
    EquatorialCoords {
        ra_rad: right_ascension_rad(l, b),
        dec_rad: declination_rad(l, b),
        distance_km,
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;
    use crate::obliquity::OBLIQUITY_MEAN_RAD;

    #[test]
    fn vernal_equinox_is_origin() {
        let eq = ecliptic_to_equatorial(0.0, 0.0, 1.0);
        assert!(eq.ra_rad.abs() < 1e-15);
        assert!(eq.dec_rad.abs() < 1e-15);
        assert_eq!(eq.distance_km, 1.0);
    }

    #[test]
    fn summer_solstice_declination_is_obliquity() {
        let dec = declination_rad(FRAC_PI_2, 0.0);
        assert!((dec - OBLIQUITY_MEAN_RAD).abs() < 1e-12);
        let ra = right_ascension_rad(FRAC_PI_2, 0.0);
        assert!((ra - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn autumn_equinox_ra_is_pi() {
        let ra = right_ascension_rad(PI, 0.0);
        assert!((ra.abs() - PI).abs() < 1e-12, "ra = {ra}");
        assert!(declination_rad(PI, 0.0).abs() < 1e-12);
    }

    #[test]
    fn ecliptic_pole_declination() {
        // Ecliptic north pole sits at dec = 90° − ε.
        let dec = declination_rad(0.0, FRAC_PI_2);
        assert!((dec - (FRAC_PI_2 - OBLIQUITY_MEAN_RAD)).abs() < 1e-9);
    }
}
