//! Lunar position and illumination.
//!
//! Mean-element model with a single dominant perturbation in longitude
//! (the equation of center), latitude from the argument of latitude, and a
//! one-term distance series. Good to a few tenths of a degree, which is
//! enough for rise/set times at the minute level and for phase display.

use lumen_frames::{
    EquatorialCoords, astro_refraction_rad, azimuth_rad, altitude_rad, ecliptic_to_equatorial,
    parallactic_angle_rad,
};
use lumen_time::{Instant, sidereal_time_rad};

use crate::geo::GeoCoordinate;
use crate::moon_types::{MoonIllumination, MoonPosition};
use crate::sun::sun_coords;

/// Geocentric equatorial coordinates of the Moon at `days` since J2000.0.
pub fn moon_coords(days: f64) -> EquatorialCoords {
    // Mean longitude, mean anomaly, mean argument of latitude.
    let l_mean = (218.316 + 13.176_396 * days).to_radians();
    let m = (134.963 + 13.064_993 * days).to_radians();
    let f = (93.272 + 13.229_350 * days).to_radians();

    let lon = l_mean + 6.289_f64.to_radians() * m.sin();
    let lat = 5.128_f64.to_radians() * f.sin();
    let distance_km = 385_001.0 - 20_905.0 * m.cos();

    ecliptic_to_equatorial(lon, lat, distance_km)
}

/// Moon position at `days` since J2000.0, the shared core of
/// [`moon_position`] and the rise/set search.
pub(crate) fn moon_position_at_days(days: f64, location: &GeoCoordinate) -> MoonPosition {
    let lw = location.west_longitude_rad();
    let phi = location.latitude_rad();
    let c = moon_coords(days);
    let h = sidereal_time_rad(days, lw) - c.ra_rad;
    let alt = altitude_rad(h, phi, c.dec_rad);

    MoonPosition {
        azimuth_rad: azimuth_rad(h, phi, c.dec_rad),
        altitude_rad: alt + astro_refraction_rad(alt),
        distance_km: c.distance_km,
        parallactic_angle_rad: parallactic_angle_rad(h, phi, c.dec_rad),
    }
}

/// Apparent position of the Moon for an observer.
///
/// Altitude includes first-order atmospheric refraction. No topocentric
/// parallax correction is applied.
pub fn moon_position(instant: Instant, location: &GeoCoordinate) -> MoonPosition {
    moon_position_at_days(instant.to_days(), location)
}

/// Lunar positions for several instants at one location.
pub fn moon_positions(instants: &[Instant], location: &GeoCoordinate) -> Vec<MoonPosition> {
    instants.iter().map(|&t| moon_position(t, location)).collect()
}

/// Illuminated fraction, phase and bright-limb angle at `instant`.
///
/// Geocentric; independent of observer location.
pub fn moon_illumination(instant: Instant) -> MoonIllumination {
    let days = instant.to_days();
    let s = sun_coords(days);
    let m = moon_coords(days);

    let d_ra = s.ra_rad - m.ra_rad;

    // Sun–Moon elongation, spherical law of cosines.
    let cos_elong = s.dec_rad.sin() * m.dec_rad.sin()
        + s.dec_rad.cos() * m.dec_rad.cos() * d_ra.cos();
    let elong = cos_elong.clamp(-1.0, 1.0).acos();

    // Phase angle at the Moon, Sun–Moon–Earth.
    let inc = (s.distance_km * elong.sin()).atan2(m.distance_km - s.distance_km * elong.cos());

    let angle = (s.dec_rad.cos() * d_ra.sin()).atan2(
        s.dec_rad.sin() * m.dec_rad.cos() - s.dec_rad.cos() * m.dec_rad.sin() * d_ra.cos(),
    );

    let sign = if angle < 0.0 { -1.0 } else { 1.0 };
    let phase = 0.5 + 0.5 * inc * sign / std::f64::consts::PI;

    MoonIllumination {
        fraction: (1.0 + inc.cos()) / 2.0,
        phase: if phase >= 1.0 { phase - 1.0 } else { phase },
        angle_rad: angle,
    }
}
