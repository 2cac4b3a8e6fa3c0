//! Equatorial → horizontal conversion for a ground observer.
//!
//! Azimuth here follows the classical astronomical convention: measured
//! from **south**, increasing toward the west. [`HorizontalPosition`]
//! exposes the compass form (from north, clockwise) for display.
//!
//! Arguments throughout:
//! - `h`  : local hour angle in radians
//! - `phi`: observer latitude in radians
//! - `dec`: declination in radians

/// Apparent position of a body in the observer's sky.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalPosition {
    /// Azimuth in radians, from south toward west, range (-π, π].
    pub azimuth_rad: f64,
    /// Altitude above the horizon in radians.
    pub altitude_rad: f64,
}

impl HorizontalPosition {
    /// Compass bearing in degrees from north, clockwise, range [0, 360).
    pub fn azimuth_deg_from_north(&self) -> f64 {
        (self.azimuth_rad.to_degrees() + 180.0).rem_euclid(360.0)
    }

    /// Altitude in degrees.
    pub fn altitude_deg(&self) -> f64 {
        self.altitude_rad.to_degrees()
    }

    /// Whether the body is above the horizon.
    pub fn is_above_horizon(&self) -> bool {
        self.altitude_rad > 0.0
    }
}

/// Azimuth from south, westward positive.
///
/// A = atan2(sin H, cos H sin φ − tan δ cos φ)
pub fn azimuth_rad(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(h.cos() * phi.sin() - dec.tan() * phi.cos())
}

/// Geometric altitude.
///
/// a = asin(sin φ sin δ + cos φ cos δ cos H)
pub fn altitude_rad(h: f64, phi: f64, dec: f64) -> f64 {
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos()).asin()
}

/// Azimuth and altitude together.
pub fn equatorial_to_horizontal(h: f64, phi: f64, dec: f64) -> HorizontalPosition {
    HorizontalPosition {
        azimuth_rad: azimuth_rad(h, phi, dec),
        altitude_rad: altitude_rad(h, phi, dec),
    }
}

/// Parallactic angle: position angle of the zenith measured at the body
/// from the direction of the celestial north pole.
///
/// q = atan2(sin H, tan φ cos δ − sin δ cos H)
pub fn parallactic_angle_rad(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(phi.tan() * dec.cos() - dec.sin() * h.cos())
}

/// First-order atmospheric refraction for a true altitude `h` (radians).
///
/// Sæmundsson-style cotangent formula. Negative altitudes are treated as
/// the horizon, so the correction stays finite below it.
pub fn astro_refraction_rad(h: f64) -> f64 {
    let h = if h < 0.0 { 0.0 } else { h };
    0.000_296_7 / (h + 0.003_125_36 / (h + 0.089_011_79)).tan()
}
