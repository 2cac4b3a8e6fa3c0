//! Observer location on the Earth's surface.

use crate::error::EphemError;

/// Horizon dip per √metre of observer height, in arcminutes.
///
/// Includes terrestrial refraction along the line of sight.
const DIP_ARCMIN_PER_SQRT_M: f64 = 2.076;

/// Geographic location on Earth's surface.
///
/// No datum correction is applied; latitude is used directly as the
/// astronomical latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Observer height above the surrounding terrain in metres.
    pub height_m: f64,
}

impl GeoCoordinate {
    /// Create a location without validating ranges.
    pub fn new(latitude_deg: f64, longitude_deg: f64, height_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            height_m,
        }
    }

    /// Create a location, rejecting out-of-range or non-finite values.
    pub fn try_new(latitude_deg: f64, longitude_deg: f64, height_m: f64) -> Result<Self, EphemError> {
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(EphemError::InvalidLocation("latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(EphemError::InvalidLocation("longitude must be within [-180, 180]"));
        }
        if !(height_m >= 0.0 && height_m.is_finite()) {
            return Err(EphemError::InvalidLocation("height must be finite and >= 0"));
        }
        Ok(Self::new(latitude_deg, longitude_deg, height_m))
    }

    /// Latitude in radians (φ).
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// West longitude in radians (lw), the sign convention of the
    /// sidereal-time and transit formulas.
    pub fn west_longitude_rad(&self) -> f64 {
        (-self.longitude_deg).to_radians()
    }
}

/// Horizon dip for an observer `height_m` above the terrain, in degrees.
///
/// Negative (the visible horizon drops); zero for heights ≤ 0.
pub fn observer_dip_deg(height_m: f64) -> f64 {
    if height_m > 0.0 {
        -DIP_ARCMIN_PER_SQRT_M * height_m.sqrt() / 60.0
    } else {
        0.0
    }
}
