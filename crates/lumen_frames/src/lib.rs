//! Frame conversion helpers for ephemeris computations.
//!
//! Provides the ecliptic → equatorial rotation at the mean obliquity and
//! the equatorial → horizontal conversion for a ground observer, plus the
//! first-order refraction and parallactic-angle formulas used on top of it.

pub mod horizontal;
pub mod obliquity;
pub mod spherical;

pub use horizontal::{
    HorizontalPosition, altitude_rad, astro_refraction_rad, azimuth_rad, equatorial_to_horizontal,
    parallactic_angle_rad,
};
pub use obliquity::{COS_OBL, OBLIQUITY_MEAN_DEG, OBLIQUITY_MEAN_RAD, SIN_OBL};
pub use spherical::{EquatorialCoords, declination_rad, ecliptic_to_equatorial, right_ascension_rad};
