//! Mean obliquity of the ecliptic.
//!
//! A single fixed value near J2000; no precession model.

/// Mean obliquity in degrees.
pub const OBLIQUITY_MEAN_DEG: f64 = 23.4397;

/// Mean obliquity in radians.
pub const OBLIQUITY_MEAN_RAD: f64 = OBLIQUITY_MEAN_DEG * std::f64::consts::PI / 180.0;

/// sin(ε), precomputed.
pub const SIN_OBL: f64 = 0.397_783_703_493_422_74;

/// cos(ε), precomputed.
pub const COS_OBL: f64 = 0.917_479_223_326_096_2;
