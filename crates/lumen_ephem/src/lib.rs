//! Analytic sun and moon ephemerides for a ground observer.
//!
//! This crate provides:
//! - Solar position and the day's solar events (noon, nadir, sunrise and
//!   sunset, twilights, golden hour)
//! - Lunar position, distance and parallactic angle
//! - Lunar illumination and phase
//! - Moonrise/moonset for a UTC day
//!
//! Every operation is a pure function of its inputs. Degenerate geometry
//! (polar day, polar night, a Moon that never crosses the horizon) is
//! reported through `Option` fields and flags, never through errors.

pub mod error;
pub mod geo;
pub mod moon;
pub mod moon_riseset;
pub mod moon_types;
pub mod sun;
pub mod sun_types;

pub use error::EphemError;
pub use geo::{GeoCoordinate, observer_dip_deg};
pub use lumen_frames::{EquatorialCoords, HorizontalPosition};
pub use lumen_time::Instant;
pub use moon::{moon_coords, moon_illumination, moon_position, moon_positions};
pub use moon_riseset::moon_times;
pub use moon_types::{MoonIllumination, MoonPhase, MoonPosition, MoonTimes};
pub use sun::{
    SUN_MEAN_DISTANCE_KM, ecliptic_longitude_rad, solar_mean_anomaly_rad, sun_coords, sun_event,
    sun_position, sun_positions, sun_times, sun_times_for_angles,
};
pub use sun_types::{SUN_ANGLES, SolarTimes, SunAngle, SunCrossing, SunEvent};
