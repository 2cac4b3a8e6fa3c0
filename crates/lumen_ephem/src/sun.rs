//! Solar position and event times.
//!
//! Low-precision analytic model: mean anomaly plus a three-term equation of
//! center gives the ecliptic longitude; equatorial coordinates use the mean
//! obliquity; event times come from the hour-angle formula around a
//! corrected solar transit. Accuracy is about a minute for event times away
//! from the polar circles.

use std::f64::consts::{PI, TAU};

use lumen_frames::{EquatorialCoords, HorizontalPosition, ecliptic_to_equatorial, equatorial_to_horizontal};
use lumen_time::{Instant, J2000_JD, sidereal_time_rad};

use crate::geo::{GeoCoordinate, observer_dip_deg};
use crate::sun_types::{SUN_ANGLES, SolarTimes, SunCrossing, SunEvent};

/// Mean Earth–Sun distance in km, used for the phase geometry.
pub const SUN_MEAN_DISTANCE_KM: f64 = 149_598_000.0;

/// Transit epoch offset in days for the Julian cycle.
const J0: f64 = 0.0009;

/// Ecliptic longitude of perihelion in degrees.
const PERIHELION_DEG: f64 = 102.9372;

/// Solar mean anomaly in radians at `days` since J2000.0.
pub fn solar_mean_anomaly_rad(days: f64) -> f64 {
    (357.5291 + 0.985_600_28 * days).to_radians()
}

/// Ecliptic longitude of the Sun in radians from its mean anomaly.
///
/// Equation of center truncated at three sine terms.
pub fn ecliptic_longitude_rad(m: f64) -> f64 {
    let c = (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin()).to_radians();
    m + c + PERIHELION_DEG.to_radians() + PI
}

/// Geocentric equatorial coordinates of the Sun at `days` since J2000.0.
///
/// Shared by the solar position and the lunar phase geometry. The distance
/// is the fixed mean distance.
pub fn sun_coords(days: f64) -> EquatorialCoords {
    let l = ecliptic_longitude_rad(solar_mean_anomaly_rad(days));
    ecliptic_to_equatorial(l, 0.0, SUN_MEAN_DISTANCE_KM)
}

/// Apparent position of the Sun for an observer.
///
/// Geometric altitude, no refraction.
pub fn sun_position(instant: Instant, location: &GeoCoordinate) -> HorizontalPosition {
    let days = instant.to_days();
    let lw = location.west_longitude_rad();
    let c = sun_coords(days);
    let h = sidereal_time_rad(days, lw) - c.ra_rad;
    equatorial_to_horizontal(h, location.latitude_rad(), c.dec_rad)
}

/// Solar positions for several instants at one location.
pub fn sun_positions(instants: &[Instant], location: &GeoCoordinate) -> Vec<HorizontalPosition> {
    instants.iter().map(|&t| sun_position(t, location)).collect()
}

/// Transit geometry for the solar day nearest to a given instant.
#[derive(Debug, Clone, Copy)]
struct SolarTransit {
    /// Julian cycle number.
    n: f64,
    /// Mean anomaly at approximate transit.
    m: f64,
    /// Ecliptic longitude at approximate transit.
    l: f64,
    /// Declination at approximate transit.
    dec: f64,
    /// JD of corrected solar noon.
    jd_noon: f64,
}

impl SolarTransit {
    fn for_day(days: f64, lw: f64) -> Self {
        let n = (days - J0 - lw / TAU).round();
        let ds = approx_transit(0.0, lw, n);
        let m = solar_mean_anomaly_rad(ds);
        let l = ecliptic_longitude_rad(m);
        let dec = ecliptic_to_equatorial(l, 0.0, 0.0).dec_rad;
        Self {
            n,
            m,
            l,
            dec,
            jd_noon: solar_transit_jd(ds, m, l),
        }
    }

    /// JD when the Sun descends through altitude `h0` (radians), or `None`
    /// when it never reaches it.
    fn set_jd(&self, h0: f64, lw: f64, phi: f64) -> Option<f64> {
        let w = hour_angle_rad(h0, phi, self.dec)?;
        let a = approx_transit(w, lw, self.n);
        Some(solar_transit_jd(a, self.m, self.l))
    }

    /// Rise/set instants for a threshold in degrees (dip already applied).
    fn crossing(&self, angle_deg: f64, lw: f64, phi: f64) -> (Option<Instant>, Option<Instant>) {
        match self.set_jd(angle_deg.to_radians(), lw, phi) {
            Some(jd_set) => {
                let jd_rise = self.jd_noon - (jd_set - self.jd_noon);
                (Instant::from_julian(jd_rise), Instant::from_julian(jd_set))
            }
            None => (None, None),
        }
    }
}

/// Days since J2000.0 at which hour angle `ht` is reached in cycle `n`.
fn approx_transit(ht: f64, lw: f64, n: f64) -> f64 {
    J0 + (ht + lw) / TAU + n
}

/// JD of transit with the equation-of-time correction.
fn solar_transit_jd(ds: f64, m: f64, l: f64) -> f64 {
    J2000_JD + ds + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin()
}

/// Hour angle at which a body of declination `dec` crosses altitude `h0`.
///
/// The cosine is clamped to [-1, 1]; if the clamp had to engage the body
/// never reaches that altitude and there is no crossing.
fn hour_angle_rad(h0: f64, phi: f64, dec: f64) -> Option<f64> {
    let cos_w = (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    let clamped = cos_w.clamp(-1.0, 1.0);
    if clamped != cos_w {
        log::debug!(
            "no crossing of {:.3}° at latitude {:.3}° (cos H = {cos_w})",
            h0.to_degrees(),
            phi.to_degrees()
        );
        return None;
    }
    Some(clamped.acos())
}

/// Solar noon, nadir and the six standard rise/set pairs for the solar day
/// nearest to `instant` at `location`.
///
/// The observer height lowers every threshold by the horizon dip.
/// Unreachable crossings are `None`; when both members of a pair are
/// present, rise ≤ solar noon ≤ set.
pub fn sun_times(instant: Instant, location: &GeoCoordinate) -> SolarTimes {
    log::trace!(
        "sun_times at {instant} for ({}, {})",
        location.latitude_deg,
        location.longitude_deg
    );
    let lw = location.west_longitude_rad();
    let phi = location.latitude_rad();
    let dip = observer_dip_deg(location.height_m);
    let transit = SolarTransit::for_day(instant.to_days(), lw);

    let mut times = SolarTimes {
        solar_noon: Instant::from_julian(transit.jd_noon),
        nadir: Instant::from_julian(transit.jd_noon - 0.5),
        ..SolarTimes::default()
    };
    for angle in &SUN_ANGLES {
        let (rise, set) = transit.crossing(angle.angle_deg + dip, lw, phi);
        *times.slot_mut(angle.rise) = rise;
        *times.slot_mut(angle.set) = set;
    }
    times
}

/// Rise/set pairs for caller-supplied Sun-center altitudes in degrees.
///
/// Same solar day and dip handling as [`sun_times`]; results follow the
/// order of `angles_deg`.
pub fn sun_times_for_angles(
    instant: Instant,
    location: &GeoCoordinate,
    angles_deg: &[f64],
) -> Vec<SunCrossing> {
    let lw = location.west_longitude_rad();
    let phi = location.latitude_rad();
    let dip = observer_dip_deg(location.height_m);
    let transit = SolarTransit::for_day(instant.to_days(), lw);

    angles_deg
        .iter()
        .map(|&angle_deg| {
            let (rise, set) = transit.crossing(angle_deg + dip, lw, phi);
            SunCrossing {
                angle_deg,
                rise,
                set,
            }
        })
        .collect()
}

/// Time of a single named solar event.
pub fn sun_event(instant: Instant, location: &GeoCoordinate, event: SunEvent) -> Option<Instant> {
    sun_times(instant, location).get(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_anomaly_at_j2000() {
        assert!((solar_mean_anomaly_rad(0.0).to_degrees() - 357.5291).abs() < 1e-9);
    }

    #[test]
    fn ecliptic_longitude_adds_perihelion_and_pi() {
        // With M = 0 the equation of center vanishes.
        let l = ecliptic_longitude_rad(0.0);
        assert!((l - (102.9372_f64.to_radians() + PI)).abs() < 1e-12);
    }

    #[test]
    fn sun_near_equinox_has_small_declination() {
        // 2024-03-20T03:06Z, March equinox
        let t = Instant::from_utc(2024, 3, 20, 3, 6, 0.0).unwrap();
        let c = sun_coords(t.to_days());
        assert!(c.dec_rad.to_degrees().abs() < 0.3, "dec = {}", c.dec_rad.to_degrees());
        assert_eq!(c.distance_km, SUN_MEAN_DISTANCE_KM);
    }

    #[test]
    fn sun_at_june_solstice_declination() {
        let t = Instant::from_utc(2024, 6, 20, 20, 51, 0.0).unwrap();
        let dec = sun_coords(t.to_days()).dec_rad.to_degrees();
        assert!((dec - 23.44).abs() < 0.02, "dec = {dec}");
    }

    #[test]
    fn hour_angle_equator_equinox() {
        // φ = 0, δ = 0: cos H = sin h0, so h0 = 0 gives a quarter day.
        let w = hour_angle_rad(0.0, 0.0, 0.0).unwrap();
        assert!((w - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn hour_angle_polar_night_absent() {
        let h0 = (-0.833_f64).to_radians();
        let phi = 70.0_f64.to_radians();
        let dec = (-23.44_f64).to_radians();
        assert_eq!(hour_angle_rad(h0, phi, dec), None);
    }

    #[test]
    fn hour_angle_midnight_sun_absent() {
        let h0 = (-0.833_f64).to_radians();
        let phi = 70.0_f64.to_radians();
        let dec = 23.44_f64.to_radians();
        assert_eq!(hour_angle_rad(h0, phi, dec), None);
    }

    #[test]
    fn hour_angle_at_pole_absent() {
        let h0 = (-0.833_f64).to_radians();
        assert_eq!(hour_angle_rad(h0, PI / 2.0, 0.3), None);
    }

    #[test]
    fn transit_is_near_local_noon() {
        // Greenwich: transit within ~17 minutes of 12:00 UTC all year.
        let t = Instant::from_utc(2024, 11, 3, 12, 0, 0.0).unwrap();
        let tr = SolarTransit::for_day(t.to_days(), 0.0);
        let noon = Instant::from_julian(tr.jd_noon).unwrap();
        let off_min = (noon.unix_millis() - t.unix_millis()) as f64 / 60_000.0;
        assert!(off_min.abs() < 17.0, "transit offset {off_min} min");
    }

    #[test]
    fn nadir_half_day_before_noon() {
        let loc = GeoCoordinate::new(40.0, -74.0, 0.0);
        let t = Instant::from_utc(2024, 4, 1, 12, 0, 0.0).unwrap();
        let times = sun_times(t, &loc);
        let noon = times.solar_noon.unwrap().unix_millis();
        let nadir = times.nadir.unwrap().unix_millis();
        assert!((noon - nadir - 43_200_000).abs() <= 1);
    }

    #[test]
    fn custom_angles_match_table() {
        let loc = GeoCoordinate::new(48.85, 2.35, 0.0);
        let t = Instant::from_utc(2024, 9, 1, 12, 0, 0.0).unwrap();
        let times = sun_times(t, &loc);
        let custom = sun_times_for_angles(t, &loc, &[-0.833, -6.0, 10.0]);
        assert_eq!(custom.len(), 3);
        assert_eq!(custom[0].rise, times.sunrise);
        assert_eq!(custom[0].set, times.sunset);
        assert_eq!(custom[1].rise, times.dawn);
        assert!(custom[2].rise > times.golden_hour_end);
    }

    #[test]
    fn single_event_lookup() {
        let loc = GeoCoordinate::new(35.0, 139.0, 0.0);
        let t = Instant::from_utc(2024, 1, 10, 3, 0, 0.0).unwrap();
        assert_eq!(
            sun_event(t, &loc, SunEvent::Dusk),
            sun_times(t, &loc).dusk
        );
    }

    #[test]
    fn batch_positions_match_single() {
        let loc = GeoCoordinate::new(-33.9, 18.4, 0.0);
        let base = Instant::from_utc(2024, 12, 1, 0, 0, 0.0).unwrap();
        let ts: Vec<Instant> = (0..24).filter_map(|h| base.add_hours(h as f64)).collect();
        let batch = sun_positions(&ts, &loc);
        assert_eq!(batch.len(), 24);
        for (t, pos) in ts.iter().zip(&batch) {
            assert_eq!(*pos, sun_position(*t, &loc));
        }
    }
}
