//! Moonrise/moonset search.
//!
//! Samples the Moon's apparent altitude every hour across one UTC day and
//! fits a parabola through each consecutive triple (a 2-hour window
//! centered on an odd hour). Zero crossings of the parabola inside the
//! window are the rise/set candidates.
//!
//! The 2-hour cadence is part of the observable behavior: a rise followed
//! by a set within one window can be missed. Keep it.

use lumen_time::Instant;

use crate::geo::GeoCoordinate;
use crate::moon::moon_position_at_days;
use crate::moon_types::MoonTimes;

/// Apparent lunar semidiameter plus parallax allowance, in degrees.
/// Subtracted from the refracted altitude so the upper limb defines the
/// event.
const MOON_HORIZON_OFFSET_DEG: f64 = 0.133;

/// Window centers in hours after 00:00 UTC: 1, 3, …, 23.
const WINDOW_CENTERS_H: [f64; 12] = [
    1.0, 3.0, 5.0, 7.0, 9.0, 11.0, 13.0, 15.0, 17.0, 19.0, 21.0, 23.0,
];

/// Parabola through altitudes sampled at x = -1, 0, +1 (hours from the
/// window center).
#[derive(Debug, Clone, Copy)]
struct WindowFit {
    a: f64,
    b: f64,
    c: f64,
}

/// Zero crossings found inside one window, as offsets from its center.
#[derive(Debug, Clone, Copy, PartialEq)]
enum WindowRoots {
    None,
    One(f64),
    Two(f64, f64),
}

impl WindowFit {
    fn through(h0: f64, h1: f64, h2: f64) -> Self {
        Self {
            a: (h0 + h2) / 2.0 - h1,
            b: (h2 - h0) / 2.0,
            c: h1,
        }
    }

    fn vertex_x(&self) -> f64 {
        -self.b / (2.0 * self.a)
    }

    /// Parabola value at its vertex.
    fn vertex_value(&self) -> f64 {
        let xe = self.vertex_x();
        (self.a * xe + self.b) * xe + self.c
    }

    /// Roots with |x| ≤ 1. With exactly one root inside, the inside one is
    /// returned.
    fn roots_in_window(&self) -> WindowRoots {
        let disc = self.b * self.b - 4.0 * self.a * self.c;
        if disc < 0.0 {
            return WindowRoots::None;
        }
        let xe = self.vertex_x();
        let dx = disc.sqrt() / (self.a.abs() * 2.0);
        let x1 = xe - dx;
        let x2 = xe + dx;
        match (x1.abs() <= 1.0, x2.abs() <= 1.0) {
            (true, true) => WindowRoots::Two(x1, x2),
            (true, false) => WindowRoots::One(x1),
            (false, true) => WindowRoots::One(x2),
            (false, false) => WindowRoots::None,
        }
    }
}

/// Moonrise and moonset during the UTC day containing `date`.
///
/// When neither event occurs, the day is classified by the altitude at the
/// last sample: `always_up` if positive, `always_down` otherwise. A
/// crossing whose time falls outside the representable timeline counts as
/// no event.
pub fn moon_times(date: Instant, location: &GeoCoordinate) -> MoonTimes {
    log::trace!(
        "moon_times for {date} at ({}, {})",
        location.latitude_deg,
        location.longitude_deg
    );
    let start = date.start_of_utc_day();
    let start_days = start.to_days();
    let hc = MOON_HORIZON_OFFSET_DEG.to_radians();
    let altitude_at =
        |hours: f64| moon_position_at_days(start_days + hours / 24.0, location).altitude_rad - hc;

    let mut rise_h = None;
    let mut set_h = None;
    let mut h0 = altitude_at(0.0);

    for &i in &WINDOW_CENTERS_H {
        let h1 = altitude_at(i);
        let h2 = altitude_at(i + 1.0);
        let fit = WindowFit::through(h0, h1, h2);

        match fit.roots_in_window() {
            WindowRoots::None => {}
            WindowRoots::One(x) => {
                if h0 < 0.0 {
                    rise_h = Some(i + x);
                } else {
                    set_h = Some(i + x);
                }
            }
            WindowRoots::Two(x1, x2) => {
                // A negative vertex means the Moon dips below between the
                // crossings: set first, then rise.
                if fit.vertex_value() < 0.0 {
                    rise_h = Some(i + x2);
                    set_h = Some(i + x1);
                } else {
                    rise_h = Some(i + x1);
                    set_h = Some(i + x2);
                }
            }
        }

        h0 = h2;
        if rise_h.is_some() && set_h.is_some() {
            break;
        }
    }

    let rise = rise_h.and_then(|h| start.add_hours(h));
    let set = set_h.and_then(|h| start.add_hours(h));

    if rise.is_none() && set.is_none() {
        let always_up = h0 > 0.0;
        log::debug!(
            "no moonrise or moonset on {start}: always {}",
            if always_up { "up" } else { "down" }
        );
        return MoonTimes {
            rise: None,
            set: None,
            always_up,
            always_down: !always_up,
        };
    }

    MoonTimes {
        rise,
        set,
        always_up: false,
        always_down: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_reproduces_samples() {
        let fit = WindowFit::through(-0.3, 0.1, 0.2);
        let at = |x: f64| (fit.a * x + fit.b) * x + fit.c;
        assert!((at(-1.0) + 0.3).abs() < 1e-15);
        assert!((at(0.0) - 0.1).abs() < 1e-15);
        assert!((at(1.0) - 0.2).abs() < 1e-15);
    }

    #[test]
    fn single_rising_root() {
        // Straight-ish line through zero at x = 0.
        let fit = WindowFit::through(-0.1, 0.0, 0.1 + 1e-9);
        match fit.roots_in_window() {
            WindowRoots::One(x) => assert!(x.abs() < 1e-6, "x = {x}"),
            other => panic!("expected one root, got {other:?}"),
        }
    }

    #[test]
    fn two_roots_negative_vertex() {
        // Dips below zero between x = -0.5 and x = 0.5.
        let fit = WindowFit::through(0.75, -0.25, 0.75);
        assert!(fit.vertex_value() < 0.0);
        match fit.roots_in_window() {
            WindowRoots::Two(x1, x2) => {
                assert!((x1 + 0.5).abs() < 1e-12);
                assert!((x2 - 0.5).abs() < 1e-12);
            }
            other => panic!("expected two roots, got {other:?}"),
        }
    }

    #[test]
    fn no_roots_when_all_positive() {
        let fit = WindowFit::through(0.2, 0.3, 0.25);
        assert_eq!(fit.roots_in_window(), WindowRoots::None);
    }

    #[test]
    fn roots_outside_window_ignored() {
        // Parabola x² - 4: roots at ±2.
        let fit = WindowFit::through(-3.0, -4.0, -3.0);
        assert_eq!(fit.roots_in_window(), WindowRoots::None);
    }

    #[test]
    fn flags_exclusive_with_events() {
        let loc = GeoCoordinate::new(51.5, 0.0, 0.0);
        let start = Instant::from_utc(2024, 1, 1, 0, 0, 0.0).unwrap();
        for day in 0..30 {
            let t = start.add_hours(24.0 * day as f64).unwrap();
            let mt = moon_times(t, &loc);
            assert!(!(mt.always_up && mt.always_down));
            if mt.rise.is_some() || mt.set.is_some() {
                assert!(!mt.always_up && !mt.always_down);
            }
        }
    }

    #[test]
    fn timeline_extremes_are_well_formed() {
        let loc = GeoCoordinate::new(51.5, 0.0, 0.0);
        for ms in [i64::MIN, i64::MAX] {
            let mt = moon_times(Instant::from_unix_millis(ms), &loc);
            if mt.rise.is_some() || mt.set.is_some() {
                assert!(!mt.always_up && !mt.always_down, "{mt:?}");
            } else {
                assert!(mt.always_up ^ mt.always_down, "{mt:?}");
            }
        }
    }

    #[test]
    fn events_fall_inside_the_day() {
        let loc = GeoCoordinate::new(-34.6, -58.4, 0.0);
        let t = Instant::from_utc(2024, 5, 5, 17, 30, 0.0).unwrap();
        let day_start = t.start_of_utc_day().unix_millis();
        let mt = moon_times(t, &loc);
        for ev in [mt.rise, mt.set].into_iter().flatten() {
            let off = ev.unix_millis() - day_start;
            assert!((0..=86_400_000).contains(&off), "event {ev} outside day");
        }
    }
}
