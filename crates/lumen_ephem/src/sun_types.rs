//! Types for solar event times.
//!
//! Provides the named solar events, the fixed table of altitude thresholds
//! that define them, and the per-day result type.

use lumen_time::Instant;

/// Named solar events of one solar day.
///
/// Every threshold event comes as a rise/set pair sharing one altitude;
/// solar noon and nadir are the transit and anti-transit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SunEvent {
    /// Lower transit, half a day before solar noon.
    Nadir,
    /// End of night: Sun center rises through -18°.
    NightEnd,
    /// Nautical dawn: Sun center rises through -12°.
    NauticalDawn,
    /// Civil dawn: Sun center rises through -6°.
    Dawn,
    /// Sunrise: upper limb touches the horizon (center at -0.833°).
    Sunrise,
    /// Disk fully risen: lower limb clears the horizon (center at -0.3°).
    SunriseEnd,
    /// End of the morning golden hour: Sun center rises through +6°.
    GoldenHourEnd,
    /// Upper transit of the local meridian.
    SolarNoon,
    /// Start of the evening golden hour: Sun center sets through +6°.
    GoldenHour,
    /// Disk starts to set: lower limb touches the horizon.
    SunsetStart,
    /// Sunset: upper limb disappears below the horizon.
    Sunset,
    /// Civil dusk: Sun center sets through -6°.
    Dusk,
    /// Nautical dusk: Sun center sets through -12°.
    NauticalDusk,
    /// Night: Sun center sets through -18°.
    Night,
}

impl SunEvent {
    /// All events in the order they occur on an ordinary mid-latitude day.
    pub const ALL: [SunEvent; 14] = [
        Self::Nadir,
        Self::NightEnd,
        Self::NauticalDawn,
        Self::Dawn,
        Self::Sunrise,
        Self::SunriseEnd,
        Self::GoldenHourEnd,
        Self::SolarNoon,
        Self::GoldenHour,
        Self::SunsetStart,
        Self::Sunset,
        Self::Dusk,
        Self::NauticalDusk,
        Self::Night,
    ];

    /// Conventional camelCase label, as used by display layers.
    pub fn name(self) -> &'static str {
        match self {
            Self::Nadir => "nadir",
            Self::NightEnd => "nightEnd",
            Self::NauticalDawn => "nauticalDawn",
            Self::Dawn => "dawn",
            Self::Sunrise => "sunrise",
            Self::SunriseEnd => "sunriseEnd",
            Self::GoldenHourEnd => "goldenHourEnd",
            Self::SolarNoon => "solarNoon",
            Self::GoldenHour => "goldenHour",
            Self::SunsetStart => "sunsetStart",
            Self::Sunset => "sunset",
            Self::Dusk => "dusk",
            Self::NauticalDusk => "nauticalDusk",
            Self::Night => "night",
        }
    }

    /// Altitude threshold in degrees, or `None` for noon and nadir.
    pub fn threshold_deg(self) -> Option<f64> {
        SUN_ANGLES
            .iter()
            .find(|a| a.rise == self || a.set == self)
            .map(|a| a.angle_deg)
    }

    /// Whether this is a morning (rising) threshold event.
    pub fn is_rising(self) -> bool {
        SUN_ANGLES.iter().any(|a| a.rise == self)
    }
}

/// One altitude threshold and the pair of events it defines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunAngle {
    /// Sun-center altitude in degrees; negative is below the horizon.
    pub angle_deg: f64,
    /// Event when the Sun climbs through the threshold.
    pub rise: SunEvent,
    /// Event when the Sun descends through the threshold.
    pub set: SunEvent,
}

/// The six standard solar thresholds.
pub const SUN_ANGLES: [SunAngle; 6] = [
    SunAngle {
        angle_deg: -0.833,
        rise: SunEvent::Sunrise,
        set: SunEvent::Sunset,
    },
    SunAngle {
        angle_deg: -0.3,
        rise: SunEvent::SunriseEnd,
        set: SunEvent::SunsetStart,
    },
    SunAngle {
        angle_deg: -6.0,
        rise: SunEvent::Dawn,
        set: SunEvent::Dusk,
    },
    SunAngle {
        angle_deg: -12.0,
        rise: SunEvent::NauticalDawn,
        set: SunEvent::NauticalDusk,
    },
    SunAngle {
        angle_deg: -18.0,
        rise: SunEvent::NightEnd,
        set: SunEvent::Night,
    },
    SunAngle {
        angle_deg: 6.0,
        rise: SunEvent::GoldenHourEnd,
        set: SunEvent::GoldenHour,
    },
];

/// Solar event times for one solar day at one location.
///
/// A field is `None` when the Sun never crosses that threshold on that day
/// (polar day or polar night), never a placeholder instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SolarTimes {
    pub solar_noon: Option<Instant>,
    pub nadir: Option<Instant>,
    pub sunrise: Option<Instant>,
    pub sunset: Option<Instant>,
    pub sunrise_end: Option<Instant>,
    pub sunset_start: Option<Instant>,
    pub dawn: Option<Instant>,
    pub dusk: Option<Instant>,
    pub nautical_dawn: Option<Instant>,
    pub nautical_dusk: Option<Instant>,
    pub night_end: Option<Instant>,
    pub night: Option<Instant>,
    pub golden_hour_end: Option<Instant>,
    pub golden_hour: Option<Instant>,
}

impl SolarTimes {
    /// Time of a named event.
    pub fn get(&self, event: SunEvent) -> Option<Instant> {
        match event {
            SunEvent::Nadir => self.nadir,
            SunEvent::NightEnd => self.night_end,
            SunEvent::NauticalDawn => self.nautical_dawn,
            SunEvent::Dawn => self.dawn,
            SunEvent::Sunrise => self.sunrise,
            SunEvent::SunriseEnd => self.sunrise_end,
            SunEvent::GoldenHourEnd => self.golden_hour_end,
            SunEvent::SolarNoon => self.solar_noon,
            SunEvent::GoldenHour => self.golden_hour,
            SunEvent::SunsetStart => self.sunset_start,
            SunEvent::Sunset => self.sunset,
            SunEvent::Dusk => self.dusk,
            SunEvent::NauticalDusk => self.nautical_dusk,
            SunEvent::Night => self.night,
        }
    }

    pub(crate) fn slot_mut(&mut self, event: SunEvent) -> &mut Option<Instant> {
        match event {
            SunEvent::Nadir => &mut self.nadir,
            SunEvent::NightEnd => &mut self.night_end,
            SunEvent::NauticalDawn => &mut self.nautical_dawn,
            SunEvent::Dawn => &mut self.dawn,
            SunEvent::Sunrise => &mut self.sunrise,
            SunEvent::SunriseEnd => &mut self.sunrise_end,
            SunEvent::GoldenHourEnd => &mut self.golden_hour_end,
            SunEvent::SolarNoon => &mut self.solar_noon,
            SunEvent::GoldenHour => &mut self.golden_hour,
            SunEvent::SunsetStart => &mut self.sunset_start,
            SunEvent::Sunset => &mut self.sunset,
            SunEvent::Dusk => &mut self.dusk,
            SunEvent::NauticalDusk => &mut self.nautical_dusk,
            SunEvent::Night => &mut self.night,
        }
    }

    /// All events with their times, in [`SunEvent::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (SunEvent, Option<Instant>)> + '_ {
        SunEvent::ALL.iter().map(move |&e| (e, self.get(e)))
    }
}

/// Rise/set pair for a caller-supplied altitude threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunCrossing {
    /// Threshold altitude in degrees, before the observer dip correction.
    pub angle_deg: f64,
    pub rise: Option<Instant>,
    pub set: Option<Instant>,
}
