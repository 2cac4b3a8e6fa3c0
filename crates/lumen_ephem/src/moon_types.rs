//! Types for lunar position, illumination and rise/set results.

use lumen_frames::HorizontalPosition;
use lumen_time::Instant;

/// Apparent position of the Moon for an observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    /// Azimuth in radians, from south toward west.
    pub azimuth_rad: f64,
    /// Altitude in radians, including first-order refraction.
    pub altitude_rad: f64,
    /// Geocentric distance in km.
    pub distance_km: f64,
    /// Parallactic angle in radians.
    pub parallactic_angle_rad: f64,
}

impl MoonPosition {
    /// Azimuth/altitude part of the position.
    pub fn horizontal(&self) -> HorizontalPosition {
        HorizontalPosition {
            azimuth_rad: self.azimuth_rad,
            altitude_rad: self.altitude_rad,
        }
    }
}

/// Illuminated fraction and phase of the Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonIllumination {
    /// Illuminated fraction of the disk, in [0, 1].
    pub fraction: f64,
    /// Phase in [0, 1): 0 new, 0.25 first quarter, 0.5 full, 0.75 last
    /// quarter.
    pub phase: f64,
    /// Midpoint angle of the bright limb in radians, measured eastward
    /// from the north point of the disk. Negative while waxing.
    pub angle_rad: f64,
}

impl MoonIllumination {
    /// Named phase bucket.
    pub fn phase_name(&self) -> MoonPhase {
        MoonPhase::from_phase(self.phase)
    }

    /// Whether the illuminated fraction is growing.
    pub fn is_waxing(&self) -> bool {
        self.phase < 0.5
    }
}

/// The eight conventional named phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// Phases in cycle order starting from new moon.
    pub const ALL: [MoonPhase; 8] = [
        Self::New,
        Self::WaxingCrescent,
        Self::FirstQuarter,
        Self::WaxingGibbous,
        Self::Full,
        Self::WaningGibbous,
        Self::LastQuarter,
        Self::WaningCrescent,
    ];

    /// Bucket a phase value in [0, 1) into one of eight names, each
    /// centered on a multiple of 1/8.
    pub fn from_phase(phase: f64) -> Self {
        let idx = (phase.rem_euclid(1.0) * 8.0 + 0.5).floor() as usize % 8;
        Self::ALL[idx]
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }
}

/// Moonrise/moonset for one UTC day.
///
/// If neither `rise` nor `set` is present, exactly one of `always_up` and
/// `always_down` is true; otherwise both flags are false.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoonTimes {
    pub rise: Option<Instant>,
    pub set: Option<Instant>,
    /// The Moon stays above the horizon all day.
    pub always_up: bool,
    /// The Moon stays below the horizon all day.
    pub always_down: bool,
}
