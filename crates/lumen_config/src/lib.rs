//! Named observer sites loaded from TOML.
//!
//! ```toml
//! [defaults]
//! height_m = 0.0
//!
//! [[site]]
//! name = "london"
//! latitude_deg = 51.5074
//! longitude_deg = -0.1278
//! height_m = 11.0
//! ```
//!
//! Sites without `height_m` take `defaults.height_m`. Every site is
//! validated when the catalog is parsed.

pub mod error;

use std::path::Path;

use lumen_ephem::{EphemError, GeoCoordinate};
use serde::Deserialize;

pub use error::ConfigError;

/// Catalog-wide defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Defaults {
    #[serde(default)]
    pub height_m: f64,
}

/// One named observer site.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub name: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub height_m: f64,
}

impl Site {
    /// Validated geographic coordinate of the site.
    pub fn to_coordinate(&self) -> Result<GeoCoordinate, EphemError> {
        GeoCoordinate::try_new(self.latitude_deg, self.longitude_deg, self.height_m)
    }
}

#[derive(Debug, Deserialize)]
struct RawSite {
    name: String,
    latitude_deg: f64,
    longitude_deg: f64,
    #[serde(default)]
    height_m: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    defaults: Defaults,
    #[serde(default, rename = "site")]
    sites: Vec<RawSite>,
}

/// A parsed and validated site catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteConfig {
    pub defaults: Defaults,
    pub sites: Vec<Site>,
}

impl SiteConfig {
    /// Read and parse a catalog file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("loading site catalog from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse a catalog from TOML text.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(contents)?;
        let defaults = raw.defaults;

        let mut sites: Vec<Site> = Vec::with_capacity(raw.sites.len());
        for r in raw.sites {
            if sites.iter().any(|s| s.name.eq_ignore_ascii_case(&r.name)) {
                return Err(ConfigError::DuplicateSite(r.name));
            }
            let site = Site {
                height_m: r.height_m.unwrap_or(defaults.height_m),
                name: r.name,
                latitude_deg: r.latitude_deg,
                longitude_deg: r.longitude_deg,
            };
            if let Err(source) = site.to_coordinate() {
                return Err(ConfigError::InvalidSite {
                    name: site.name,
                    source,
                });
            }
            sites.push(site);
        }

        log::debug!("parsed {} site(s)", sites.len());
        Ok(Self { defaults, sites })
    }

    /// Site by name, ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<&Site> {
        self.sites.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// Coordinate of a named site.
    pub fn coordinate(&self, name: &str) -> Result<GeoCoordinate, ConfigError> {
        let site = self
            .find(name)
            .ok_or_else(|| ConfigError::UnknownSite(name.to_string()))?;
        site.to_coordinate()
            .map_err(|source| ConfigError::InvalidSite {
                name: site.name.clone(),
                source,
            })
    }
}
