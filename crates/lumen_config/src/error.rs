//! Error types for site catalog loading.

use lumen_ephem::EphemError;
use thiserror::Error;

/// Errors raised while loading or querying a site catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read site catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("site {name:?}: {source}")]
    InvalidSite {
        name: String,
        #[source]
        source: EphemError,
    },
    #[error("site {0:?} is defined more than once")]
    DuplicateSite(String),
    #[error("no site named {0:?}")]
    UnknownSite(String),
}
