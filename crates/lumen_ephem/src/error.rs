//! Error types for ephemeris inputs.
//!
//! The computations themselves never fail: degenerate geometry is encoded
//! in the result types. Errors only arise when validating caller input.

use thiserror::Error;

/// Errors from validating ephemeris inputs.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemError {
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
}
