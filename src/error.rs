//! Typed errors for construction and codec input validation.
//!
//! The geodesy math itself is total over real inputs and never fails; errors
//! only arise at the boundaries where external input becomes points.

use std::fmt;

/// Errors produced by point construction and the polyline codec.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoError {
    /// Input that cannot be turned into a point or point sequence.
    InvalidArgument(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for GeoError {}

/// Result type for fallible geocoord operations.
pub type GeoResult<T> = Result<T, GeoError>;
