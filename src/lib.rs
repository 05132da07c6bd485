//! Spherical geodesy and polyline encoding for geographic points.
//!
//! One value type ([`Point`]) and pure functions over it: great-circle
//! distance, initial bearing, destination projection, circle sampling, and
//! the compact Google polyline string codec.

pub mod point;
pub mod geodesy;
pub mod polyline;
pub mod error;

pub use error::{GeoError, GeoResult};
pub use point::Point;
