//! Geographic point in latitude/longitude degrees.
//!
//! The point is the only entity in this crate; the geodesy functions and the
//! polyline codec consume and produce it. Coordinate ranges are not enforced:
//! the trigonometry stays defined (periodic) for out-of-range values, even
//! where they are physically meaningless.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GeoError, GeoResult};
use crate::geodesy::{self, CircleOptions};
use crate::polyline;

/// A geographic point on the spherical Earth model.
///
/// Both fields are degrees. Latitude is conceptually in [-90, 90] and
/// longitude in [-180, 180], but neither range is checked.
///
/// Deserialization accepts `lat`/`lng` keys, the long `latitude`/`longitude`
/// spellings, or a two-element sequence; serialization always emits the
/// short keys.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Latitude in degrees.
    #[serde(alias = "latitude")]
    pub lat: f64,
    /// Longitude in degrees.
    #[serde(alias = "longitude")]
    pub lng: f64,
}

impl Point {
    /// Creates a point from a latitude/longitude pair in degrees.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to `other` in meters.
    pub fn distance_to(&self, other: &Point) -> f64 {
        geodesy::distance(self.lat, self.lng, other.lat, other.lng)
    }

    /// Initial bearing toward `other` in degrees, [0, 360) clockwise from
    /// north.
    pub fn bearing_to(&self, other: &Point) -> f64 {
        geodesy::bearing(*self, *other)
    }

    /// The point `distance_m` meters from here along `bearing_deg`.
    pub fn destination(&self, bearing_deg: f64, distance_m: f64) -> Point {
        geodesy::destination(*self, bearing_deg, distance_m)
    }

    /// Samples a ring of points at `radius_m` meters around this point.
    pub fn circle(&self, radius_m: f64, options: CircleOptions) -> Vec<Point> {
        geodesy::circle(*self, radius_m, options)
    }

    /// Samples a ring around this point and encodes it as a polyline string.
    pub fn encoded_circle(&self, radius_m: f64, options: CircleOptions) -> GeoResult<String> {
        polyline::encode_polyline(&geodesy::circle(*self, radius_m, options))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for Point {
    type Err = GeoError;

    /// Parses a `"lat,lng"` pair. Whitespace around either half is accepted;
    /// anything else is an error, never a partially-set point.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s.split_once(',').ok_or_else(|| {
            GeoError::InvalidArgument(format!("expected \"lat,lng\", got \"{}\"", s))
        })?;
        let lat = lat.trim().parse::<f64>().map_err(|_| {
            GeoError::InvalidArgument(format!("latitude \"{}\" is not a number", lat.trim()))
        })?;
        let lng = lng.trim().parse::<f64>().map_err(|_| {
            GeoError::InvalidArgument(format!("longitude \"{}\" is not a number", lng.trim()))
        })?;
        Ok(Self { lat, lng })
    }
}

impl From<(f64, f64)> for Point {
    fn from(pair: (f64, f64)) -> Self {
        Self {
            lat: pair.0,
            lng: pair.1,
        }
    }
}

impl From<[f64; 2]> for Point {
    fn from(pair: [f64; 2]) -> Self {
        Self {
            lat: pair[0],
            lng: pair[1],
        }
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = GeoError;

    fn try_from(coords: &[f64]) -> Result<Self, Self::Error> {
        match coords {
            [lat, lng] => Ok(Self {
                lat: *lat,
                lng: *lng,
            }),
            _ => Err(GeoError::InvalidArgument(format!(
                "expected exactly 2 coordinates, got {}",
                coords.len()
            ))),
        }
    }
}
