//! Great-circle geodesy on a fixed-radius spherical Earth.
//!
//! Distance, initial bearing, destination projection and circle sampling.
//! Everything here is a pure function; angles cross the API in degrees and
//! are converted to radians internally.

use std::f64::consts::PI;

use tracing::trace;

use crate::point::Point;

/// Earth radius in meters (spherical model).
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Great-circle distance between two coordinate pairs, in meters.
///
/// Uses the spherical law of cosines. The cosine of the central angle is
/// clamped to [-1, 1] before `acos` so floating-point drift at coincident or
/// antipodal inputs cannot leave the domain and surface as NaN.
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lng1 = lng1.to_radians();
    let lat2 = lat2.to_radians();
    let lng2 = lng2.to_radians();

    let cos_central = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * (lng1 - lng2).cos();

    cos_central.clamp(-1.0, 1.0).acos() * EARTH_RADIUS
}

/// Initial bearing from `from` toward `to`, in degrees [0, 360) clockwise
/// from north.
///
/// Coincident points, and exact antipodes along a meridian, yield 0.
pub fn bearing(from: Point, to: Point) -> f64 {
    let lat1 = from.lat.to_radians();
    let lng1 = from.lng.to_radians();
    let lat2 = to.lat.to_radians();
    let lng2 = to.lng.to_radians();

    let a = lat2.cos() * (lng2 - lng1).sin();
    let b = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * (lng2 - lng1).cos();

    let radians = if a == 0.0 && b == 0.0 {
        0.0
    } else if b == 0.0 {
        if a < 0.0 { 3.0 * PI / 2.0 } else { PI / 2.0 }
    } else if b < 0.0 {
        (a / b).atan() + PI
    } else if a < 0.0 {
        (a / b).atan() + 2.0 * PI
    } else {
        (a / b).atan()
    };

    // atan(a/b) + 2π can round up to exactly 2π for tiny negative a.
    radians.to_degrees().rem_euclid(360.0)
}

/// The point `distance_m` meters from `origin` along `bearing_deg`.
///
/// The returned longitude is not normalized into [-180, 180]; callers that
/// need wrapped values normalize explicitly.
pub fn destination(origin: Point, bearing_deg: f64, distance_m: f64) -> Point {
    let lat1 = origin.lat.to_radians();
    let lng1 = origin.lng.to_radians();
    let bearing = bearing_deg.to_radians();
    let angular = distance_m / EARTH_RADIUS;

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
    let lng2 = lng1
        + (bearing.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    Point::new(lat2.to_degrees(), lng2.to_degrees())
}

/// Sampling configuration for [`circle`].
#[derive(Debug, Clone, Copy)]
pub struct CircleOptions {
    /// Number of arc segments; the ring is sampled at `segments + 1` bearings
    /// inclusive of 0° and 360°. Zero is treated as one segment.
    pub segments: u32,
    /// Append the first point again at the end to close the ring.
    pub closed: bool,
}

impl Default for CircleOptions {
    fn default() -> Self {
        Self {
            segments: 36, // 10° steps
            closed: false,
        }
    }
}

/// Samples a ring of points at `radius_m` meters around `center`.
///
/// Points are ordered by increasing bearing from 0° to 360°. When
/// `360 / segments` divides evenly the wrap-around sample coincides with the
/// first one and is dropped; the result never contains duplicate points by
/// value equality. With `closed` the first point is appended again at the
/// end, exempt from the duplicate rule.
pub fn circle(center: Point, radius_m: f64, options: CircleOptions) -> Vec<Point> {
    let segments = options.segments.max(1);
    let step = 360.0 / f64::from(segments);

    let mut points: Vec<Point> = Vec::with_capacity(segments as usize + 2);
    for i in 0..=segments {
        let sample = destination(center, f64::from(i) * step, radius_m);
        if !points.contains(&sample) {
            points.push(sample);
        }
    }

    if options.closed {
        if let Some(first) = points.first().copied() {
            points.push(first);
        }
    }

    trace!(
        lat = center.lat,
        lng = center.lng,
        radius_m,
        segments,
        count = points.len(),
        "sampled circle"
    );

    points
}
