//! Google polyline codec for point sequences.
//!
//! Implements the encoded-polyline algorithm: coordinates are fixed to five
//! decimal places, delta-encoded against the previous point, zigzagged so
//! small negative and positive deltas both stay short, and emitted as
//! printable 5-bit chunks. Encoding and decoding happen here at the string
//! boundary; everything else in the crate works on [`Point`] values.

use tracing::trace;

use crate::error::{GeoError, GeoResult};
use crate::point::Point;

/// Encodes one signed value as a polyline token.
///
/// The value is scaled by 1e5 and rounded to an integer, shifted left one
/// bit, and one's-complemented when negative. The result is emitted
/// least-significant-first in 5-bit chunks, each ORed with 0x20 while more
/// bits remain and offset by 63 to land in printable ASCII. A value that
/// rounds to zero is the single character `?`.
///
/// The scaled integer is clamped into the 62 bits the left shift can carry,
/// so every input yields a decodable token. Degree-scale inputs never
/// approach the bound.
pub fn encode_number(value: f64) -> String {
    let scaled = ((value * 1e5).round() as i64).clamp(i64::MIN >> 1, i64::MAX >> 1);

    let mut tmp = scaled << 1;
    if scaled < 0 {
        tmp = !tmp;
    }
    if tmp == 0 {
        return "?".to_string();
    }

    let mut token = String::new();
    while tmp > 0 {
        let mut chunk = (tmp & 0x1f) as u8;
        if tmp > 0x1f {
            chunk |= 0x20;
        }
        token.push(char::from(chunk + 63));
        tmp >>= 5;
    }
    token
}

/// Encodes an ordered point sequence as a polyline string.
///
/// The first point is encoded relative to an implicit (0, 0) origin, every
/// later point relative to its predecessor. Deltas are taken on the raw
/// floating-point coordinates; the five-decimal rounding happens only inside
/// [`encode_number`]. Repeated deltas are encoded every time they occur.
///
/// An empty sequence is rejected with [`GeoError::InvalidArgument`].
pub fn encode_polyline(points: &[Point]) -> GeoResult<String> {
    if points.is_empty() {
        return Err(GeoError::InvalidArgument(
            "cannot encode an empty point sequence".to_string(),
        ));
    }

    let mut encoded = String::new();
    let mut previous = Point::default();
    for point in points {
        encoded.push_str(&encode_number(point.lat - previous.lat));
        encoded.push_str(&encode_number(point.lng - previous.lng));
        previous = *point;
    }

    trace!(points = points.len(), bytes = encoded.len(), "encoded polyline");
    Ok(encoded)
}

/// Decodes a polyline string back into points.
///
/// Inverse of [`encode_polyline`], lossless to five decimal places. Deltas
/// accumulate in scaled integer space. An empty string decodes to an empty
/// sequence. A byte outside the printable token range, a string ending
/// inside a chunk sequence, a latitude with no following longitude, or a
/// coordinate driven past the 64-bit scaled range is an
/// [`GeoError::InvalidArgument`].
pub fn decode_polyline(encoded: &str) -> GeoResult<Vec<Point>> {
    let mut points = Vec::new();
    let mut bytes = encoded.bytes();
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while let Some(lat_delta) = decode_value(&mut bytes)? {
        let Some(lng_delta) = decode_value(&mut bytes)? else {
            return Err(GeoError::InvalidArgument(
                "polyline ends after a latitude with no longitude".to_string(),
            ));
        };
        lat = accumulate(lat, lat_delta)?;
        lng = accumulate(lng, lng_delta)?;
        points.push(Point::new(lat as f64 / 1e5, lng as f64 / 1e5));
    }

    trace!(bytes = encoded.len(), points = points.len(), "decoded polyline");
    Ok(points)
}

/// Reads one zigzagged value from the byte stream and undoes the zigzag.
///
/// Returns `Ok(None)` on a clean end of input between values.
fn decode_value(bytes: &mut impl Iterator<Item = u8>) -> GeoResult<Option<i64>> {
    let mut value: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let Some(byte) = bytes.next() else {
            if shift == 0 {
                return Ok(None);
            }
            return Err(GeoError::InvalidArgument(
                "polyline ends inside a chunk sequence".to_string(),
            ));
        };
        if !(63..=126).contains(&byte) {
            return Err(GeoError::InvalidArgument(format!(
                "invalid polyline byte {}",
                byte
            )));
        }

        let chunk = u64::from(byte - 63);
        // A thirteenth chunk may only carry the last four value bits.
        if shift == 60 && chunk & 0x10 != 0 {
            return Err(GeoError::InvalidArgument(
                "polyline value overflows 64 bits".to_string(),
            ));
        }
        value |= (chunk & 0x1f) << shift;
        if chunk & 0x20 == 0 {
            break;
        }
        shift += 5;
        if shift > 63 {
            return Err(GeoError::InvalidArgument(
                "polyline chunk sequence is too long".to_string(),
            ));
        }
    }

    let zigzagged = value as i64;
    let scaled = if zigzagged & 1 == 1 {
        (!zigzagged) >> 1
    } else {
        zigzagged >> 1
    };
    Ok(Some(scaled))
}

/// Adds one decoded delta onto a running scaled coordinate, rejecting
/// totals that leave the 64-bit range.
fn accumulate(total: i64, delta: i64) -> GeoResult<i64> {
    total.checked_add(delta).ok_or_else(|| {
        GeoError::InvalidArgument("polyline coordinate overflows the scaled range".to_string())
    })
}
