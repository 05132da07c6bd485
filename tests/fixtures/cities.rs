//! Well-known city coordinates for the integration suites.
//!
//! Coordinates from GeoNames, rounded to 5 decimal places (the polyline
//! codec's precision) so encode/decode round-trips compare exactly.

use geocoord::Point;

/// A named reference coordinate.
#[derive(Debug, Clone)]
pub struct City {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl City {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn point(&self) -> Point {
        Point::new(self.lat, self.lng)
    }
}

pub const CITIES: &[City] = &[
    City::new("Las Vegas", 36.17497, -115.13722),
    City::new("Los Angeles", 34.05223, -118.24368),
    City::new("New York", 40.71427, -74.00597),
    City::new("London", 51.50853, -0.12574),
    City::new("Sydney", -33.86785, 151.20732),
    City::new("Quito", -0.22985, -78.52495),
    City::new("Reykjavik", 64.13548, -21.89541),
];
