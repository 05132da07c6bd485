//! Test fixtures for geocoord.
//!
//! Named real-world coordinates shared by the integration suites.

pub mod cities;

pub use cities::*;
