//! Location models for geographic coordinates and resolved place names

use serde::{Deserialize, Serialize};

/// Geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format as a "lat, lon" string
    #[must_use]
    pub fn format(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Resolved location state: coordinate plus display city name.
///
/// Replaced wholesale on each successful refresh; only the board mutates it.
/// No history is retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Where the weather is fetched for
    pub coordinate: Coordinate,
    /// Localized display name of the city
    pub city: String,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(coordinate: Coordinate, city: String) -> Self {
        Self { coordinate, city }
    }
}
