//! Shot positions

use serde::{Deserialize, Serialize};

/// A position on a hole diagram, as fractions of the image size
///
/// `(0, 0)` is the top-left corner and `(1, 1)` the bottom-right one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImagePoint {
    /// Horizontal fraction
    pub x: f64,
    /// Vertical fraction
    pub y: f64,
}

impl ImagePoint {
    /// Construct a new [`ImagePoint`].
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert a tap in pixels into a fractional position
    #[must_use]
    pub fn from_pixels(px: f64, py: f64, width: f64, height: f64) -> Self {
        Self::new(px / width, py / height)
    }
}

/// Geographic coordinates in decimal degrees (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl GeoPoint {
    /// Construct a new [`GeoPoint`].
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pixels() {
        let p = ImagePoint::from_pixels(150.0, 75.0, 300.0, 300.0);
        assert!((p.x - 0.5).abs() < f64::EPSILON);
        assert!((p.y - 0.25).abs() < f64::EPSILON);
    }
}
