//! Distance between two shot positions
//!
//! Two calculators share the [`DistanceCalculator`] contract:
//! [`ImageDistance`] for fractional hole-diagram positions and [`Haversine`]
//! for GPS fixes. Both return metres and do not validate their inputs.

use crate::core::models::{GeoPoint, ImagePoint};
use serde::{Deserialize, Serialize};

/// Mean Earth radius in metres (IUGG)
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Real-world span a hole diagram covers when nothing else is configured
pub const DEFAULT_IMAGE_SPAN_M: f64 = 300.0;

/// Distance between two points of the same coordinate space
pub trait DistanceCalculator {
    /// Point type this calculator understands
    type Point;

    /// Distance from `a` to `b` in metres
    fn distance(&self, a: &Self::Point, b: &Self::Point) -> f64;
}

/// How many metres the full width and height of a hole diagram represent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageScale {
    /// Metres covered by the full image width
    pub width_m: f64,
    /// Metres covered by the full image height
    pub height_m: f64,
}

impl ImageScale {
    /// Same span on both axes
    #[must_use]
    pub const fn uniform(span_m: f64) -> Self {
        Self {
            width_m: span_m,
            height_m: span_m,
        }
    }
}

impl Default for ImageScale {
    fn default() -> Self {
        Self::uniform(DEFAULT_IMAGE_SPAN_M)
    }
}

/// Euclidean distance on a scaled hole diagram
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImageDistance {
    /// Scale applied to fractional deltas
    pub scale: ImageScale,
}

impl ImageDistance {
    /// Create a calculator for the given scale
    #[must_use]
    pub const fn new(scale: ImageScale) -> Self {
        Self { scale }
    }
}

impl DistanceCalculator for ImageDistance {
    type Point = ImagePoint;

    fn distance(&self, a: &ImagePoint, b: &ImagePoint) -> f64 {
        let dx = (b.x - a.x) * self.scale.width_m;
        let dy = (b.y - a.y) * self.scale.height_m;
        dx.hypot(dy)
    }
}

/// Great-circle distance on a spherical Earth
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Haversine;

impl DistanceCalculator for Haversine {
    type Point = GeoPoint;

    fn distance(&self, a: &GeoPoint, b: &GeoPoint) -> f64 {
        let lat1 = a.latitude.to_radians();
        let lat2 = b.latitude.to_radians();
        let dlat = (b.latitude - a.latitude).to_radians();
        let dlon = (b.longitude - a.longitude).to_radians();

        let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_M * h.sqrt().clamp(0.0, 1.0).asin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_distance_example() {
        let d = ImageDistance::default().distance(&ImagePoint::new(0.1, 0.8), &ImagePoint::new(0.9, 0.2));
        assert!((d - 300.0).abs() < 1e-9, "got {d}");
    }

    #[test]
    fn test_image_distance_is_symmetric() {
        let calc = ImageDistance::default();
        let a = ImagePoint::new(0.2, 0.3);
        let b = ImagePoint::new(0.7, 0.9);
        assert!((calc.distance(&a, &b) - calc.distance(&b, &a)).abs() < 1e-12);
        assert!(calc.distance(&a, &a).abs() < f64::EPSILON);
    }

    #[test]
    fn test_image_distance_uses_height_span() {
        let calc = ImageDistance::new(ImageScale {
            width_m: 300.0,
            height_m: 150.0,
        });
        let d = calc.distance(&ImagePoint::new(0.5, 0.0), &ImagePoint::new(0.5, 1.0));
        assert!((d - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_same_point() {
        let p = GeoPoint::new(36.5678, -121.95);
        assert!(Haversine.distance(&p, &p).abs() < 1e-6);
    }

    #[test]
    fn test_haversine_one_degree_of_latitude() {
        let d = Haversine.distance(&GeoPoint::new(0.0, 0.0), &GeoPoint::new(1.0, 0.0));
        // 2 * pi * R / 360
        assert!((d - 111_195.08).abs() < 1.0, "got {d}");
    }

    #[test]
    fn test_haversine_pebble_to_augusta() {
        let pebble = GeoPoint::new(36.5678, -121.95);
        let augusta = GeoPoint::new(33.502, -82.022);
        let km = Haversine.distance(&pebble, &augusta) / 1000.0;
        // Roughly 3,600 km coast to coast
        assert!((km - 3_600.0).abs() < 100.0, "got {km}");
    }

    #[test]
    fn test_nan_propagates() {
        let d = Haversine.distance(&GeoPoint::new(f64::NAN, 0.0), &GeoPoint::new(0.0, 0.0));
        assert!(d.is_nan());
    }
}
