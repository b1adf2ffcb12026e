//! Course model and the bundled sample courses

use super::hole::Hole;
use super::point::{GeoPoint, ImagePoint};
use crate::core::distance::{DistanceCalculator, Haversine};
use crate::core::error::{CaddieError, Result};
use serde::{Deserialize, Serialize};

/// A golf course with its holes in playing order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course name (e.g., "Pebble Beach")
    pub name: String,

    /// Reference location used to rank courses by proximity
    pub location: GeoPoint,

    /// Holes in playing order
    pub holes: Vec<Hole>,
}

impl Course {
    /// Create a new course
    #[must_use]
    pub const fn new(name: String, location: GeoPoint, holes: Vec<Hole>) -> Self {
        Self {
            name,
            location,
            holes,
        }
    }

    /// Get a hole by its index in playing order
    ///
    /// # Errors
    /// Returns `NoSuchHole` when the index is out of range.
    pub fn hole(&self, index: usize) -> Result<&Hole> {
        self.holes.get(index).ok_or(CaddieError::NoSuchHole(index))
    }

    /// Total par over all holes
    #[must_use]
    pub fn par(&self) -> u32 {
        self.holes.iter().map(|h| h.par).sum()
    }

    /// Great-circle distance from `from` to this course, in kilometres
    #[must_use]
    pub fn distance_km(&self, from: &GeoPoint) -> f64 {
        Haversine.distance(from, &self.location) / 1000.0
    }

    /// The sample courses bundled with the application
    #[must_use]
    pub fn samples() -> Vec<Self> {
        vec![
            Self::new(
                "Pebble Beach".to_string(),
                GeoPoint::new(36.5678, -121.9500),
                sample_holes(),
            ),
            Self::new(
                "Augusta National".to_string(),
                GeoPoint::new(33.5020, -82.0220),
                sample_holes(),
            ),
        ]
    }
}

fn sample_holes() -> Vec<Hole> {
    vec![
        Hole::new(1, 4, 350, ImagePoint::new(0.9, 0.2)),
        Hole::new(2, 5, 480, ImagePoint::new(0.85, 0.15)),
        Hole::new(3, 3, 150, ImagePoint::new(0.92, 0.18)),
    ]
}

/// Find a course by name, ignoring case
///
/// # Errors
/// Returns `UnknownCourse` when nothing matches.
pub fn find_course<'a>(courses: &'a [Course], name: &str) -> Result<&'a Course> {
    courses
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| CaddieError::UnknownCourse(name.to_string()))
}

/// Order courses nearest first
///
/// Without a location the given order is kept and no distance is reported.
#[must_use]
pub fn sort_by_proximity<'a>(
    courses: &'a [Course],
    from: Option<GeoPoint>,
) -> Vec<(&'a Course, Option<f64>)> {
    let Some(from) = from else {
        return courses.iter().map(|c| (c, None)).collect();
    };

    let mut ranked: Vec<(&Course, Option<f64>)> = courses
        .iter()
        .map(|c| (c, Some(c.distance_km(&from))))
        .collect();
    ranked.sort_by(|a, b| {
        let da = a.1.unwrap_or(f64::INFINITY);
        let db = b.1.unwrap_or(f64::INFINITY);
        da.total_cmp(&db)
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples() {
        let courses = Course::samples();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].holes.len(), 3);
        assert_eq!(courses[0].par(), 12);
        assert_eq!(courses[1].hole(1).unwrap().distance, 480);
        assert!(matches!(courses[1].hole(3), Err(CaddieError::NoSuchHole(3))));
    }

    #[test]
    fn test_find_course_ignores_case() {
        let courses = Course::samples();
        assert_eq!(
            find_course(&courses, "augusta national").unwrap().name,
            "Augusta National"
        );
        assert!(matches!(
            find_course(&courses, "St Andrews"),
            Err(CaddieError::UnknownCourse(_))
        ));
    }

    #[test]
    fn test_sort_without_location_keeps_order() {
        let courses = Course::samples();
        let ranked = sort_by_proximity(&courses, None);
        assert_eq!(ranked[0].0.name, "Pebble Beach");
        assert!(ranked.iter().all(|(_, d)| d.is_none()));
    }

    #[test]
    fn test_sort_nearest_first() {
        let courses = Course::samples();
        // Atlanta is a short drive from Augusta
        let ranked = sort_by_proximity(&courses, Some(GeoPoint::new(33.749, -84.388)));
        assert_eq!(ranked[0].0.name, "Augusta National");
        assert!(ranked[0].1.unwrap() < 300.0);
        assert!(ranked[1].1.unwrap() > 3000.0);
    }
}
