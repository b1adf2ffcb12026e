//! Courses command handler

use caddie::core::models::course::sort_by_proximity;
use caddie::core::models::{Course, GeoPoint};

/// List the bundled courses, nearest first when a position is known
pub fn run(lat: Option<f64>, lon: Option<f64>) {
    let courses = Course::samples();
    let here = lat.zip(lon).map(|(lat, lon)| GeoPoint::new(lat, lon));

    for (course, km) in sort_by_proximity(&courses, here) {
        let holes = course.holes.len();
        match km {
            Some(km) => println!("{:<20} {holes} holes, par {}  {km:.1} km", course.name, course.par()),
            None => println!("{:<20} {holes} holes, par {}", course.name, course.par()),
        }
    }
}
