//! Integration tests for hole-diagram rounds and GPS tracking

use caddie::core::distance::ImageScale;
use caddie::core::location::location_channel;
use caddie::core::models::course::{find_course, sort_by_proximity};
use caddie::core::models::{Bag, Course, GeoPoint, ImagePoint};
use caddie::core::recommend::{EmptyBagPolicy, Source};
use caddie::core::round::{GeoTracker, ImageRound};
use caddie::CaddieError;
use std::thread;

#[test]
fn image_round_walks_the_course() {
    let courses = Course::samples();
    let course = find_course(&courses, "pebble beach").unwrap().clone();
    let holes = course.holes.len();
    let mut round = ImageRound::new(course, ImageScale::default()).unwrap();

    assert!(!round.previous_hole());
    for _ in 1..holes {
        assert!(round.next_hole());
    }
    assert!(!round.has_next());
    assert!(!round.next_hole());
    assert_eq!(round.hole_index(), holes - 1);
}

#[test]
fn image_round_measures_to_the_flag() {
    let course = Course::samples().remove(0);
    let mut round = ImageRound::new(course, ImageScale::uniform(300.0)).unwrap();

    round.register_shot(ImagePoint::new(0.1, 0.8));
    assert_eq!(round.remaining_distance(), None);

    round.register_shot(ImagePoint::new(0.9, 0.2));
    let remaining = round.remaining_distance().unwrap();
    let flag = round.hole().flag;
    let expected = ((flag.x - 0.9) * 300.0).hypot((flag.y - 0.2) * 300.0);
    assert!((remaining - expected).abs() < 1e-9);
}

#[test]
fn image_round_recommends_from_the_bag() {
    let course = Course::samples().remove(0);
    let mut round = ImageRound::new(course, ImageScale::default()).unwrap();
    round.register_shot(ImagePoint::new(0.5, 0.9));
    round.register_shot(ImagePoint::new(0.5, 0.8));

    let rec = round
        .recommendation(&Bag::standard(), EmptyBagPolicy::Error)
        .unwrap()
        .unwrap();
    assert_eq!(rec.source, Source::Bag);
    assert!(Bag::standard().get(&rec.club).is_some());

    assert_eq!(
        round.recommendation(&Bag::new(), EmptyBagPolicy::Error),
        Err(CaddieError::EmptyBag)
    );

    // Changing hole starts over
    round.next_hole();
    assert_eq!(round.hole().strokes(), 0);
    assert_eq!(round.remaining_distance(), None);
}

#[test]
fn tracker_waits_for_a_fix() {
    let (_tx, rx) = location_channel();
    let mut tracker = GeoTracker::new(rx);

    assert_eq!(
        tracker.register_shot(&Bag::standard(), EmptyBagPolicy::Error),
        Err(CaddieError::LocationUnavailable)
    );
    assert!(tracker.shots().is_empty());
}

#[test]
fn tracker_uses_fixes_posted_from_another_thread() {
    let (tx, rx) = location_channel();
    let mut tracker = GeoTracker::new(rx);
    let bag = Bag::standard();

    let poster = tx.clone();
    thread::spawn(move || {
        poster.post(vec![GeoPoint::new(36.0, -121.0)]);
    })
    .join()
    .unwrap();
    assert_eq!(tracker.register_shot(&bag, EmptyBagPolicy::Error), Ok(None));

    // About 133 m north; only the last fix of the batch counts
    tx.post(vec![GeoPoint::new(36.0005, -121.0), GeoPoint::new(36.0012, -121.0)]);
    let rec = tracker
        .register_shot(&bag, EmptyBagPolicy::Error)
        .unwrap()
        .unwrap();
    assert_eq!(rec.club, "8-Iron");
    assert!((tracker.last_distance().unwrap() - 133.4).abs() < 0.5);
    assert_eq!(tracker.shots().len(), 2);

    tracker.clear();
    assert!(tracker.shots().is_empty());
    assert!(tracker.suggestion().is_none());
    assert_eq!(tracker.position(), Some(GeoPoint::new(36.0012, -121.0)));
}

#[test]
fn courses_sort_nearest_first() {
    let courses = Course::samples();
    let augusta = GeoPoint::new(33.503, -82.020);

    let sorted = sort_by_proximity(&courses, Some(augusta));
    assert_eq!(sorted[0].0.name, "Augusta National");
    assert!(sorted[0].1.unwrap() < sorted[1].1.unwrap());

    let unsorted = sort_by_proximity(&courses, None);
    assert_eq!(unsorted.len(), courses.len());
    assert!(unsorted.iter().all(|(_, km)| km.is_none()));

    assert!(matches!(
        find_course(&courses, "St Andrews"),
        Err(CaddieError::UnknownCourse(_))
    ));
}
