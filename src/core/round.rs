//! Round state: hole-diagram play and GPS shot tracking

use crate::core::distance::{DistanceCalculator, Haversine, ImageDistance, ImageScale};
use crate::core::error::{CaddieError, Result};
use crate::core::location::LocationReceiver;
use crate::core::models::{Bag, Course, GeoPoint, Hole, ImagePoint};
use crate::core::recommend::{recommendation_for, EmptyBagPolicy, Recommendation};
use crate::{debug, info};

/// Playing a course on its hole diagrams
///
/// Shots are fractional positions on the current hole's diagram. Moving to
/// another hole starts that hole with no shots.
#[derive(Debug, Clone)]
pub struct ImageRound {
    course: Course,
    current: usize,
    calculator: ImageDistance,
}

impl ImageRound {
    /// Start a round on the first hole of `course`
    ///
    /// # Errors
    /// Returns `NoSuchHole(0)` if the course has no holes.
    pub fn new(course: Course, scale: ImageScale) -> Result<Self> {
        course.hole(0)?;
        let mut round = Self {
            course,
            current: 0,
            calculator: ImageDistance::new(scale),
        };
        round.clear_shots();
        Ok(round)
    }

    /// Course being played
    #[must_use]
    pub const fn course(&self) -> &Course {
        &self.course
    }

    /// Index of the current hole in playing order
    #[must_use]
    pub const fn hole_index(&self) -> usize {
        self.current
    }

    /// The current hole
    #[must_use]
    pub fn hole(&self) -> &Hole {
        &self.course.holes[self.current]
    }

    /// Whether a later hole exists
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current + 1 < self.course.holes.len()
    }

    /// Whether an earlier hole exists
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current > 0
    }

    /// Move to the next hole; returns `false` on the last hole
    pub fn next_hole(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current += 1;
        self.clear_shots();
        true
    }

    /// Move to the previous hole; returns `false` on the first hole
    pub fn previous_hole(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current -= 1;
        self.clear_shots();
        true
    }

    /// Record a shot on the current hole; the first one is the tee
    pub fn register_shot(&mut self, at: ImagePoint) {
        let hole = &mut self.course.holes[self.current];
        hole.shots.push(at);
        debug!(
            "Hole {}: shot {} at ({:.3}, {:.3})",
            hole.number,
            hole.shots.len(),
            at.x,
            at.y
        );
    }

    /// Distance from the last shot to the flag, in metres
    ///
    /// Available once the tee and at least one more shot are registered.
    #[must_use]
    pub fn remaining_distance(&self) -> Option<f64> {
        let hole = self.hole();
        if hole.shots.len() < 2 {
            return None;
        }
        hole.shots
            .last()
            .map(|last| self.calculator.distance(last, &hole.flag))
    }

    /// Club recommendation for the remaining distance, if there is one
    ///
    /// # Errors
    /// Returns `EmptyBag` when the bag is empty under [`EmptyBagPolicy::Error`].
    pub fn recommendation(&self, bag: &Bag, policy: EmptyBagPolicy) -> Result<Option<Recommendation>> {
        self.remaining_distance()
            .map(|distance| recommendation_for(bag, distance, policy))
            .transpose()
    }

    fn clear_shots(&mut self) {
        self.course.holes[self.current].shots.clear();
    }
}

/// Tracking shots from GPS fixes
///
/// Fixes arrive through a [`LocationReceiver`]; each registered shot is
/// placed at the latest fix. Shots accumulate until [`clear`](Self::clear).
#[derive(Debug)]
pub struct GeoTracker {
    receiver: LocationReceiver,
    position: Option<GeoPoint>,
    shots: Vec<GeoPoint>,
    last_distance: Option<f64>,
    suggestion: Option<Recommendation>,
}

impl GeoTracker {
    /// Create a tracker fed by `receiver`
    #[must_use]
    pub const fn new(receiver: LocationReceiver) -> Self {
        Self {
            receiver,
            position: None,
            shots: Vec::new(),
            last_distance: None,
            suggestion: None,
        }
    }

    /// Pull pending fixes and return the current position
    pub fn sync(&mut self) -> Option<GeoPoint> {
        self.position = self.receiver.latest();
        self.position
    }

    /// Current position, as of the last [`sync`](Self::sync)
    #[must_use]
    pub const fn position(&self) -> Option<GeoPoint> {
        self.position
    }

    /// Shots registered so far
    #[must_use]
    pub fn shots(&self) -> &[GeoPoint] {
        &self.shots
    }

    /// Distance covered by the last shot, in metres
    #[must_use]
    pub const fn last_distance(&self) -> Option<f64> {
        self.last_distance
    }

    /// Club suggested for the last shot's distance
    #[must_use]
    pub const fn suggestion(&self) -> Option<&Recommendation> {
        self.suggestion.as_ref()
    }

    /// Register a shot at the current position
    ///
    /// When a previous shot exists, the distance from it is recorded together
    /// with a club recommendation, which is also returned. The shot is kept
    /// even when no club can be recommended.
    ///
    /// # Errors
    /// Returns `LocationUnavailable` when no fix has arrived yet, and
    /// `EmptyBag` when the bag is empty under [`EmptyBagPolicy::Error`].
    pub fn register_shot(&mut self, bag: &Bag, policy: EmptyBagPolicy) -> Result<Option<Recommendation>> {
        let here = self.sync().ok_or(CaddieError::LocationUnavailable)?;
        let previous = self.shots.last().copied();
        self.shots.push(here);

        let Some(previous) = previous else {
            return Ok(None);
        };
        let distance = Haversine.distance(&previous, &here);
        self.last_distance = Some(distance);
        self.suggestion = None;

        let rec = recommendation_for(bag, distance, policy)?;
        info!("Shot {}: {distance:.1} m, suggested {}", self.shots.len() - 1, rec.club);
        self.suggestion = Some(rec.clone());
        Ok(Some(rec))
    }

    /// Forget all shots
    pub fn clear(&mut self) {
        self.shots.clear();
        self.last_distance = None;
        self.suggestion = None;
    }
}
