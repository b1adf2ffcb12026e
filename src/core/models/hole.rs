//! Hole model

use super::point::ImagePoint;
use serde::{Deserialize, Serialize};

/// One playable hole of a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    /// Hole number as printed on the scorecard
    pub number: u32,

    /// Par for the hole
    pub par: u32,

    /// Length of the hole in metres
    pub distance: u32,

    /// Flag position on the hole diagram
    pub flag: ImagePoint,

    /// Shots registered on this hole; the first one is the tee
    #[serde(default)]
    pub shots: Vec<ImagePoint>,
}

impl Hole {
    /// Create a new hole without shots
    #[must_use]
    pub const fn new(number: u32, par: u32, distance: u32, flag: ImagePoint) -> Self {
        Self {
            number,
            par,
            distance,
            flag,
            shots: Vec::new(),
        }
    }

    /// The tee position, once registered
    #[must_use]
    pub fn tee(&self) -> Option<ImagePoint> {
        self.shots.first().copied()
    }

    /// Strokes played so far (the tee is not a stroke)
    #[must_use]
    pub fn strokes(&self) -> usize {
        self.shots.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tee_and_strokes() {
        let mut hole = Hole::new(1, 4, 350, ImagePoint::new(0.9, 0.2));
        assert!(hole.tee().is_none());
        assert_eq!(hole.strokes(), 0);

        hole.shots.push(ImagePoint::new(0.1, 0.8));
        hole.shots.push(ImagePoint::new(0.5, 0.5));
        assert_eq!(hole.tee(), Some(ImagePoint::new(0.1, 0.8)));
        assert_eq!(hole.strokes(), 1);
    }
}
