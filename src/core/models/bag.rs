//! Bag model: the player's clubs in display order

use super::club::{validate_distance, validate_name, Club};
use crate::core::error::{CaddieError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Clubs shipped in a fresh bag, longest first
const DEFAULT_CLUBS: [(&str, f64); 11] = [
    ("Driver", 250.0),
    ("3-Wood", 210.0),
    ("5-Hybrid", 180.0),
    ("5-Iron", 160.0),
    ("6-Iron", 150.0),
    ("7-Iron", 140.0),
    ("8-Iron", 130.0),
    ("9-Iron", 120.0),
    ("Pitching Wedge", 110.0),
    ("52 Degrees", 90.0),
    ("56 Degrees", 60.0),
];

/// An ordered set of clubs
///
/// Names map to distances in a single ordered map, so the display order and
/// the distances cannot drift apart. Serializes as a JSON object whose key
/// order is the bag order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bag {
    clubs: IndexMap<String, f64>,
}

impl Bag {
    /// Create an empty bag
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The bag a new player starts with
    #[must_use]
    pub fn standard() -> Self {
        Self {
            clubs: DEFAULT_CLUBS
                .iter()
                .map(|(name, distance)| ((*name).to_string(), *distance))
                .collect(),
        }
    }

    /// Build a bag from clubs, keeping their order
    ///
    /// # Errors
    /// Returns `DuplicateClub` if a name appears twice.
    pub fn from_clubs<I: IntoIterator<Item = Club>>(clubs: I) -> Result<Self> {
        let mut bag = Self::new();
        for club in clubs {
            bag.add(club)?;
        }
        Ok(bag)
    }

    /// Number of clubs in the bag
    #[must_use]
    pub fn len(&self) -> usize {
        self.clubs.len()
    }

    /// Whether the bag has no clubs
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }

    /// Distance for a club, if present
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.clubs.get(name).copied()
    }

    /// Position of a club in display order
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.clubs.get_index_of(name)
    }

    /// Iterate clubs as `(name, distance)` in display order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.clubs.iter().map(|(name, distance)| (name.as_str(), *distance))
    }

    /// Clubs in display order
    #[must_use]
    pub fn clubs(&self) -> Vec<Club> {
        self.iter()
            .map(|(name, distance)| Club {
                name: name.to_string(),
                distance,
            })
            .collect()
    }

    /// Append a club at the end of the bag
    ///
    /// # Errors
    /// Returns `DuplicateClub` if the name is taken, `MalformedBagEntry` for a
    /// blank name, or `InvalidDistance` for an unusable distance.
    pub fn add(&mut self, club: Club) -> Result<()> {
        if self.clubs.contains_key(&club.name) {
            return Err(CaddieError::DuplicateClub(club.name));
        }
        validate_name(&club.name)?;
        validate_distance(&club.name, club.distance)?;
        self.clubs.insert(club.name, club.distance);
        Ok(())
    }

    /// Change the distance of an existing club
    ///
    /// # Errors
    /// Returns `UnknownClub` if the club is missing, or `InvalidDistance`.
    pub fn set_distance(&mut self, name: &str, distance: f64) -> Result<()> {
        validate_distance(name, distance)?;
        let slot = self
            .clubs
            .get_mut(name)
            .ok_or_else(|| CaddieError::UnknownClub(name.to_string()))?;
        *slot = distance;
        Ok(())
    }

    /// Move a club to a new position; positions past the end clamp to the last slot
    ///
    /// # Errors
    /// Returns `UnknownClub` if the club is missing.
    pub fn move_club(&mut self, name: &str, position: usize) -> Result<()> {
        let from = self
            .clubs
            .get_index_of(name)
            .ok_or_else(|| CaddieError::UnknownClub(name.to_string()))?;
        let to = position.min(self.clubs.len() - 1);
        self.clubs.move_index(from, to);
        Ok(())
    }

    /// Check every club against the rules enforced by [`add`](Self::add)
    ///
    /// Bags decoded straight from JSON skip those checks.
    ///
    /// # Errors
    /// Returns the first `MalformedBagEntry` or `InvalidDistance` found.
    pub fn validate(&self) -> Result<()> {
        for (name, distance) in self.iter() {
            validate_name(name)?;
            validate_distance(name, distance)?;
        }
        Ok(())
    }

    /// Remove a club, returning its distance
    ///
    /// # Errors
    /// Returns `UnknownClub` if the club is missing.
    pub fn remove(&mut self, name: &str) -> Result<f64> {
        self.clubs
            .shift_remove(name)
            .ok_or_else(|| CaddieError::UnknownClub(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(bag: &Bag) -> Vec<&str> {
        bag.iter().map(|(name, _)| name).collect()
    }

    #[test]
    fn test_standard_bag() {
        let bag = Bag::standard();
        assert_eq!(bag.len(), 11);
        assert_eq!(bag.get("Driver"), Some(250.0));
        assert_eq!(bag.get("56 Degrees"), Some(60.0));
        assert_eq!(bag.position("Pitching Wedge"), Some(8));
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut bag = Bag::new();
        bag.add(Club::new("Pitching Wedge", 110.0).unwrap()).unwrap();
        bag.add(Club::new("Driver", 250.0).unwrap()).unwrap();
        assert_eq!(names(&bag), vec!["Pitching Wedge", "Driver"]);
    }

    #[test]
    fn test_add_duplicate_fails() {
        let mut bag = Bag::standard();
        let err = bag.add(Club::new("Driver", 230.0).unwrap()).unwrap_err();
        assert_eq!(err, CaddieError::DuplicateClub("Driver".to_string()));
        assert_eq!(bag.get("Driver"), Some(250.0));
    }

    #[test]
    fn test_add_blank_name_fails() {
        let mut bag = Bag::new();
        let club = Club {
            name: "  ".to_string(),
            distance: 100.0,
        };
        assert!(matches!(
            bag.add(club),
            Err(CaddieError::MalformedBagEntry { .. })
        ));
        assert!(bag.is_empty());
    }

    #[test]
    fn test_set_distance() {
        let mut bag = Bag::standard();
        bag.set_distance("7-Iron", 145.0).unwrap();
        assert_eq!(bag.get("7-Iron"), Some(145.0));
        assert!(matches!(
            bag.set_distance("Putter", 5.0),
            Err(CaddieError::UnknownClub(_))
        ));
        assert!(matches!(
            bag.set_distance("7-Iron", f64::NAN),
            Err(CaddieError::InvalidDistance { .. })
        ));
    }

    #[test]
    fn test_move_club() {
        let mut bag = Bag::standard();
        bag.move_club("56 Degrees", 0).unwrap();
        assert_eq!(bag.position("56 Degrees"), Some(0));
        assert_eq!(bag.position("Driver"), Some(1));

        bag.move_club("56 Degrees", 99).unwrap();
        assert_eq!(bag.position("56 Degrees"), Some(10));
        assert_eq!(bag.position("Driver"), Some(0));
    }

    #[test]
    fn test_remove() {
        let mut bag = Bag::standard();
        assert_eq!(bag.remove("3-Wood").unwrap(), 210.0);
        assert_eq!(bag.len(), 10);
        assert_eq!(bag.position("5-Hybrid"), Some(1));
        assert!(bag.remove("3-Wood").is_err());
    }

    #[test]
    fn test_json_preserves_order() {
        let mut bag = Bag::new();
        bag.add(Club::new("9-Iron", 120.0).unwrap()).unwrap();
        bag.add(Club::new("Driver", 250.0).unwrap()).unwrap();

        let json = serde_json::to_string(&bag).unwrap();
        assert_eq!(json, r#"{"9-Iron":120.0,"Driver":250.0}"#);

        let back: Bag = serde_json::from_str(&json).unwrap();
        assert_eq!(names(&back), vec!["9-Iron", "Driver"]);
    }
}
