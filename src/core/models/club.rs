//! Club model

use crate::core::error::{CaddieError, Result};
use serde::{Deserialize, Serialize};

/// A club and how far the player carries it, in metres
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    /// Club name (e.g., "7-Iron"), unique within a bag
    pub name: String,

    /// Effective distance in metres
    pub distance: f64,
}

impl Club {
    /// Create a new club
    ///
    /// # Errors
    /// Returns `InvalidDistance` if the distance is not finite and positive, or
    /// `MalformedBagEntry` if the name is blank.
    pub fn new(name: impl Into<String>, distance: f64) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        validate_distance(&name, distance)?;
        Ok(Self { name, distance })
    }

    /// Create a club from user-entered text such as `"140"` or `" 52.5 "`
    ///
    /// # Errors
    /// Returns `MalformedBagEntry` when the text is not a number.
    pub fn parse(name: impl Into<String>, distance: &str) -> Result<Self> {
        let name = name.into();
        let value = parse_distance(&name, distance)?;
        Self::new(name, value)
    }
}

/// Parse a user-entered distance for the named club
///
/// # Errors
/// Returns `MalformedBagEntry` when the text is empty or not numeric, and
/// `InvalidDistance` when it parses but is not a usable distance.
pub fn parse_distance(name: &str, value: &str) -> Result<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CaddieError::MalformedBagEntry {
            name: name.to_string(),
            reason: "distance is empty".to_string(),
        });
    }
    let distance = trimmed
        .parse::<f64>()
        .map_err(|_| CaddieError::MalformedBagEntry {
            name: name.to_string(),
            reason: format!("'{trimmed}' is not a number"),
        })?;
    validate_distance(name, distance)?;
    Ok(distance)
}

pub(crate) fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CaddieError::MalformedBagEntry {
            name: name.to_string(),
            reason: "club name is empty".to_string(),
        });
    }
    Ok(())
}

pub(crate) fn validate_distance(name: &str, distance: f64) -> Result<()> {
    if distance.is_finite() && distance > 0.0 {
        Ok(())
    } else {
        Err(CaddieError::InvalidDistance {
            name: name.to_string(),
            value: distance.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_club_creation() {
        let club = Club::new("7-Iron", 140.0).unwrap();
        assert_eq!(club.name, "7-Iron");
        assert!((club.distance - 140.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let club = Club::parse("52 Degrees", " 90 ").unwrap();
        assert!((club.distance - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_rejects_text() {
        let err = Club::parse("Driver", "far").unwrap_err();
        assert!(matches!(err, CaddieError::MalformedBagEntry { ref name, .. } if name == "Driver"));
    }

    #[test]
    fn test_rejects_non_positive_and_nan() {
        assert!(matches!(
            Club::new("Putter", 0.0),
            Err(CaddieError::InvalidDistance { .. })
        ));
        assert!(matches!(
            Club::new("Putter", -5.0),
            Err(CaddieError::InvalidDistance { .. })
        ));
        assert!(matches!(
            Club::parse("Putter", "NaN"),
            Err(CaddieError::InvalidDistance { .. })
        ));
    }

    #[test]
    fn test_rejects_blank_name() {
        assert!(matches!(
            Club::new("  ", 100.0),
            Err(CaddieError::MalformedBagEntry { .. })
        ));
    }
}
