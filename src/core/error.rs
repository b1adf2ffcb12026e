//! Error taxonomy for the caddie core

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = CaddieError> = std::result::Result<T, E>;

/// Everything that can go wrong while managing a bag or recommending a club.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CaddieError {
    /// A stored club entry could not be turned into a usable club.
    #[error("malformed bag entry '{name}': {reason}")]
    MalformedBagEntry {
        /// Club name as found in the source data
        name: String,
        /// Why the entry was rejected
        reason: String,
    },
    /// The bag holds no clubs, so nothing can be recommended.
    #[error("the bag is empty")]
    EmptyBag,
    /// No location fix has been received yet.
    #[error("no location fix available")]
    LocationUnavailable,
    /// A club with this name is already in the bag.
    #[error("club '{0}' is already in the bag")]
    DuplicateClub(String),
    /// No club with this name is in the bag.
    #[error("club '{0}' is not in the bag")]
    UnknownClub(String),
    /// Club distances must be finite and strictly positive.
    #[error("invalid distance for '{name}': {value}")]
    InvalidDistance {
        /// Club name
        name: String,
        /// Offending value, as given
        value: String,
    },
    /// The requested hole does not exist on the course.
    #[error("hole {0} does not exist on this course")]
    NoSuchHole(usize),
    /// No course matches the given name.
    #[error("unknown course '{0}'")]
    UnknownCourse(String),
    /// Reading or writing persisted data failed.
    #[error("storage error: {0}")]
    Storage(String),
    /// Persisted data could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<std::io::Error> for CaddieError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for CaddieError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_club() {
        let err = CaddieError::MalformedBagEntry {
            name: "7-Iron".to_string(),
            reason: "not a number".to_string(),
        };
        assert_eq!(err.to_string(), "malformed bag entry '7-Iron': not a number");
        assert_eq!(
            CaddieError::UnknownClub("Putter".to_string()).to_string(),
            "club 'Putter' is not in the bag"
        );
    }

    #[test]
    fn test_serde_errors_become_parse_errors() {
        let err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        assert!(matches!(CaddieError::from(err), CaddieError::Parse(_)));
    }
}
