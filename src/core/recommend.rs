//! Club recommendation
//!
//! [`recommend`] is the single selection rule: the longest club whose carry
//! does not exceed the remaining distance, or the shortest club when every
//! club carries too far. [`DefaultBands`] is the fixed table used when the
//! player has no clubs configured, and [`Recommender`] ties both to a
//! [`BagRepository`].

use crate::core::error::{CaddieError, Result};
use crate::core::models::{Bag, Club};
use crate::core::storage::BagRepository;
use crate::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pick the best club in `bag` for `distance` metres
///
/// Clubs are ranked longest first with a stable sort, so on equal distances
/// the club listed first in the bag wins.
///
/// # Errors
/// Returns `EmptyBag` when the bag has no clubs.
pub fn recommend(distance: f64, bag: &Bag) -> Result<Club> {
    let mut ranked: Vec<(&str, f64)> = bag.iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let (name, club_distance) = ranked
        .iter()
        .find(|(_, club_distance)| distance >= *club_distance)
        .or_else(|| ranked.last())
        .copied()
        .ok_or(CaddieError::EmptyBag)?;

    Ok(Club {
        name: name.to_string(),
        distance: club_distance,
    })
}

/// Fixed distance bands used when the player has no bag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultBands;

impl DefaultBands {
    /// Upper bounds (exclusive) in metres and the club for each band
    pub const BANDS: [(f64, &'static str); 5] = [
        (50.0, "Sand Wedge"),
        (100.0, "Pitching Wedge"),
        (150.0, "8-Iron"),
        (200.0, "5-Iron"),
        (250.0, "3-Iron"),
    ];

    /// Club used beyond the last band
    pub const LONGEST: &'static str = "Driver";

    /// Club name for `distance` metres
    #[must_use]
    pub fn club_for(distance: f64) -> &'static str {
        Self::BANDS
            .iter()
            .find(|(limit, _)| distance < *limit)
            .map_or(Self::LONGEST, |(_, club)| club)
    }
}

/// What to do when the bag is empty
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyBagPolicy {
    /// Report `EmptyBag`
    #[default]
    Error,
    /// Fall back to [`DefaultBands`]
    DefaultBands,
}

impl FromStr for EmptyBagPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "default-bands" | "default_bands" | "bands" => Ok(Self::DefaultBands),
            _ => Err(format!("Unknown empty bag policy: {s}")),
        }
    }
}

impl fmt::Display for EmptyBagPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::DefaultBands => write!(f, "default-bands"),
        }
    }
}

/// Where a recommendation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The player's bag
    Bag,
    /// The fixed [`DefaultBands`] table
    DefaultBands,
}

/// A recommended club for a given distance
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Remaining distance in metres
    pub distance: f64,
    /// Recommended club name
    pub club: String,
    /// Where the club was picked from
    pub source: Source,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2} m)", self.club, self.distance)?;
        if self.source == Source::DefaultBands {
            write!(f, " [default bands]")?;
        }
        Ok(())
    }
}

/// Recommends clubs from the bag held by a repository
#[derive(Debug)]
pub struct Recommender<R> {
    repository: R,
    policy: EmptyBagPolicy,
}

impl<R: BagRepository> Recommender<R> {
    /// Create a recommender over `repository`
    pub const fn new(repository: R, policy: EmptyBagPolicy) -> Self {
        Self { repository, policy }
    }

    /// The underlying repository
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Load the bag and recommend a club for `distance` metres
    ///
    /// # Errors
    /// Propagates repository errors, and returns `EmptyBag` when the bag is
    /// empty under [`EmptyBagPolicy::Error`].
    pub fn recommend(&self, distance: f64) -> Result<Recommendation> {
        let bag = self.repository.load()?;
        recommendation_for(&bag, distance, self.policy)
    }
}

/// Recommend from an already loaded bag, applying `policy` when it is empty
///
/// # Errors
/// Returns `EmptyBag` when the bag is empty under [`EmptyBagPolicy::Error`].
pub fn recommendation_for(bag: &Bag, distance: f64, policy: EmptyBagPolicy) -> Result<Recommendation> {
    match recommend(distance, bag) {
        Ok(club) => Ok(Recommendation {
            distance,
            club: club.name,
            source: Source::Bag,
        }),
        Err(CaddieError::EmptyBag) if policy == EmptyBagPolicy::DefaultBands => {
            debug!("Bag is empty; using default bands for {distance:.1} m");
            Ok(Recommendation {
                distance,
                club: DefaultBands::club_for(distance).to_string(),
                source: Source::DefaultBands,
            })
        }
        Err(e) => Err(e),
    }
}
