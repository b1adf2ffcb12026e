//! Bag persistence
//!
//! A [`BagRepository`] hides where the bag lives. [`JsonFileRepository`]
//! stores it as one JSON object on disk, [`MemoryRepository`] keeps it in
//! process. [`import_legacy`] reads the older two-document layout, where
//! distances and display order were stored separately.

use crate::core::error::{CaddieError, Result};
use crate::core::models::club::parse_distance;
use crate::core::models::{Bag, Club};
use crate::{debug, info, warn};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads and saves the player's bag
pub trait BagRepository {
    /// Load the stored bag
    ///
    /// # Errors
    /// Returns `Storage` or `Parse` errors when the bag cannot be read.
    fn load(&self) -> Result<Bag>;

    /// Replace the stored bag
    ///
    /// # Errors
    /// Returns `Storage` errors when the bag cannot be written.
    fn save(&self, bag: &Bag) -> Result<()>;
}

/// A bag stored as a JSON object (`{"Driver": 250.0, ...}`) in a file
///
/// A missing file loads as [`Bag::standard`].
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File the bag is stored in
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the stored bag so the next load returns the standard bag
    ///
    /// # Errors
    /// Returns a `Storage` error if the file exists but cannot be removed.
    pub fn reset(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

impl BagRepository for JsonFileRepository {
    fn load(&self) -> Result<Bag> {
        if !self.path.exists() {
            debug!("No bag at {}; using the standard bag", self.path.display());
            return Ok(Bag::standard());
        }
        let content = fs::read_to_string(&self.path)
            .map_err(|e| CaddieError::Storage(format!("{}: {e}", self.path.display())))?;
        let bag: Bag = serde_json::from_str(&content)
            .map_err(|e| CaddieError::Parse(format!("{}: {e}", self.path.display())))?;
        bag.validate()?;
        debug!("Loaded {} clubs from {}", bag.len(), self.path.display());
        Ok(bag)
    }

    fn save(&self, bag: &Bag) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(bag)?;
        fs::write(&self.path, json)?;
        info!("Saved {} clubs to {}", bag.len(), self.path.display());
        Ok(())
    }
}

/// A bag held in memory
#[derive(Debug, Default)]
pub struct MemoryRepository {
    bag: RefCell<Bag>,
}

impl MemoryRepository {
    /// Create a repository holding `bag`
    #[must_use]
    pub const fn new(bag: Bag) -> Self {
        Self {
            bag: RefCell::new(bag),
        }
    }
}

impl BagRepository for MemoryRepository {
    fn load(&self) -> Result<Bag> {
        Ok(self.bag.borrow().clone())
    }

    fn save(&self, bag: &Bag) -> Result<()> {
        self.bag.replace(bag.clone());
        Ok(())
    }
}

/// Outcome of a legacy import: the bag plus every entry that was skipped
#[derive(Debug, Clone, Default)]
pub struct LegacyImport {
    /// Clubs that could be imported, in display order
    pub bag: Bag,
    /// Entries that were dropped, each as a `MalformedBagEntry`
    pub skipped: Vec<CaddieError>,
}

/// Import a bag from the legacy layout
///
/// `distances_json` maps club names to distances stored as text
/// (`{"Driver":"250"}`) and `order_json` lists club names in display order.
/// Clubs named in the order list come first; distances missing from it are
/// appended after them. Entries that cannot be imported are reported in
/// [`LegacyImport::skipped`] instead of being dropped silently.
///
/// # Errors
/// Returns `Parse` if either document is not valid JSON of the expected shape.
pub fn import_legacy(distances_json: &str, order_json: &str) -> Result<LegacyImport> {
    let distances: IndexMap<String, String> = serde_json::from_str(distances_json)
        .map_err(|e| CaddieError::Parse(format!("club distances: {e}")))?;
    let order: Vec<String> = serde_json::from_str(order_json)
        .map_err(|e| CaddieError::Parse(format!("club order: {e}")))?;

    let mut import = LegacyImport::default();

    let ordered = order.iter().map(String::as_str);
    let orphans = distances
        .keys()
        .map(String::as_str)
        .filter(|name| !order.iter().any(|o| o == name));

    for name in ordered.chain(orphans) {
        let Some(raw) = distances.get(name) else {
            import.skipped.push(CaddieError::MalformedBagEntry {
                name: name.to_string(),
                reason: "listed in the club order but has no distance".to_string(),
            });
            continue;
        };
        let added = parse_distance(name, raw)
            .and_then(|distance| Club::new(name, distance))
            .and_then(|club| import.bag.add(club));
        if let Err(e) = added {
            import.skipped.push(match e {
                CaddieError::DuplicateClub(name) => CaddieError::MalformedBagEntry {
                    name,
                    reason: "listed more than once in the club order".to_string(),
                },
                CaddieError::InvalidDistance { name, value } => CaddieError::MalformedBagEntry {
                    name,
                    reason: format!("distance {value} is not positive"),
                },
                other => other,
            });
        }
    }

    for skipped in &import.skipped {
        warn!("Legacy import skipped an entry: {skipped}");
    }
    Ok(import)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_round_trip() {
        let repo = MemoryRepository::default();
        assert!(repo.load().unwrap().is_empty());

        repo.save(&Bag::standard()).unwrap();
        assert_eq!(repo.load().unwrap(), Bag::standard());
    }

    #[test]
    fn test_legacy_import_follows_order_list() {
        let import = import_legacy(
            r#"{"Driver":"250","Pitching Wedge":"110","7-Iron":"140"}"#,
            r#"["Pitching Wedge","7-Iron","Driver"]"#,
        )
        .unwrap();
        let names: Vec<&str> = import.bag.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Pitching Wedge", "7-Iron", "Driver"]);
        assert!(import.skipped.is_empty());
    }

    #[test]
    fn test_legacy_import_reports_bad_entries() {
        let import = import_legacy(
            r#"{"Driver":"250","7-Iron":"long","Hybrid":"180"}"#,
            r#"["Driver","7-Iron","Putter"]"#,
        )
        .unwrap();

        let names: Vec<&str> = import.bag.iter().map(|(n, _)| n).collect();
        // Hybrid was missing from the order list and is appended
        assert_eq!(names, vec!["Driver", "Hybrid"]);

        let skipped: Vec<String> = import
            .skipped
            .iter()
            .filter_map(|e| match e {
                CaddieError::MalformedBagEntry { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(skipped, vec!["7-Iron", "Putter"]);
    }

    #[test]
    fn test_legacy_import_rejects_bad_json() {
        assert!(matches!(
            import_legacy("not json", "[]"),
            Err(CaddieError::Parse(_))
        ));
        assert!(matches!(
            import_legacy("{}", r#"{"a":1}"#),
            Err(CaddieError::Parse(_))
        ));
    }
}
