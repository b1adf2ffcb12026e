//! Bag command handler

use super::ask_confirmation;
use crate::args::BagSubcommand;
use caddie::config::Config;
use caddie::core::models::{Bag, Club};
use caddie::core::storage::{import_legacy, BagRepository, JsonFileRepository};
use caddie::{error, info, verbose};
use std::fs;
use std::path::Path;

/// Dispatch bag subcommands
///
/// # Errors
/// Returns a printable message when the bag cannot be loaded, edited or saved.
pub fn run(subcommand: Option<BagSubcommand>, config: &Config) -> Result<(), String> {
    let repo = config.bag_repository();
    verbose!("Bag file: {}", repo.path().display());

    match subcommand.unwrap_or(BagSubcommand::List) {
        BagSubcommand::List => {
            print_bag(&load(&repo)?);
            Ok(())
        }
        BagSubcommand::Add { name, distance } => {
            if name.trim().is_empty() || distance.trim().is_empty() {
                return Err("✗ Both a club name and a distance are required".to_string());
            }
            edit(&repo, |bag| bag.add(Club::parse(name.trim(), &distance)?))?;
            println!("✓ Added {} ({} m)", name.trim(), distance.trim());
            Ok(())
        }
        BagSubcommand::Set { name, distance } => {
            edit(&repo, |bag| {
                let club = Club::parse(name.as_str(), &distance)?;
                bag.set_distance(&club.name, club.distance)
            })?;
            println!("✓ {name} now carries {} m", distance.trim());
            Ok(())
        }
        BagSubcommand::Move { name, position } => {
            edit(&repo, |bag| bag.move_club(&name, position.saturating_sub(1)))?;
            println!("✓ Moved {name}");
            Ok(())
        }
        BagSubcommand::Remove { name } => {
            edit(&repo, |bag| bag.remove(&name).map(|_| ()))?;
            println!("✓ Removed {name}");
            Ok(())
        }
        BagSubcommand::Reset => {
            if !ask_confirmation("Replace your bag with the standard set of clubs?") {
                println!("✗ Reset cancelled");
                return Ok(());
            }
            repo.reset()
                .map_err(|e| format!("✗ Failed to reset bag: {e}"))?;
            println!("✓ Bag reset to the standard clubs");
            Ok(())
        }
        BagSubcommand::Import { distances, order } => import(&repo, &distances, &order),
    }
}

fn load(repo: &JsonFileRepository) -> Result<Bag, String> {
    repo.load().map_err(|e| {
        error!("Failed to load bag {}: {e}", repo.path().display());
        format!("✗ Failed to load bag: {e}")
    })
}

/// Load the bag, apply `change` and save it back
fn edit<R, F>(repo: &R, change: F) -> Result<(), String>
where
    R: BagRepository,
    F: FnOnce(&mut Bag) -> caddie::Result<()>,
{
    let mut bag = repo.load().map_err(|e| {
        error!("Failed to load bag: {e}");
        format!("✗ Failed to load bag: {e}")
    })?;
    change(&mut bag).map_err(|e| {
        error!("Bag edit rejected: {e}");
        format!("✗ {e}")
    })?;
    repo.save(&bag).map_err(|e| {
        error!("Failed to save bag: {e}");
        format!("✗ Failed to save bag: {e}")
    })
}

fn import(repo: &JsonFileRepository, distances: &Path, order: &Path) -> Result<(), String> {
    let read = |path: &Path| {
        fs::read_to_string(path).map_err(|e| format!("✗ Failed to read {}: {e}", path.display()))
    };
    let outcome = import_legacy(&read(distances)?, &read(order)?).map_err(|e| format!("✗ {e}"))?;

    for skipped in &outcome.skipped {
        eprintln!("⚠ Skipped {skipped}");
    }
    repo.save(&outcome.bag)
        .map_err(|e| format!("✗ Failed to save bag: {e}"))?;

    info!("Imported {} clubs from legacy files", outcome.bag.len());
    println!(
        "✓ Imported {} clubs ({} skipped)",
        outcome.bag.len(),
        outcome.skipped.len()
    );
    print_bag(&outcome.bag);
    Ok(())
}

fn print_bag(bag: &Bag) {
    if bag.is_empty() {
        println!("(the bag is empty)");
        return;
    }
    let width = bag.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (idx, (name, distance)) in bag.iter().enumerate() {
        println!("{:>2}. {name:<width$}  {distance:>6.1} m", idx + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caddie::core::storage::MemoryRepository;

    #[test]
    fn test_edit_saves_changes() {
        let repo = MemoryRepository::new(Bag::new());
        edit(&repo, |bag| bag.add(Club::new("Driver", 250.0)?)).unwrap();
        assert_eq!(repo.load().unwrap().get("Driver"), Some(250.0));
    }

    #[test]
    fn test_rejected_edit_is_logged_and_not_saved() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let log_path = temp_dir.path().join("caddie.log");
        let logging = caddie::logger::init_file_logging(&log_path);

        let repo = MemoryRepository::new(Bag::standard());
        let err = edit(&repo, |bag| bag.move_club("Putter", 0)).unwrap_err();
        caddie::logger::close_file_logging();

        assert!(err.contains("Putter"));
        assert_eq!(repo.load().unwrap(), Bag::standard());
        if logging {
            let logged = std::fs::read_to_string(&log_path).unwrap();
            assert!(logged.contains("[ERROR] Bag edit rejected: club 'Putter' is not in the bag"));
        }
    }
}
