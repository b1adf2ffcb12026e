//! Track command handler: GPS shots fed through the location channel
//!
//! A reader thread turns stdin into location fixes and commands. Fixes go
//! through the location channel; the main thread owns the tracker and pulls
//! the latest fix whenever a command arrives.

use caddie::config::Config;
use caddie::core::location::{location_channel, LocationSender};
use caddie::core::models::GeoPoint;
use caddie::core::round::GeoTracker;
use caddie::core::storage::BagRepository;
use caddie::{debug, CaddieError};
use std::io::{self, BufRead};
use std::sync::mpsc::{self, Sender};
use std::thread;

enum Input {
    Shot,
    Clear,
    Position,
}

/// Track shots from `LAT LON` lines and `shot` commands on stdin
///
/// # Errors
/// Returns a printable message when the bag cannot be loaded.
pub fn run(config: &Config) -> Result<(), String> {
    let bag = config
        .bag_repository()
        .load()
        .map_err(|e| format!("✗ Failed to load bag: {e}"))?;
    let policy = config.empty_bag_policy();

    let (fixes, receiver) = location_channel();
    let (commands, inbox) = mpsc::channel();
    let reader = thread::spawn(move || read_input(&fixes, &commands));

    let mut tracker = GeoTracker::new(receiver);
    for input in inbox {
        match input {
            Input::Shot => match tracker.register_shot(&bag, policy) {
                Ok(Some(rec)) => {
                    println!("Shot {}: {:.1} m", tracker.shots().len() - 1, rec.distance);
                    println!("Suggested club: {}", rec.club);
                }
                Ok(None) => println!("First shot registered"),
                Err(CaddieError::LocationUnavailable) => {
                    println!("Waiting for a location fix before registering shots");
                }
                Err(e) => eprintln!("✗ {e}"),
            },
            Input::Clear => {
                tracker.clear();
                println!("Shots cleared");
            }
            Input::Position => match tracker.sync() {
                Some(p) => println!("Position: {:.6}, {:.6}", p.latitude, p.longitude),
                None => println!("No location fix yet"),
            },
        }
    }

    reader.join().ok();
    Ok(())
}

fn read_input(fixes: &LocationSender, commands: &Sender<Input>) {
    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        let input = match line {
            "" => continue,
            "shot" => Input::Shot,
            "clear" => Input::Clear,
            "where" | "position" => Input::Position,
            "quit" | "exit" => break,
            _ => {
                match parse_fix(line) {
                    Some(fix) => {
                        fixes.post(vec![fix]);
                    }
                    None => eprintln!("Expected 'LAT LON', 'shot', 'clear', 'where' or 'quit'"),
                }
                continue;
            }
        };
        if commands.send(input).is_err() {
            break;
        }
    }
    debug!("Input closed");
}

fn parse_fix(line: &str) -> Option<GeoPoint> {
    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    let lat: f64 = parts.next()?.parse().ok()?;
    let lon: f64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return None;
    }
    Some(GeoPoint::new(lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fix() {
        assert_eq!(parse_fix("36.5678 -121.95"), Some(GeoPoint::new(36.5678, -121.95)));
        assert_eq!(parse_fix("36.5678, -121.95"), Some(GeoPoint::new(36.5678, -121.95)));
        assert_eq!(parse_fix("91 0"), None);
        assert_eq!(parse_fix("1 2 3"), None);
        assert_eq!(parse_fix("north"), None);
    }
}
